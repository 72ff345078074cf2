use std::{cmp::Ordering, collections::HashMap};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::{
    common::{SimulationConfig, entities::app_errors::CoreError},
    menu::entities::{Menu, MenuItem},
    simulation::{entities::SimulationOutcome, ports::DemandModel},
};

const PREFERENCE_RANGE: (f64, f64) = (0.1, 1.0);

/// Mixed into the engine seed so per-run budgets do not replay the
/// population draw.
const BUDGET_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// A simulated customer with fixed tastes and price sensitivity.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAgent {
    pub agent_id: String,
    pub price_sensitivity: f64,
    pub preferences: HashMap<String, f64>,
}

impl CustomerAgent {
    pub fn new(agent_id: impl Into<String>, price_sensitivity: f64) -> Self {
        Self {
            agent_id: agent_id.into(),
            price_sensitivity,
            preferences: HashMap::new(),
        }
    }

    pub fn with_preference(mut self, item_id: impl Into<String>, score: f64) -> Self {
        self.preferences.insert(item_id.into(), score);
        self
    }

    /// `pref / price^(sensitivity * (0.5 + pref))`; the exponent grows with
    /// preference so favourite items react more strongly to price.
    pub fn utility(&self, item: &MenuItem) -> f64 {
        let preference = self.preferences.get(&item.id).copied().unwrap_or(0.0);
        if preference == 0.0 {
            return 0.0;
        }
        if item.price <= 0.0 {
            return preference;
        }

        let exponent = self.price_sensitivity * (0.5 + preference);
        preference / item.price.powf(exponent)
    }

    /// Greedy basket: affordable items by descending utility until the cap or
    /// the budget is exhausted.
    pub fn choose_items<'a>(
        &self,
        items: &'a [MenuItem],
        budget: f64,
        max_items: usize,
    ) -> Vec<&'a MenuItem> {
        let mut candidates: Vec<(&MenuItem, f64)> = items
            .iter()
            .filter(|item| item.price <= budget)
            .map(|item| (item, self.utility(item)))
            .filter(|(_, utility)| *utility > 0.0)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut remaining = budget;
        let mut chosen = Vec::new();

        for (item, _) in candidates {
            if chosen.len() < max_items && item.price <= remaining {
                chosen.push(item);
                remaining -= item.price;
            }
            if chosen.len() >= max_items || remaining <= 0.0 {
                break;
            }
        }

        chosen
    }
}

/// Agent-based demand model: a seeded population of customers shopping once
/// per simulated period.
#[derive(Debug, Clone)]
pub struct AgentPopulation {
    agents: Vec<CustomerAgent>,
    budget_range: (f64, f64),
    max_items_per_agent: usize,
    seed: u64,
}

impl AgentPopulation {
    pub fn generate(menu: &Menu, config: &SimulationConfig, seed: u64) -> Result<Self, CoreError> {
        validate_range("budget", config.budget_range)?;
        validate_range("price sensitivity", config.sensitivity_range)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let (min_sensitivity, max_sensitivity) = config.sensitivity_range;

        let agents = (0..config.num_agents)
            .map(|i| {
                let sensitivity = rng.gen_range(min_sensitivity..=max_sensitivity);
                menu.items().iter().fold(
                    CustomerAgent::new(format!("agent_{i:03}"), sensitivity),
                    |agent, item| {
                        let score = rng.gen_range(PREFERENCE_RANGE.0..=PREFERENCE_RANGE.1);
                        agent.with_preference(item.id.clone(), score)
                    },
                )
            })
            .collect();

        Ok(Self::from_agents(
            agents,
            config.budget_range,
            config.max_items_per_agent,
            seed,
        ))
    }

    pub fn from_agents(
        agents: Vec<CustomerAgent>,
        budget_range: (f64, f64),
        max_items_per_agent: usize,
        seed: u64,
    ) -> Self {
        Self {
            agents,
            budget_range,
            max_items_per_agent,
            seed,
        }
    }

    pub fn agents(&self) -> &[CustomerAgent] {
        &self.agents
    }
}

impl DemandModel for AgentPopulation {
    fn name(&self) -> &'static str {
        "agent_based"
    }

    fn simulate(&self, menu: &Menu) -> Result<SimulationOutcome, CoreError> {
        // Same budget stream on every run: baseline and scenario face the
        // same customers.
        let mut rng = StdRng::seed_from_u64(self.seed ^ BUDGET_STREAM);
        let (min_budget, max_budget) = self.budget_range;
        let mut counts = vec![0.0; menu.len()];

        for agent in &self.agents {
            let budget = rng.gen_range(min_budget..=max_budget);
            for item in agent.choose_items(menu.items(), budget, self.max_items_per_agent) {
                if let Some(position) = menu.position(&item.id) {
                    counts[position] += 1.0;
                }
            }
        }

        tracing::debug!(
            agents = self.agents.len(),
            items_sold = counts.iter().sum::<f64>(),
            "agent simulation run complete"
        );

        Ok(SimulationOutcome::from_demand(menu, &counts))
    }
}

fn validate_range(label: &str, (min, max): (f64, f64)) -> Result<(), CoreError> {
    if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
        return Err(CoreError::InvalidConfiguration(format!(
            "{label} range must satisfy 0 <= min <= max, got {min}..{max}"
        )));
    }
    Ok(())
}

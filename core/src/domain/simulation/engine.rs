use crate::domain::{
    common::{
        DemandModelKind, SimulationConfig, entities::app_errors::CoreError, generate_timestamp,
        generate_uuid_v7, round_to, round_to_cents,
    },
    elasticity::{
        calculator::arc_elasticity,
        entities::{DemandClassification, Elasticity, ItemRelationship},
        value_objects::{PricePoint, XedSimulationData},
    },
    menu::entities::{Menu, MenuItem},
    simulation::{
        agents::AgentPopulation,
        constant_elasticity::ConstantElasticityModel,
        entities::SimulationOutcome,
        ports::DemandModel,
        value_objects::{ComparisonRow, CrossPriceEffect, PriceComparison},
    },
};

/// Runs baseline and repriced scenarios of the master menu through a demand
/// model.
pub struct SimulationEngine {
    menu: Menu,
    model: Box<dyn DemandModel>,
}

impl SimulationEngine {
    pub fn new(menu: Menu, model: Box<dyn DemandModel>) -> Self {
        Self { menu, model }
    }

    pub fn build(menu: Menu, config: &SimulationConfig, seed: u64) -> Result<Self, CoreError> {
        let model: Box<dyn DemandModel> = match config.model {
            DemandModelKind::ConstantElasticity(curve) => {
                Box::new(ConstantElasticityModel::new(&menu, curve))
            }
            DemandModelKind::Agents => Box::new(AgentPopulation::generate(&menu, config, seed)?),
        };

        tracing::info!(
            model = model.name(),
            items = menu.len(),
            seed,
            "simulation engine built"
        );

        Ok(Self::new(menu, model))
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    pub fn baseline(&self) -> Result<SimulationOutcome, CoreError> {
        self.model.simulate(&self.menu)
    }

    pub fn run_price_scenario(
        &self,
        item_id: &str,
        new_price: f64,
    ) -> Result<SimulationOutcome, CoreError> {
        let scenario_menu = self.menu.with_price(item_id, new_price)?;
        self.model.simulate(&scenario_menu)
    }

    pub fn compare_price_change(
        &self,
        item_id: &str,
        new_price: f64,
    ) -> Result<PriceComparison, CoreError> {
        let item = self.find_item(item_id)?;
        let baseline = self.baseline()?;
        let scenario = self.run_price_scenario(item_id, new_price)?;

        let comparison_table = baseline
            .demand_per_item
            .iter()
            .zip(scenario.demand_per_item.iter())
            .map(|(base, scen)| ComparisonRow {
                item_id: base.item_id.clone(),
                name: base.name.clone(),
                original_price: base.price,
                scenario_price: scen.price,
                baseline_demand: base.demand,
                scenario_demand: scen.demand,
                baseline_revenue: round_to_cents(base.revenue),
                scenario_revenue: round_to_cents(scen.revenue),
            })
            .collect();

        let own_price_elasticity = arc_elasticity(
            baseline.demand_of(item_id),
            scenario.demand_of(item_id),
            item.price,
            new_price,
        );

        let (generated_at, _) = generate_timestamp();

        Ok(PriceComparison {
            run_id: generate_uuid_v7(),
            generated_at,
            demand_model: self.model_name().to_string(),
            message: format!("Simulation complete for {} at ${:.2}", item.name, new_price),
            changed_item_id: item.id.clone(),
            changed_item_name: item.name.clone(),
            original_price: item.price,
            new_price_for_changed_item: new_price,
            baseline_total_revenue: round_to_cents(baseline.total_revenue),
            scenario_total_revenue: round_to_cents(scenario.total_revenue),
            revenue_change: round_to_cents(scenario.total_revenue - baseline.total_revenue),
            baseline_total_items_sold: baseline.total_items_sold,
            scenario_total_items_sold: scenario.total_items_sold,
            comparison_table,
            own_price_elasticity,
            own_price_classification: DemandClassification::from_elasticity(own_price_elasticity),
            cross_price_elasticities_with_changed_item: cross_price_effects(
                item, new_price, &baseline, &scenario,
            ),
        })
    }

    /// Baseline point plus one point per non-zero relative price change.
    pub fn ped_simulation_set(
        &self,
        item_id: &str,
        percentage_changes: &[f64],
    ) -> Result<Vec<PricePoint>, CoreError> {
        let item = self.find_item(item_id)?;
        let baseline = self.baseline()?;

        let mut points = vec![PricePoint {
            price: item.price,
            demand: baseline.demand_of(item_id),
            is_baseline: true,
            percentage_change: 0.0,
        }];

        for &change in percentage_changes.iter().filter(|change| **change != 0.0) {
            let price = round_to_cents(item.price * (1.0 + change));
            if price < 0.0 {
                tracing::warn!(
                    item_id,
                    change,
                    price,
                    "skipping price change that yields a negative price"
                );
                continue;
            }

            // Points the demand model cannot price (a zero price on the
            // log-linear curve) are dropped like negative ones.
            let outcome = match self.run_price_scenario(item_id, price) {
                Ok(outcome) => outcome,
                Err(CoreError::InvalidPrice { reason, .. }) => {
                    tracing::warn!(item_id, change, price, %reason, "skipping unpriceable price change");
                    continue;
                }
                Err(e) => return Err(e),
            };
            points.push(PricePoint {
                price,
                demand: outcome.demand_of(item_id),
                is_baseline: false,
                percentage_change: change,
            });
        }

        Ok(points)
    }

    pub fn xed_simulation_set(
        &self,
        target_item_id: &str,
        affecting_item_id: &str,
        percentage_change: f64,
    ) -> Result<XedSimulationData, CoreError> {
        if target_item_id == affecting_item_id {
            return Err(CoreError::SameItem(target_item_id.to_string()));
        }

        let target = self.find_item(target_item_id)?;
        let affecting = self.find_item(affecting_item_id)?;

        let scenario_price = round_to_cents(affecting.price * (1.0 + percentage_change));
        if scenario_price < 0.0 {
            return Err(CoreError::InvalidPrice {
                item_id: affecting.id.clone(),
                price: scenario_price,
                reason: "price change results in a negative price".to_string(),
            });
        }

        let baseline = self.baseline()?;
        let scenario = self.run_price_scenario(affecting_item_id, scenario_price)?;

        Ok(XedSimulationData {
            target_item_name: target.name.clone(),
            target_item_id: target.id.clone(),
            affecting_item_name: affecting.name.clone(),
            affecting_item_id: affecting.id.clone(),
            q_target_base: baseline.demand_of(target_item_id),
            q_target_scenario: scenario.demand_of(target_item_id),
            p_affecting_base: affecting.price,
            p_affecting_scenario: scenario_price,
            percentage_change_p_affecting: percentage_change,
        })
    }

    fn find_item(&self, item_id: &str) -> Result<&MenuItem, CoreError> {
        self.menu
            .item(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }
}

/// Percent change in every other item's demand per percent change in the
/// repriced item's price.
fn cross_price_effects(
    changed: &MenuItem,
    new_price: f64,
    baseline: &SimulationOutcome,
    scenario: &SimulationOutcome,
) -> Vec<CrossPriceEffect> {
    if changed.price == 0.0 || new_price == changed.price {
        return Vec::new();
    }
    let price_change = (new_price - changed.price) / changed.price;

    baseline
        .demand_per_item
        .iter()
        .filter(|row| row.item_id != changed.id)
        .map(|row| {
            let q1 = row.demand;
            let q2 = scenario.demand_of(&row.item_id);

            let (elasticity, new_demand) = if q1 == 0.0 {
                if q2 > 0.0 {
                    (Elasticity::Undefined, true)
                } else {
                    (Elasticity::Finite(0.0), false)
                }
            } else {
                let value = ((q2 - q1) / q1) / price_change;
                (Elasticity::Finite(round_to(value, 3)), false)
            };

            CrossPriceEffect {
                item_id: row.item_id.clone(),
                item_name: row.name.clone(),
                elasticity,
                new_demand,
                relationship: ItemRelationship::from_elasticity(elasticity),
            }
        })
        .collect()
}

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PlatelyConfig {
    pub simulation: SimulationConfig,
    pub menu_source: MenuSourceConfig,
    pub pos: Option<PosConfig>,
}

/// Which demand model the engine runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemandModelKind {
    ConstantElasticity(DemandCurve),
    Agents,
}

/// Shape of the constant-elasticity demand curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemandCurve {
    LogLinear,
    Linear,
}

#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub model: DemandModelKind,
    pub num_agents: usize,
    pub budget_range: (f64, f64),
    pub sensitivity_range: (f64, f64),
    pub max_items_per_agent: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            model: DemandModelKind::ConstantElasticity(DemandCurve::LogLinear),
            num_agents: 100,
            budget_range: (20.0, 100.0),
            sensitivity_range: (0.2, 0.8),
            max_items_per_agent: 3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Returns the configured seed, drawing one when none was set.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().r#gen())
    }
}

#[derive(Clone, Debug, Default)]
pub enum MenuSourceConfig {
    #[default]
    Sample,
    File(std::path::PathBuf),
}

#[derive(Clone, Debug)]
pub struct PosConfig {
    pub base_url: String,
    pub restaurant_guid: String,
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub page_size: u32,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Rounds a monetary amount to cents.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(10.0 * 1.1), 11.0);
        assert_eq!(round_to_cents(12.345), 12.35);
        assert_eq!(round_to_cents(-0.004), -0.0);
    }

    #[test]
    fn test_resolve_seed_prefers_configured_value() {
        let config = SimulationConfig {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(config.resolve_seed(), 42);
    }
}

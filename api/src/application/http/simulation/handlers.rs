pub mod calculate_elasticities;
pub mod simulate;

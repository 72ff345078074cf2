use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::elasticity::entities::{DemandClassification, Elasticity, ItemRelationship};

/// One simulated (price, demand) observation for the item being varied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricePoint {
    pub price: f64,
    pub demand: f64,
    pub is_baseline: bool,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PedResult {
    pub percentage_change_price: f64,
    pub original_price: f64,
    pub new_price: f64,
    pub original_demand: f64,
    pub new_demand: f64,
    #[schema(value_type = Option<f64>)]
    pub ped_value: Elasticity,
    pub classification: DemandClassification,
    pub revenue_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct XedSimulationData {
    pub target_item_name: String,
    pub target_item_id: String,
    pub affecting_item_name: String,
    pub affecting_item_id: String,
    pub q_target_base: f64,
    pub q_target_scenario: f64,
    pub p_affecting_base: f64,
    pub p_affecting_scenario: f64,
    pub percentage_change_p_affecting: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct XedResult {
    #[serde(flatten)]
    pub simulation: XedSimulationData,
    #[schema(value_type = Option<f64>)]
    pub xed_value: Elasticity,
    pub relationship: ItemRelationship,
}

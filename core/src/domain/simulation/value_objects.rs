use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    elasticity::{
        entities::{DemandClassification, Elasticity, ItemRelationship},
        value_objects::{PedResult, PricePoint},
    },
};

/// Exclusive bounds on a relative price change (-100% .. +1000%).
pub const MIN_PERCENTAGE_CHANGE: f64 = -1.0;
pub const MAX_PERCENTAGE_CHANGE: f64 = 10.0;

pub const DEFAULT_PED_PERCENTAGE_CHANGES: [f64; 4] = [-0.2, -0.1, 0.1, 0.2];
pub const DEFAULT_XED_PERCENTAGE_CHANGE: f64 = 0.1;

pub fn validate_percentage_change(change: f64) -> Result<f64, CoreError> {
    if change.is_finite() && change > MIN_PERCENTAGE_CHANGE && change < MAX_PERCENTAGE_CHANGE {
        Ok(change)
    } else {
        Err(CoreError::InvalidPercentageChange(change))
    }
}

pub struct SimulatePriceChangeInput {
    pub item_id: String,
    pub new_price: f64,
}

pub struct CalculatePedInput {
    pub item_id: String,
    pub percentage_changes: Vec<f64>,
}

pub struct CalculateXedInput {
    pub target_item_id: String,
    pub affecting_item_id: String,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonRow {
    pub item_id: String,
    pub name: String,
    pub original_price: f64,
    pub scenario_price: f64,
    pub baseline_demand: f64,
    pub scenario_demand: f64,
    pub baseline_revenue: f64,
    pub scenario_revenue: f64,
}

/// Simple percent-change cross effect of the repriced item on another item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrossPriceEffect {
    pub item_id: String,
    pub item_name: String,
    #[schema(value_type = Option<f64>)]
    pub elasticity: Elasticity,
    /// Baseline demand was zero and the scenario created some.
    pub new_demand: bool,
    pub relationship: ItemRelationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceComparison {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub demand_model: String,
    pub message: String,
    pub changed_item_id: String,
    pub changed_item_name: String,
    pub original_price: f64,
    pub new_price_for_changed_item: f64,
    pub baseline_total_revenue: f64,
    pub scenario_total_revenue: f64,
    pub revenue_change: f64,
    pub baseline_total_items_sold: f64,
    pub scenario_total_items_sold: f64,
    pub comparison_table: Vec<ComparisonRow>,
    #[schema(value_type = Option<f64>)]
    pub own_price_elasticity: Elasticity,
    pub own_price_classification: DemandClassification,
    pub cross_price_elasticities_with_changed_item: Vec<CrossPriceEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PedReport {
    pub item_id: String,
    pub item_name: String,
    pub demand_model: String,
    /// Raw simulated observations, baseline first.
    pub points: Vec<PricePoint>,
    pub data: Vec<PedResult>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A closed order pulled from the point-of-sale system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosOrder {
    pub guid: String,
    pub business_date: Option<NaiveDate>,
    pub selections: Vec<PosSelection>,
}

/// One line of an order. `price` is the extended price of the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosSelection {
    pub item_id: String,
    pub display_name: String,
    pub quantity: f64,
    pub price: f64,
    pub voided: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservedItemDemand {
    pub item_id: String,
    pub name: String,
    pub quantity: f64,
    pub revenue: f64,
    /// Whether the item is on the current master menu.
    pub on_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservedDemand {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub order_count: usize,
    pub total_quantity: f64,
    pub total_revenue: f64,
    pub items: Vec<ObservedItemDemand>,
}

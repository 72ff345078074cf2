use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::Menu;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDemand {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub demand: f64,
    pub revenue: f64,
}

/// Demand and revenue of every menu item for one simulated period. Values
/// are unrounded; comparisons round to cents when they are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimulationOutcome {
    pub total_revenue: f64,
    pub total_items_sold: f64,
    pub demand_per_item: Vec<ItemDemand>,
}

impl SimulationOutcome {
    /// Builds an outcome from per-item demand given in menu order.
    pub fn from_demand(menu: &Menu, demand: &[f64]) -> Self {
        let demand_per_item: Vec<ItemDemand> = menu
            .items()
            .iter()
            .zip(demand.iter().copied().chain(std::iter::repeat(0.0)))
            .map(|(item, demand)| ItemDemand {
                item_id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                demand,
                revenue: item.price * demand,
            })
            .collect();

        let total_revenue = demand_per_item.iter().map(|d| d.revenue).sum();
        let total_items_sold = demand_per_item.iter().map(|d| d.demand).sum();

        Self {
            total_revenue,
            total_items_sold,
            demand_per_item,
        }
    }

    pub fn for_item(&self, item_id: &str) -> Option<&ItemDemand> {
        self.demand_per_item.iter().find(|d| d.item_id == item_id)
    }

    pub fn demand_of(&self, item_id: &str) -> f64 {
        self.for_item(item_id).map(|d| d.demand).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::MenuItem;

    #[test]
    fn test_outcome_totals_and_missing_demand() {
        let menu = Menu::new(
            vec![
                MenuItem::new("burger", "Classic Burger", 12.0),
                MenuItem::new("coke", "Coke", 2.5),
                MenuItem::new("salad", "Caesar Salad", 10.0),
            ],
            vec![],
        )
        .unwrap();

        let outcome = SimulationOutcome::from_demand(&menu, &[3.0, 4.0]);

        assert_eq!(outcome.demand_per_item.len(), 3);
        assert_eq!(outcome.demand_of("salad"), 0.0);
        assert_eq!(outcome.for_item("coke").unwrap().revenue, 10.0);
        assert_eq!(outcome.total_revenue, 46.0);
        assert_eq!(outcome.total_items_sold, 7.0);
        assert_eq!(outcome.demand_of("unknown"), 0.0);
    }

    #[test]
    fn test_totals_sum_unrounded_revenue() {
        let menu = Menu::new(
            vec![
                MenuItem::new("a", "A", 0.99),
                MenuItem::new("b", "B", 0.99),
                MenuItem::new("c", "C", 0.99),
            ],
            vec![],
        )
        .unwrap();

        let outcome = SimulationOutcome::from_demand(&menu, &[1.005, 1.005, 1.005]);

        assert!((outcome.for_item("a").unwrap().revenue - 0.99495).abs() < 1e-12);
        assert!((outcome.total_revenue - 2.98485).abs() < 1e-12);
    }
}

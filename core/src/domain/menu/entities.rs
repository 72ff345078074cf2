use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Units sold per period at the listed price.
    #[serde(default)]
    pub baseline_demand: f64,
    /// Own-price elasticity used by the constant-elasticity model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_elasticity: Option<f64>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            baseline_demand: 0.0,
            own_elasticity: None,
        }
    }

    pub fn with_demand(mut self, baseline_demand: f64, own_elasticity: f64) -> Self {
        self.baseline_demand = baseline_demand;
        self.own_elasticity = Some(own_elasticity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrossElasticity {
    pub target_item_id: String,
    pub affecting_item_id: String,
    pub coefficient: f64,
}

/// Validated, ordered menu. Scenario menus are derived copies; a menu is never
/// repriced in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
    cross_elasticities: Vec<CrossElasticity>,
}

impl Menu {
    pub fn new(
        items: Vec<MenuItem>,
        cross_elasticities: Vec<CrossElasticity>,
    ) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();

        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CoreError::InvalidMenu("item id must not be empty".into()));
            }
            if item.name.trim().is_empty() {
                return Err(CoreError::InvalidMenu(format!(
                    "item '{}' has an empty name",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CoreError::InvalidMenu(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            validate_price(&item.id, item.price)?;
            if !item.baseline_demand.is_finite() || item.baseline_demand < 0.0 {
                return Err(CoreError::InvalidMenu(format!(
                    "item '{}' has an invalid baseline demand: {}",
                    item.id, item.baseline_demand
                )));
            }
            if let Some(elasticity) = item.own_elasticity
                && !elasticity.is_finite()
            {
                return Err(CoreError::InvalidMenu(format!(
                    "item '{}' has a non-finite elasticity",
                    item.id
                )));
            }
        }

        for cross in &cross_elasticities {
            if cross.target_item_id == cross.affecting_item_id {
                return Err(CoreError::InvalidMenu(format!(
                    "cross elasticity of '{}' with itself",
                    cross.target_item_id
                )));
            }
            for id in [&cross.target_item_id, &cross.affecting_item_id] {
                if !seen.contains(id.as_str()) {
                    return Err(CoreError::InvalidMenu(format!(
                        "cross elasticity references unknown item '{id}'"
                    )));
                }
            }
            if !cross.coefficient.is_finite() {
                return Err(CoreError::InvalidMenu(format!(
                    "cross elasticity between '{}' and '{}' is not finite",
                    cross.target_item_id, cross.affecting_item_id
                )));
            }
        }

        Ok(Self {
            items,
            cross_elasticities,
        })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn cross_elasticities(&self) -> &[CrossElasticity] {
        &self.cross_elasticities
    }

    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy of this menu with one item repriced.
    pub fn with_price(&self, item_id: &str, new_price: f64) -> Result<Self, CoreError> {
        validate_price(item_id, new_price)?;
        let position = self
            .position(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        let mut repriced = self.clone();
        repriced.items[position].price = new_price;
        Ok(repriced)
    }
}

fn validate_price(item_id: &str, price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::InvalidPrice {
            item_id: item_id.to_string(),
            price,
            reason: "price must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("burger", "Classic Burger", 10.0),
            MenuItem::new("pizza", "Pepperoni Pizza", 12.0),
            MenuItem::new("salad", "Caesar Salad", 8.0),
        ]
    }

    #[test]
    fn test_with_price_leaves_master_untouched() {
        let menu = Menu::new(items(), vec![]).unwrap();
        let repriced = menu.with_price("burger", 11.0).unwrap();

        assert_eq!(repriced.item("burger").unwrap().price, 11.0);
        assert_eq!(menu.item("burger").unwrap().price, 10.0);
    }

    #[test]
    fn test_with_price_rejects_unknown_item_and_negative_price() {
        let menu = Menu::new(items(), vec![]).unwrap();

        assert_eq!(
            menu.with_price("nonexistent", 15.0),
            Err(CoreError::ItemNotFound("nonexistent".into()))
        );
        assert!(matches!(
            menu.with_price("burger", -5.0),
            Err(CoreError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let menu = Menu::new(items(), vec![]).unwrap();
        assert!(menu.with_price("salad", 0.0).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut duplicated = items();
        duplicated.push(MenuItem::new("burger", "Other Burger", 9.0));

        assert!(matches!(
            Menu::new(duplicated, vec![]),
            Err(CoreError::InvalidMenu(_))
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut invalid = items();
        invalid[1].price = -1.0;

        assert!(matches!(
            Menu::new(invalid, vec![]),
            Err(CoreError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_cross_elasticity_with_unknown_item() {
        let cross = vec![CrossElasticity {
            target_item_id: "burger".into(),
            affecting_item_id: "steak".into(),
            coefficient: 0.3,
        }];

        assert!(matches!(
            Menu::new(items(), cross),
            Err(CoreError::InvalidMenu(_))
        ));
    }

    #[test]
    fn test_empty_menu_is_valid() {
        let menu = Menu::new(vec![], vec![]).unwrap();
        assert!(menu.is_empty());
    }
}

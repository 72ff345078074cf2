use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{
    menu::entities::MenuItem,
    pos::entities::{PosOrder, PosSelection},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastMenu {
    #[serde(default)]
    pub menu_groups: Vec<ToastMenuGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastMenuGroup {
    #[serde(default)]
    pub menu_items: Vec<ToastMenuItem>,
    #[serde(default)]
    pub menu_groups: Vec<ToastMenuGroup>,
}

#[derive(Debug, Deserialize)]
pub struct ToastMenuItem {
    pub guid: String,
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastOrder {
    pub guid: String,
    /// `yyyymmdd` as an integer.
    pub business_date: Option<u32>,
    #[serde(default)]
    pub checks: Vec<ToastCheck>,
}

#[derive(Debug, Deserialize)]
pub struct ToastCheck {
    #[serde(default)]
    pub selections: Vec<ToastSelection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastSelection {
    pub item: Option<ToastReference>,
    pub display_name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    #[serde(default)]
    pub voided: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToastReference {
    pub guid: String,
}

#[derive(Debug, Deserialize)]
pub struct ToastTokenResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(alias = "expiresIn")]
    pub expires_in: Option<i64>,
}

/// Flattens every group (nested groups included) of every menu into menu
/// items, first occurrence wins. Unpriced items are skipped.
pub fn menu_items_from_toast(menus: Vec<ToastMenu>) -> Vec<MenuItem> {
    fn collect(group: ToastMenuGroup, seen: &mut HashSet<String>, out: &mut Vec<MenuItem>) {
        for item in group.menu_items {
            let Some(price) = item.price else {
                tracing::debug!(guid = %item.guid, "skipping unpriced Toast item");
                continue;
            };
            if seen.insert(item.guid.clone()) {
                out.push(MenuItem::new(item.guid, item.name, price));
            }
        }
        for nested in group.menu_groups {
            collect(nested, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for group in menus.into_iter().flat_map(|menu| menu.menu_groups) {
        collect(group, &mut seen, &mut items);
    }
    items
}

impl From<ToastOrder> for PosOrder {
    fn from(order: ToastOrder) -> Self {
        let business_date = order
            .business_date
            .and_then(|date| NaiveDate::parse_from_str(&date.to_string(), "%Y%m%d").ok());

        let selections = order
            .checks
            .into_iter()
            .flat_map(|check| check.selections)
            .filter_map(|selection| {
                let item = selection.item?;
                Some(PosSelection {
                    display_name: selection.display_name.unwrap_or_else(|| item.guid.clone()),
                    item_id: item.guid,
                    quantity: selection.quantity.unwrap_or(1.0),
                    price: selection.price.unwrap_or(0.0),
                    voided: selection.voided,
                })
            })
            .collect();

        PosOrder {
            guid: order.guid,
            business_date,
            selections,
        }
    }
}

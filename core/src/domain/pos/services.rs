use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, round_to_cents, services::Service},
    menu::{
        entities::{Menu, MenuItem},
        ports::MenuRepository,
        value_objects::MenuSyncSummary,
    },
    pos::{
        entities::{ObservedDemand, ObservedItemDemand, PosOrder},
        ports::{PosClient, PosService},
        value_objects::ObservedDemandInput,
    },
};

impl<M, P> PosService for Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    #[instrument(skip(self))]
    async fn sync_menu_from_pos(&self) -> Result<MenuSyncSummary, CoreError> {
        let pos_items = self.pos_client()?.fetch_menu_items().await?;
        let summary = self
            .replace_menu_with(|current| merge_pos_menu(current, pos_items))
            .await?;

        tracing::info!(
            item_count = summary.item_count,
            added = summary.added.len(),
            removed = summary.removed.len(),
            repriced = summary.repriced.len(),
            "menu synced from POS"
        );

        Ok(summary)
    }

    #[instrument(skip(self, input), fields(start = %input.start_date, end = %input.end_date))]
    async fn observed_demand(&self, input: ObservedDemandInput) -> Result<ObservedDemand, CoreError> {
        input.validate()?;

        let orders = self
            .pos_client()?
            .fetch_orders(input.start_date, input.end_date)
            .await?;

        let engine = self.engine.read().await;
        Ok(aggregate_orders(engine.menu(), &orders, &input))
    }
}

/// Replaces the menu with the POS item list while keeping the demand data we
/// already hold for surviving items.
pub fn merge_pos_menu(
    current: &Menu,
    pos_items: Vec<MenuItem>,
) -> Result<(Menu, MenuSyncSummary), CoreError> {
    let mut seen = HashSet::new();
    let mut added = Vec::new();
    let mut repriced = Vec::new();
    let mut items = Vec::with_capacity(pos_items.len());

    for mut item in pos_items {
        if !seen.insert(item.id.clone()) {
            continue;
        }

        match current.item(&item.id) {
            Some(existing) => {
                if existing.price != item.price {
                    repriced.push(item.id.clone());
                }
                item.baseline_demand = existing.baseline_demand;
                item.own_elasticity = existing.own_elasticity;
            }
            None => added.push(item.id.clone()),
        }
        items.push(item);
    }

    let removed = current
        .items()
        .iter()
        .filter(|item| !seen.contains(&item.id))
        .map(|item| item.id.clone())
        .collect();

    let cross_elasticities = current
        .cross_elasticities()
        .iter()
        .filter(|cross| {
            seen.contains(&cross.target_item_id) && seen.contains(&cross.affecting_item_id)
        })
        .cloned()
        .collect();

    let menu = Menu::new(items, cross_elasticities)?;
    let summary = MenuSyncSummary {
        item_count: menu.len(),
        added,
        removed,
        repriced,
    };

    Ok((menu, summary))
}

/// Sums non-voided order lines per item. Menu items come first in menu order,
/// followed by off-menu items in order of first sale.
pub fn aggregate_orders(
    menu: &Menu,
    orders: &[PosOrder],
    input: &ObservedDemandInput,
) -> ObservedDemand {
    let mut items: Vec<ObservedItemDemand> = menu
        .items()
        .iter()
        .map(|item| ObservedItemDemand {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity: 0.0,
            revenue: 0.0,
            on_menu: true,
        })
        .collect();
    let mut index: HashMap<String, usize> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.item_id.clone(), i))
        .collect();

    for selection in orders
        .iter()
        .flat_map(|order| order.selections.iter())
        .filter(|selection| !selection.voided)
    {
        let position = *index.entry(selection.item_id.clone()).or_insert_with(|| {
            items.push(ObservedItemDemand {
                item_id: selection.item_id.clone(),
                name: selection.display_name.clone(),
                quantity: 0.0,
                revenue: 0.0,
                on_menu: false,
            });
            items.len() - 1
        });

        let entry = &mut items[position];
        entry.quantity += selection.quantity;
        entry.revenue += selection.price;
    }

    for item in &mut items {
        item.revenue = round_to_cents(item.revenue);
    }

    ObservedDemand {
        start_date: input.start_date,
        end_date: input.end_date,
        order_count: orders.len(),
        total_quantity: items.iter().map(|item| item.quantity).sum(),
        total_revenue: round_to_cents(items.iter().map(|item| item.revenue).sum()),
        items,
    }
}

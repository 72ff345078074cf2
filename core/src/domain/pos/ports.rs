use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::MenuItem, value_objects::MenuSyncSummary},
    pos::{
        entities::{ObservedDemand, PosOrder},
        value_objects::ObservedDemandInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PosClient: Send + Sync {
    /// Every priced item across all menus, without demand data.
    fn fetch_menu_items(&self) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn fetch_orders(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<PosOrder>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PosService: Send + Sync {
    fn sync_menu_from_pos(&self)
    -> impl Future<Output = Result<MenuSyncSummary, CoreError>> + Send;

    fn observed_demand(
        &self,
        input: ObservedDemandInput,
    ) -> impl Future<Output = Result<ObservedDemand, CoreError>> + Send;
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Menu, MenuItem},
        value_objects::MenuDocument,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn load_menu(&self) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn replace_menu(&self, menu: Menu) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn get_menu(&self) -> impl Future<Output = Result<MenuDocument, CoreError>> + Send;

    fn get_menu_item(
        &self,
        item_id: String,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;
}

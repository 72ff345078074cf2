use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::entities::{CrossElasticity, Menu, MenuItem},
};

/// On-disk and over-the-wire shape of a full menu definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDocument {
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub cross_elasticities: Vec<CrossElasticity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MenuSyncSummary {
    pub item_count: usize,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub repriced: Vec<String>,
}

impl From<&Menu> for MenuDocument {
    fn from(menu: &Menu) -> Self {
        Self {
            items: menu.items().to_vec(),
            cross_elasticities: menu.cross_elasticities().to_vec(),
        }
    }
}

impl TryFrom<MenuDocument> for Menu {
    type Error = CoreError;

    fn try_from(document: MenuDocument) -> Result<Self, Self::Error> {
        Menu::new(document.items, document.cross_elasticities)
    }
}

use std::path::Path;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::Menu, value_objects::MenuDocument},
};

/// Reads a JSON menu definition (`{"items": [...], "cross_elasticities": [...]}`).
pub async fn load_menu_file(path: &Path) -> Result<Menu, CoreError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read menu file");
        CoreError::InvalidMenu(format!("cannot read {}: {e}", path.display()))
    })?;

    let menu = parse_menu_document(&raw)?;
    tracing::info!(path = %path.display(), items = menu.len(), "menu loaded from file");
    Ok(menu)
}

pub fn parse_menu_document(raw: &str) -> Result<Menu, CoreError> {
    let document: MenuDocument = serde_json::from_str(raw)
        .map_err(|e| CoreError::InvalidMenu(format!("malformed menu document: {e}")))?;
    Menu::try_from(document)
}

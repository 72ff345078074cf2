use axum::extract::{Path, State};
use plately_core::domain::menu::{entities::MenuItem, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuItemResponse {
    pub data: MenuItem,
}

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "menu",
    summary = "Get menu item",
    params(
        ("item_id" = String, Path, description = "Menu item ID"),
    ),
    responses(
        (status = 200, body = GetMenuItemResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_menu_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetMenuItemResponse>, ApiError> {
    let item = state
        .service
        .get_menu_item(item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuItemResponse { data: item }))
}

use axum::extract::State;
use plately_core::domain::menu::{ports::MenuService, value_objects::MenuDocument};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub data: MenuDocument,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "Get menu",
    description = "Lists the master menu in display order, with baseline demand and elasticities.",
    responses(
        (status = 200, body = GetMenuResponse)
    )
)]
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let menu = state.service.get_menu().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuResponse { data: menu }))
}

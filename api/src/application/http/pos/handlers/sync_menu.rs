use axum::extract::State;
use plately_core::domain::{menu::value_objects::MenuSyncSummary, pos::ports::PosService};
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
pub struct SyncMenuResponse {
    pub data: MenuSyncSummary,
}

#[utoipa::path(
    post,
    path = "/menu-sync",
    tag = "pos",
    summary = "Sync menu from POS",
    description = "Replaces the master menu with the POS menu, keeping known demand data, and rebuilds the simulation engine.",
    responses(
        (status = 200, body = SyncMenuResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn sync_menu(
    State(state): State<AppState>,
) -> Result<Response<SyncMenuResponse>, ApiError> {
    let summary = state
        .service
        .sync_menu_from_pos()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SyncMenuResponse { data: summary }))
}

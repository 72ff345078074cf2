use axum::extract::State;
use plately_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Liveness probe with a summary of the loaded menu and demand model.",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthStatus>, ApiError> {
    let status = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}

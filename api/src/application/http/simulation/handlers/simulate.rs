use axum::extract::State;
use plately_core::domain::simulation::{
    ports::SimulationService,
    value_objects::{PriceComparison, SimulatePriceChangeInput},
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    simulation::validators::SimulatePriceChangeValidator,
};

#[utoipa::path(
    post,
    path = "/simulate",
    tag = "simulation",
    summary = "Simulate a price change",
    description = "Reprices one menu item and compares demand and revenue against the baseline.",
    request_body = SimulatePriceChangeValidator,
    responses(
        (status = 200, body = PriceComparison),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse)
    )
)]
pub async fn simulate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SimulatePriceChangeValidator>,
) -> Result<Response<PriceComparison>, ApiError> {
    let comparison = state
        .service
        .simulate_price_change(SimulatePriceChangeInput {
            item_id: payload.item_id,
            new_price: payload.new_price,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(comparison))
}

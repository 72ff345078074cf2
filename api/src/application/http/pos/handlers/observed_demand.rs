use axum::extract::{Query, State, rejection::QueryRejection};
use plately_core::domain::pos::{
    entities::ObservedDemand, ports::PosService, value_objects::ObservedDemandInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    pos::validators::ObservedDemandQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ObservedDemandResponse {
    pub data: ObservedDemand,
}

#[utoipa::path(
    get,
    path = "/observed-demand",
    tag = "pos",
    summary = "Observed demand",
    description = "Aggregates POS orders in the date range into quantity and revenue per item.",
    params(ObservedDemandQuery),
    responses(
        (status = 200, body = ObservedDemandResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn observed_demand(
    State(state): State<AppState>,
    query: Result<Query<ObservedDemandQuery>, QueryRejection>,
) -> Result<Response<ObservedDemandResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let observed = state
        .service
        .observed_demand(ObservedDemandInput {
            start_date: query.start_date,
            end_date: query.end_date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ObservedDemandResponse { data: observed }))
}

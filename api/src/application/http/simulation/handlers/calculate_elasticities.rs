use axum::extract::State;
use plately_core::domain::{
    elasticity::value_objects::{PedResult, XedResult},
    simulation::{
        ports::SimulationService,
        value_objects::{CalculatePedInput, CalculateXedInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    simulation::validators::{
        CalculateElasticitiesValidator, ElasticityType, parse_ped_price_changes,
        parse_xed_price_change, required_id,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "type")]
pub enum CalculateElasticitiesResponse {
    #[serde(rename = "PED")]
    Ped {
        item_name: String,
        item_id: String,
        data: Vec<PedResult>,
    },
    #[serde(rename = "XED")]
    Xed { data: XedResult },
}

#[utoipa::path(
    post,
    path = "/calculate-elasticities",
    tag = "simulation",
    summary = "Calculate PED or XED",
    description = "Runs a set of price scenarios and derives own-price (PED) or cross-price (XED) arc elasticities.",
    request_body = CalculateElasticitiesValidator,
    responses(
        (status = 200, body = CalculateElasticitiesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn calculate_elasticities(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalculateElasticitiesValidator>,
) -> Result<Response<CalculateElasticitiesResponse>, ApiError> {
    let response = match payload.elasticity_type.parse::<ElasticityType>()? {
        ElasticityType::Ped => {
            let item_id = required_id(payload.item_id_vary, "item_id_vary")?;
            let percentage_changes =
                parse_ped_price_changes(payload.ped_price_changes.as_deref())?;

            let report = state
                .service
                .calculate_ped(CalculatePedInput {
                    item_id,
                    percentage_changes,
                })
                .await
                .map_err(ApiError::from)?;

            CalculateElasticitiesResponse::Ped {
                item_name: report.item_name,
                item_id: report.item_id,
                data: report.data,
            }
        }
        ElasticityType::Xed => {
            let target_item_id = required_id(payload.target_item_id, "target_item_id")?;
            let affecting_item_id = required_id(payload.affecting_item_id, "affecting_item_id")?;
            let percentage_change = parse_xed_price_change(payload.xed_price_change.as_deref())?;

            let result = state
                .service
                .calculate_xed(CalculateXedInput {
                    target_item_id,
                    affecting_item_id,
                    percentage_change,
                })
                .await
                .map_err(ApiError::from)?;

            CalculateElasticitiesResponse::Xed { data: result }
        }
    };

    Ok(Response::OK(response))
}

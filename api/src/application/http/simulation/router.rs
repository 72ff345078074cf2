use super::handlers::{
    calculate_elasticities::{__path_calculate_elasticities, calculate_elasticities},
    simulate::{__path_simulate, simulate},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(simulate, calculate_elasticities))]
pub struct SimulationApiDoc;

pub fn simulation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/simulate", state.args.server.root_path),
            post(simulate),
        )
        .route(
            &format!("{}/calculate-elasticities", state.args.server.root_path),
            post(calculate_elasticities),
        )
}

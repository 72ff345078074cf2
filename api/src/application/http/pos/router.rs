use super::handlers::{
    observed_demand::{__path_observed_demand, observed_demand},
    sync_menu::{__path_sync_menu, sync_menu},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(sync_menu, observed_demand))]
pub struct PosApiDoc;

pub fn pos_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pos/menu-sync", state.args.server.root_path),
            post(sync_menu),
        )
        .route(
            &format!("{}/pos/observed-demand", state.args.server.root_path),
            get(observed_demand),
        )
}

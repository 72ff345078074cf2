use super::handlers::{
    get_menu::{__path_get_menu, get_menu},
    get_menu_item::{__path_get_menu_item, get_menu_item},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_menu, get_menu_item))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu", state.args.server.root_path),
            get(get_menu),
        )
        .route(
            &format!("{}/menu/{{item_id}}", state.args.server.root_path),
            get(get_menu_item),
        )
}

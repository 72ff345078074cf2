use crate::application::http::{
    health::router::HealthApiDoc, menu::router::MenuApiDoc, pos::router::PosApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plately API",
        description = "Menu price simulation and elasticity analysis"
    ),
    nest(
        (path = "/menu", api = MenuApiDoc),
        (path = "/pos", api = PosApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::{
    PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle,
};
use plately_core::{application::create_service, domain::common::PlatelyConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    health::router::health_routes, menu::router::menu_routes, pos::router::pos_routes,
    server::{app_state::AppState, openapi::ApiDoc},
    simulation::router::{SimulationApiDoc, simulation_routes},
};
use crate::args::Args;

static METRIC_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// The Prometheus recorder is process-global and can only be installed once.
fn metric_handle() -> PrometheusHandle {
    METRIC_HANDLE
        .get_or_init(|| PrometheusMetricLayer::pair().1)
        .clone()
}

/// Simulation routes sit at the API root, so their doc is merged rather than nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(SimulationApiDoc::openapi());
    openapi
}

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let plately_config = PlatelyConfig::from(args.as_ref().clone());
    let service = create_service(plately_config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let prometheus_layer = PrometheusMetricLayer::new();
    let metric_handle = metric_handle();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(menu_routes(state.clone()))
        .merge(simulation_routes(state.clone()))
        .merge(pos_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

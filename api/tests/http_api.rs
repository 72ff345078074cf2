use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use plately_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

async fn server() -> TestServer {
    let args = Args::parse_from(["plately-api", "--simulation-seed", "42"]);
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

#[tokio::test]
async fn test_get_menu_lists_sample_items() {
    let server = server().await;

    let response = server.get("/api/v1/menu").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], "burger_classic");
    assert_eq!(items[4]["price"], 2.5);
}

#[tokio::test]
async fn test_get_unknown_menu_item() {
    let response = server().await.get("/api/v1/menu/sushi").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_NOT_FOUND");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_simulate_price_change() {
    let response = server()
        .await
        .post("/api/v1/simulate")
        .json(&json!({"item_id": "burger_classic", "new_price": 15.0}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Simulation complete for Classic Burger at $15.00");
    assert_eq!(body["original_price"], 12.0);
    assert_eq!(body["comparison_table"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["cross_price_elasticities_with_changed_item"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
    assert!(body["run_id"].is_string());
}

#[tokio::test]
async fn test_simulate_rejects_negative_price() {
    let response = server()
        .await
        .post("/api/v1/simulate")
        .json(&json!({"item_id": "burger_classic", "new_price": -5.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_simulate_unknown_item() {
    let response = server()
        .await
        .post("/api/v1/simulate")
        .json(&json!({"item_id": "sushi", "new_price": 5.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_calculate_ped() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({"type": "ped", "item_id_vary": "pizza_pepperoni"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["type"], "PED");
    assert_eq!(body["item_name"], "Pepperoni Pizza");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["percentage_change_price"], -0.2);
    assert_eq!(data[0]["new_price"], 12.0);
    assert!(data[0]["ped_value"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn test_calculate_ped_rejects_bad_changes() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({
            "type": "PED",
            "item_id_vary": "pizza_pepperoni",
            "ped_price_changes": "0.1,abc"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid format for PED price changes")
    );
}

#[tokio::test]
async fn test_calculate_ped_requires_item() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({"type": "PED"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calculate_xed() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({
            "type": "XED",
            "target_item_id": "pizza_pepperoni",
            "affecting_item_id": "burger_classic",
            "xed_price_change": "0.1"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["type"], "XED");
    assert_eq!(body["data"]["relationship"], "substitutes");
    assert_eq!(body["data"]["p_affecting_scenario"], 13.2);
}

#[tokio::test]
async fn test_calculate_xed_same_item() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({
            "type": "XED",
            "target_item_id": "coke_soda",
            "affecting_item_id": "coke_soda"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("cannot be the same"));
}

#[tokio::test]
async fn test_calculate_unknown_type() {
    let response = server()
        .await
        .post("/api/v1/calculate-elasticities")
        .json(&json!({"type": "GED"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calculate_missing_or_empty_type() {
    let server = server().await;

    for payload in [
        json!({}),
        json!({"type": ""}),
        json!({"item_id_vary": "coke_soda"}),
    ] {
        let response = server
            .post("/api/v1/calculate-elasticities")
            .json(&payload)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid elasticity type")
        );
    }
}

#[tokio::test]
async fn test_pos_routes_without_credentials() {
    let server = server().await;

    let sync = server.post("/api/v1/pos/menu-sync").await;
    assert_eq!(sync.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let missing_dates = server.get("/api/v1/pos/observed-demand").await;
    assert_eq!(missing_dates.status_code(), StatusCode::BAD_REQUEST);

    let observed = server
        .get("/api/v1/pos/observed-demand?start_date=2024-05-01&end_date=2024-05-02")
        .await;
    assert_eq!(observed.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_and_docs() {
    let server = server().await;

    let health = server.get("/api/v1/health").await;
    health.assert_status_ok();
    let body: Value = health.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["menu_items"], 5);
    assert_eq!(body["demand_model"], "constant_elasticity_log_linear");

    let docs = server.get("/api/v1/api-docs/openapi.json").await;
    docs.assert_status_ok();
    let docs: Value = docs.json();
    assert!(docs["paths"]["/api/v1/simulate"].is_object());
    assert!(docs["paths"]["/api/v1/calculate-elasticities"].is_object());
    assert!(docs["paths"]["/api/v1/menu"].is_object());
    server.get("/api/v1/metrics").await.assert_status_ok();
}

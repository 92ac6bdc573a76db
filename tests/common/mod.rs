#![allow(dead_code)]

use std::net::SocketAddr;

use axum::extract::Request;
use axum::routing::get;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use serde_json::{Value, json};
use receipt_processor::api::handlers::health_handler;
use receipt_processor::api::routes::receipt_routes;
use receipt_processor::config::Config;
use receipt_processor::routes::app_router;
use receipt_processor::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Receipt and health routes without rate limiting, which needs a real peer address.
pub fn create_test_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(receipt_routes())
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}

/// Full production router served over a real socket so peer addresses reach the rate limiter.
pub fn create_app_server(config: &Config) -> TestServer {
    let app = app_router(create_test_state(), config).unwrap();

    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}

pub fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

pub fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

/// Submits a receipt and returns its identifier.
pub async fn process(server: &TestServer, receipt: &Value) -> String {
    let response = server.post("/receipts/process").json(receipt).await;
    response.assert_status_ok();

    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

/// Fetches the points for a receipt identifier.
pub async fn points(server: &TestServer, id: &str) -> u64 {
    let response = server.get(&format!("/receipts/{id}/points")).await;
    response.assert_status_ok();

    response.json::<Value>()["points"].as_u64().unwrap()
}

#![allow(dead_code)]

//! Test infrastructure for ud-server API tests

use ud_config::CorsConfig;
use ud_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:4200";

/// Create AppState over a migrated in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = ud_db::create_memory_pool()
        .await
        .expect("Failed to create test database");

    let cors = CorsConfig {
        allowed_origin: TEST_ORIGIN.to_string(),
    };

    AppState::new(pool, &cors).expect("Failed to build app state")
}

/// Drive one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn ana() -> serde_json::Value {
    serde_json::json!({
        "given_names": "Ana",
        "surnames": "Lopez",
        "phone": "3001234567",
        "email": "ana@x.com",
    })
}

/// Create a user through the API and return its id
pub async fn create_user(state: &AppState, body: serde_json::Value) -> i64 {
    let (status, json) = send(state, json_request("POST", "/api/v1/users", body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["id"].as_i64().unwrap()
}

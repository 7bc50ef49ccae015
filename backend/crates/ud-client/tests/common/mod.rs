#![allow(dead_code)]

//! Shared fixtures for ud-client integration tests

use ud_client::views::ViewSettings;
use ud_client::{Client, UserService};
use ud_core::{UserRecord, UserStatus};

use std::time::Duration;

use chrono::DateTime;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// 2024-01-01T00:00:00Z
pub const FIXED_TIMESTAMP: i64 = 1_704_067_200;

/// A user as the server serializes it
pub fn user_json(id: i64, given_names: &str, surnames: &str, email: &str) -> Value {
    json!({
        "id": id,
        "given_names": given_names,
        "surnames": surnames,
        "email": email,
        "phone": "3001234567",
        "created_at": FIXED_TIMESTAMP,
        "modified_at": FIXED_TIMESTAMP,
        "status": "active"
    })
}

pub fn record(id: i64, given_names: &str, surnames: &str, email: &str) -> UserRecord {
    let at = DateTime::from_timestamp(FIXED_TIMESTAMP, 0).unwrap();
    UserRecord {
        id,
        given_names: given_names.to_string(),
        surnames: surnames.to_string(),
        email: email.to_string(),
        phone: "3001234567".to_string(),
        created_at: at,
        modified_at: at,
        status: UserStatus::Active,
    }
}

pub fn test_client(server: &MockServer) -> Client {
    Client::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

pub fn test_service(server: &MockServer) -> UserService {
    UserService::new(test_client(server))
}

/// Service whose server is never contacted
pub fn offline_service() -> UserService {
    UserService::new(Client::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap())
}

/// Short timings so real-time tests stay fast
pub fn fast_settings() -> ViewSettings {
    ViewSettings {
        page_size: 2,
        search_debounce: Duration::from_millis(50),
        navigation_delay: Duration::from_millis(100),
        alert_dismiss: Duration::from_secs(5),
    }
}

/// GET /api/v1/users answers `users` for every call
pub async fn mount_list(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(server)
        .await;
}

/// GET /api/v1/users answers `first` once, then `then` forever
pub async fn mount_list_sequence(server: &MockServer, first: Value, then: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(server)
        .await;

    mount_list(server, then).await;
}

pub fn sample_users() -> Vec<UserRecord> {
    vec![
        record(1, "Ana", "Lopez", "ana@x.com"),
        record(2, "Beto", "Diaz", "beto@x.com"),
        record(3, "Carlos", "Perez", "carlos@x.com"),
        record(4, "Diana", "Ruiz", "diana@x.com"),
        record(5, "Elena", "Gomez", "elena@x.com"),
    ]
}

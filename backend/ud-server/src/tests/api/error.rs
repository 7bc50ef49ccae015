use crate::ApiError;

use ud_core::{CoreError, UserField, ValidationErrorKind};
use ud_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let error = ApiError::NotFound {
        message: "User 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User 7 not found");
    assert_eq!(json["code"], "not_found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(CoreError::validation(
        ValidationErrorKind::InvalidPhoneFormat,
        UserField::Phone,
        "phone must contain only digits (7-15 digits)",
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_phone_format");
    assert_eq!(json["field"], "phone");
}

#[tokio::test]
async fn test_bad_request_returns_400_invalid_request() {
    let (status, json) = body_json(ApiError::bad_request("Invalid JSON body")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_request");
}

#[tokio::test]
async fn test_db_conflict_hides_engine_message() {
    let error = ApiError::from(DbError::Conflict {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "conflict");
    assert!(!json["error"].as_str().unwrap().contains("UNIQUE"));
}

#[tokio::test]
async fn test_db_not_found_maps_to_404_with_id() {
    let (status, json) = body_json(ApiError::from(DbError::not_found(9))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains('9'));
}

#[tokio::test]
async fn test_db_decode_error_maps_to_generic_500() {
    let error = ApiError::from(DbError::decode("users", "status 'archived'"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "internal_error");
    assert_eq!(json["error"], "Database operation failed");
}

#[test]
fn test_invalid_status_core_error_is_internal() {
    let error = ApiError::from(
        "archived"
            .parse::<ud_core::UserStatus>()
            .unwrap_err(),
    );

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

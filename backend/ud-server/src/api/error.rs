//! REST API error types
//!
//! Every failure leaves the server as a flat JSON body
//! `{"error": "<message>", "code": "<code>", "field": "<field>"?}`
//! with the matching HTTP status.

use ud_core::CoreError;
use ud_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const CODE_INVALID_REQUEST: &str = "invalid_request";
pub const CODE_NOT_FOUND: &str = "not_found";
pub const CODE_CONFLICT: &str = "conflict";
pub const CODE_INTERNAL_ERROR: &str = "internal_error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g. "missing_field", "conflict")
    pub code: String,
    /// Offending field for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A field rule failed (400)
    #[error("Validation failed ({code}): {message} {location}")]
    Validation {
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unparseable body or query (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// No active user with that id (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Email already held by another active user (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::Validation {
                code,
                message,
                field,
                ..
            } => ApiErrorResponse {
                error: message,
                code,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorResponse {
                error: message,
                code: CODE_INVALID_REQUEST.into(),
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorResponse {
                error: message,
                code: CODE_NOT_FOUND.into(),
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorResponse {
                error: message,
                code: CODE_CONFLICT.into(),
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorResponse {
                error: message,
                code: CODE_INTERNAL_ERROR.into(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match (e.validation_kind(), e.field()) {
            (Some(kind), field) => ApiError::Validation {
                code: kind.as_str().to_string(),
                message: e.message(),
                field: field.map(|f| f.as_str().to_string()),
                location,
            },
            (None, _) => {
                log::error!("Unexpected core error: {}", e);
                ApiError::Internal {
                    message: "Internal error".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location,
            },
            DbError::Conflict { message, .. } => {
                // Engine wording stays in the log
                log::warn!("Unique constraint violated: {}", message);
                ApiError::Conflict {
                    message: "Email is already registered to another active user".to_string(),
                    location,
                }
            }
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use thiserror::Error;

/// Failure body the server sends with every non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Bad request: {message} (code: {code}) {location}")]
    BadRequest {
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// No response at all: timeout or connection failure
    #[error("Server unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_timeout() || err.is_connect() {
            ClientError::Unreachable {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            ClientError::Http {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Classify a non-2xx response. `body` is `None` when the payload was
    /// not the usual error shape.
    #[track_caller]
    pub fn from_status(status: u16, body: Option<ApiErrorBody>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let body = body.unwrap_or_default();

        match status {
            404 => ClientError::NotFound {
                message: body.error,
                location,
            },
            409 => ClientError::Conflict {
                message: body.error,
                location,
            },
            400..=499 => ClientError::BadRequest {
                code: body.code.unwrap_or_else(|| "unknown".to_string()),
                message: body.error,
                field: body.field,
                location,
            },
            _ => ClientError::Server {
                status,
                message: body.error,
                location,
            },
        }
    }

    #[track_caller]
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        ClientError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit for an alert or the terminal
    pub fn user_message(&self) -> String {
        match self {
            ClientError::BadRequest { message, .. } if !message.is_empty() => {
                format!("Bad request: {message}")
            }
            ClientError::BadRequest { .. } => {
                "Bad request. Check the submitted data.".to_string()
            }
            ClientError::NotFound { .. } => "Resource not found.".to_string(),
            ClientError::Conflict { .. } => "That email is already registered.".to_string(),
            ClientError::Server { .. } => "Server error. Try again later.".to_string(),
            ClientError::Unreachable { .. } => {
                "Could not reach the server. Check your connection.".to_string()
            }
            ClientError::Http { message, .. }
            | ClientError::Json { message, .. }
            | ClientError::UnexpectedResponse { message, .. } => {
                format!("Unexpected error: {message}")
            }
        }
    }

    /// Field the server blamed, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            ClientError::BadRequest { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

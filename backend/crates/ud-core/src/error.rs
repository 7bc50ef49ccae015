use crate::{ErrorLocation, UserField, ValidationErrorKind};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error ({kind}): {message} {location}")]
    Validation {
        kind: ValidationErrorKind,
        field: UserField,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn validation<S: Into<String>>(
        kind: ValidationErrorKind,
        field: UserField,
        message: S,
    ) -> Self {
        CoreError::Validation {
            kind,
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Validation kind, if this is a validation failure
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self {
            CoreError::Validation { kind, .. } => Some(*kind),
            CoreError::InvalidUserStatus { .. } => None,
        }
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<UserField> {
        match self {
            CoreError::Validation { field, .. } => Some(*field),
            CoreError::InvalidUserStatus { .. } => None,
        }
    }

    /// Human-readable message without the source location
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidUserStatus { value, .. } => format!("Invalid user status: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

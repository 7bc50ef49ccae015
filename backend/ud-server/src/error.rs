use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures; request-time failures are `ApiError`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ud_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ud_db::DbError),

    #[error("Invalid CORS origin '{origin}': {message} {location}")]
    InvalidOrigin {
        origin: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;

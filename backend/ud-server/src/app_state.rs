use crate::error::{Result as ServerErrorResult, ServerError};

use ud_config::CorsConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderValue;
use sqlx::SqlitePool;

/// Shared by every handler. Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// The one browser origin the CORS layer lets through
    pub allowed_origin: HeaderValue,
}

impl AppState {
    #[track_caller]
    pub fn new(pool: SqlitePool, cors: &CorsConfig) -> ServerErrorResult<Self> {
        let allowed_origin =
            HeaderValue::from_str(&cors.allowed_origin).map_err(|e| ServerError::InvalidOrigin {
                origin: cors.allowed_origin.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            pool,
            allowed_origin,
        })
    }
}

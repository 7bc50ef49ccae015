use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGIN};

use http::Uri;
use serde::Deserialize;

/// The single browser origin allowed to call the API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: String::from(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

impl CorsConfig {
    /// An origin is `scheme://host[:port]` with nothing after it
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let origin = self.allowed_origin.as_str();
        let uri = origin.parse::<Uri>().map_err(|e| {
            ConfigError::cors(format!("cors.allowed_origin '{}' is invalid: {}", origin, e))
        })?;

        let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
        let bare = matches!(uri.path(), "" | "/") && uri.query().is_none() && !origin.ends_with('/');

        if !scheme_ok || uri.host().is_none() || !bare {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origin must look like http://host:port, got '{}'",
                origin
            )));
        }

        Ok(())
    }
}

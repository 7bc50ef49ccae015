use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ALERT_DISMISS_MS, DEFAULT_API_BASE_URL,
    DEFAULT_NAVIGATION_DELAY_MS, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SEARCH_DEBOUNCE_MS, MAX_PAGE_SIZE,
};

use std::time::Duration;

use http::Uri;
use serde::Deserialize;

/// Settings for the API client and its views
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    /// Pause on a success screen before returning to the list
    pub navigation_delay_ms: u64,
    pub alert_dismiss_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            navigation_delay_ms: DEFAULT_NAVIGATION_DELAY_MS,
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let uri = self.api_base_url.parse::<Uri>().map_err(|e| {
            ConfigError::client(format!(
                "client.api_base_url '{}' is invalid: {}",
                self.api_base_url, e
            ))
        })?;

        if !matches!(uri.scheme_str(), Some("http") | Some("https")) || uri.host().is_none() {
            return Err(ConfigError::client(format!(
                "client.api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::client(
                "client.request_timeout_secs must be positive",
            ));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::client(format!(
                "client.page_size must be 1-{}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.search_debounce_ms == 0
            || self.navigation_delay_ms == 0
            || self.alert_dismiss_ms == 0
        {
            return Err(ConfigError::client("client timings must be positive"));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }
}

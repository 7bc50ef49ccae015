use ud_config::ClientConfig;

use std::time::Duration;

/// Timings and sizes the views run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: usize,
    pub search_debounce: Duration,
    pub navigation_delay: Duration,
    pub alert_dismiss: Duration,
}

impl From<&ClientConfig> for ViewSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            page_size: config.page_size,
            search_debounce: config.search_debounce(),
            navigation_delay: config.navigation_delay(),
            alert_dismiss: config.alert_dismiss(),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

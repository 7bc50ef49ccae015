use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

/// Listening address of the HTTP API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`, with IPv6 literals bracketed
    pub fn bind_addr(&self) -> String {
        let host = self.host.trim();
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self.host.trim();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::server(format!(
                "server.host must be a single host name or address, got '{}'",
                self.host
            )));
        }

        // 0 asks the OS for a free port
        if (1..MIN_PORT).contains(&self.port) {
            return Err(ConfigError::server(format!(
                "server.port must be 0 or at least {MIN_PORT}, got {}",
                self.port
            )));
        }

        Ok(())
    }
}

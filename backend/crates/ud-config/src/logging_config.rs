use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use std::path::{Component, Path};

use serde::Deserialize;

/// Server log output. Stdout unless `file` is set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Written to `<config dir>/<dir>/<file>`
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    /// `dir` and `file` must stay inside the config directory
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_contained(&self.dir) {
            return Err(ConfigError::logging(format!(
                "logging.dir must be a relative path without '..', got '{}'",
                self.dir
            )));
        }

        if let Some(file) = &self.file
            && (file.trim().is_empty() || !is_contained(file))
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative file name",
            ));
        }

        Ok(())
    }
}

fn is_contained(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fs::{File, OpenOptions};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global logger.
///
/// Lines go to `log_file` when one is configured, otherwise to stdout.
/// Colors only apply to stdout.
#[track_caller]
pub fn initialize(
    log_level: ud_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let colors = colored.then(level_colors);

    let sink = Dispatch::new().format(move |out, message, record| {
        let level = match &colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            level,
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    });

    let sink = match &log_file {
        Some(path) => sink.chain(open_log_file(path)?),
        None => sink.chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info; hyper is chatty at debug
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Info)
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    match log_file {
        Some(path) => info!("Logging at {level_filter} to {}", path.display()),
        None => info!("Logging at {level_filter} to stdout"),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Append mode, creating parent directories as needed
#[track_caller]
fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    let caller = Location::caller();

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {e}", dir.display()),
            location: ErrorLocation::from(caller),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
            location: ErrorLocation::from(caller),
        })
}

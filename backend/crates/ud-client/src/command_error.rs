use ud_client::ClientError;
use ud_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Everything a `ud` command can fail with
#[derive(Error, Debug)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Failed to write {}: {source} {location}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    #[track_caller]
    pub(crate) fn io(path: PathBuf, source: std::io::Error) -> Self {
        CommandError::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub(crate) fn user_message(&self) -> String {
        match self {
            CommandError::Client(e) => e.user_message(),
            CommandError::Validation(e) => match e.field() {
                Some(field) => format!("Invalid {field}: {}", e.message()),
                None => e.message(),
            },
            CommandError::Io { path, source, .. } => {
                format!("Failed to write {}: {source}", path.display())
            }
            CommandError::Json(e) => format!("Failed to encode output: {e}"),
        }
    }
}

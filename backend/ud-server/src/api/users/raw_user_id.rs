use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// An `id` as it arrives on the wire: a JSON number, or text from a query
/// string or a loosely typed client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawUserId {
    Number(i64),
    Text(String),
}

impl RawUserId {
    /// Empty or whitespace-only text, treated the same as an absent id
    pub fn is_blank(&self) -> bool {
        matches!(self, RawUserId::Text(text) if text.trim().is_empty())
    }

    /// Positive integer ids only
    #[track_caller]
    pub fn parse(&self) -> ApiResult<i64> {
        let id = match self {
            RawUserId::Number(id) => Some(*id),
            RawUserId::Text(text) => text.trim().parse::<i64>().ok(),
        };

        match id {
            Some(id) if id > 0 => Ok(id),
            _ => Err(ApiError::bad_request(format!(
                "id must be a positive integer, got {}",
                self
            ))),
        }
    }
}

impl std::fmt::Display for RawUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawUserId::Number(id) => write!(f, "{}", id),
            RawUserId::Text(text) => write!(f, "'{}'", text),
        }
    }
}

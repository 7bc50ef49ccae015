use ud_core::{UserFields, UserRecord, UserStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as the server sends it; timestamps are unix seconds
#[derive(Debug, Deserialize)]
pub(crate) struct ApiUser {
    pub id: i64,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub modified_at: DateTime<Utc>,
    pub status: UserStatus,
}

impl From<ApiUser> for UserRecord {
    fn from(u: ApiUser) -> Self {
        Self {
            id: u.id,
            given_names: u.given_names,
            surnames: u.surnames,
            email: u.email,
            phone: u.phone,
            created_at: u.created_at,
            modified_at: u.modified_at,
            status: u.status,
        }
    }
}

/// `{"success": "...", "id": N?}`
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessBody {
    pub success: String,
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Serialize)]
pub(crate) struct UpdateRequest<'a> {
    pub id: i64,
    #[serde(flatten)]
    pub fields: &'a UserFields,
}

#[derive(Serialize)]
pub(crate) struct DeleteRequest {
    pub id: i64,
}

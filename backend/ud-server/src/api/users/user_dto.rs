use ud_core::UserRecord;

use serde::{Deserialize, Serialize};

/// User DTO for JSON serialization. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    pub created_at: i64,
    pub modified_at: i64,
    pub status: String,
}

impl From<UserRecord> for UserDto {
    fn from(u: UserRecord) -> Self {
        Self {
            id: u.id,
            given_names: u.given_names,
            surnames: u.surnames,
            email: u.email,
            phone: u.phone,
            created_at: u.created_at.timestamp(),
            modified_at: u.modified_at.timestamp(),
            status: u.status.as_str().to_string(),
        }
    }
}

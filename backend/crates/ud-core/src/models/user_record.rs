//! User record - the single entity of the directory.

use crate::{UserFields, UserStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user row.
/// `status` only ever moves from `Active` to `Inactive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    /// Never earlier than `created_at`
    pub modified_at: DateTime<Utc>,
    pub status: UserStatus,
}

impl UserRecord {
    /// Check if the record is still visible (not soft-deleted)
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Copy out the editable fields
    pub fn fields(&self) -> UserFields {
        UserFields {
            given_names: self.given_names.clone(),
            surnames: self.surnames.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
    }
}

use crate::{DbError, Result as DbErrorResult};

use ud_core::{UserRecord, UserStatus};

use chrono::{DateTime, Utc};

const TABLE: &str = "users";

/// Raw `users` row as SQLite hands it back
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    pub created_at: i64,
    pub modified_at: i64,
    pub status: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        let status = row
            .status
            .parse::<UserStatus>()
            .map_err(|e| DbError::decode(TABLE, e.message()))?;

        Ok(UserRecord {
            id: row.id,
            given_names: row.given_names,
            surnames: row.surnames,
            email: row.email,
            phone: row.phone,
            created_at: timestamp(row.created_at)?,
            modified_at: timestamp(row.modified_at)?,
            status,
        })
    }
}

fn timestamp(seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbError::decode(TABLE, format!("timestamp out of range: {seconds}")))
}

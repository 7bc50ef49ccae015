use crate::repositories::user_row::UserRow;
use crate::{DbError, Result as DbErrorResult};

use ud_core::{UserFields, UserRecord};

use chrono::Utc;
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str =
    "id, given_names, surnames, email, phone, created_at, modified_at, status";

/// Every statement is a single parameterized query; SQLite gives row-level
/// atomicity and the partial unique index arbitrates email races.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All active users, by given names then id
    pub async fn list_active(&self) -> DbErrorResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              SELECT {SELECT_COLUMNS}
              FROM users
              WHERE status = 'active'
              ORDER BY given_names ASC, id ASC
              "#
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    pub async fn get_active(&self, id: i64) -> DbErrorResult<UserRecord> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              SELECT {SELECT_COLUMNS}
              FROM users
              WHERE id = ? AND status = 'active'
              "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => UserRecord::try_from(row),
            None => Err(DbError::not_found(id)),
        }
    }

    /// Insert an active user with equal timestamps. An active row holding the
    /// same email yields `DbError::Conflict`.
    pub async fn create(&self, fields: &UserFields) -> DbErrorResult<UserRecord> {
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              INSERT INTO users (
                  given_names, surnames, email, phone,
                  created_at, modified_at, status
              ) VALUES (?, ?, ?, ?, ?, ?, 'active')
              RETURNING {SELECT_COLUMNS}
              "#
        ))
        .bind(&fields.given_names)
        .bind(&fields.surnames)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        UserRecord::try_from(row)
    }

    /// Overwrite the four editable fields of an active user.
    ///
    /// `modified_at` is clamped so it never precedes `created_at`, even if the
    /// wall clock stepped backwards.
    pub async fn update(&self, id: i64, fields: &UserFields) -> DbErrorResult<UserRecord> {
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              UPDATE users
              SET given_names = ?, surnames = ?, email = ?, phone = ?,
                  modified_at = MAX(created_at, ?)
              WHERE id = ? AND status = 'active'
              RETURNING {SELECT_COLUMNS}
              "#
        ))
        .bind(&fields.given_names)
        .bind(&fields.surnames)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => UserRecord::try_from(row),
            None => Err(DbError::not_found(id)),
        }
    }

    /// Flip an active user to inactive. Deleting twice is `NotFound`.
    pub async fn soft_delete(&self, id: i64) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              UPDATE users
              SET status = 'inactive', modified_at = MAX(created_at, ?)
              WHERE id = ? AND status = 'active'
              "#,
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(id));
        }

        Ok(())
    }
}

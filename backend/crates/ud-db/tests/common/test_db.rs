use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ud_db::create_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// File-backed pool for tests that need several concurrent connections
#[allow(dead_code)]
pub async fn create_file_pool(path: &Path, max_connections: u32) -> SqlitePool {
    let pool = ud_db::create_pool(path, max_connections, Duration::from_secs(5))
        .await
        .expect("Failed to create file pool");

    ud_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Reads the raw status column, bypassing the active-only repository queries
#[allow(dead_code)]
pub async fn raw_status(pool: &SqlitePool, id: i64) -> String {
    // Use sqlx::query_scalar (not the repository) so inactive rows are visible
    sqlx::query_scalar::<_, String>("SELECT status FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read status")
}

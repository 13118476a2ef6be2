pub mod event_tests;
pub mod rotator_tests;

use crate::db::migration;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh in-memory database with the full schema. A single connection keeps
/// every query on the same :memory: instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    migration::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

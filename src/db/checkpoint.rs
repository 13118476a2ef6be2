// Durable poller progress. Single row in sync_state, value stored as a
// decimal string so the schema stays uniform with other state keys.

use sqlx::{Row, SqlitePool};
use std::time::{SystemTime, UNIX_EPOCH};

pub const LAST_INDEXED_VERSION: &str = "last_indexed_version";

/// Returns `None` when no checkpoint has ever been written (fresh database)
/// or the stored value does not parse; the poller then falls back to the
/// current ledger tip.
pub async fn load_last_version(pool: &SqlitePool) -> Result<Option<u64>, sqlx::Error> {
    let row = sqlx::query("SELECT value FROM sync_state WHERE key = ?")
        .bind(LAST_INDEXED_VERSION)
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|row| row.get::<String, _>("value").parse().ok()))
}

pub async fn save_last_version(pool: &SqlitePool, version: u64) -> Result<(), sqlx::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    sqlx::query(
        "INSERT INTO sync_state (key, value, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(LAST_INDEXED_VERSION)
    .bind(version.to_string())
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

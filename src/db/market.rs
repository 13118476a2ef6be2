use sqlx::SqlitePool;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unconditional status overwrite, naturally idempotent. Returns whether a
/// market row was actually touched; resolving an unknown market is not an
/// error (the row may not have been written by the app yet).
pub async fn mark_resolved(pool: &SqlitePool, market_address: &str) -> Result<bool, sqlx::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    let result = sqlx::query("UPDATE markets SET status = ?, updated_at = ? WHERE market_address = ?")
        .bind("resolved")
        .bind(now)
        .bind(market_address)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

use crate::models::Activity;
use sqlx::{Row, SqlitePool};

/// Insert-or-ignore keyed on tx_hash. Returns whether a new row was written
/// so handlers can tell a first delivery from a replay.
pub async fn insert_activity(pool: &SqlitePool, activity: &Activity) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO activities
        (tx_hash, market_address, user_address, action, outcome, amount, total_value, timestamp)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(tx_hash) DO NOTHING
        "#,
    )
    .bind(&activity.tx_hash)
    .bind(&activity.market_address)
    .bind(&activity.user_address)
    .bind(activity.action.as_str())
    .bind(activity.outcome.as_str())
    .bind(activity.amount)
    .bind(activity.total_value)
    .bind(activity.timestamp)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_activities(pool: &SqlitePool, market_address: &str) -> Result<i64, sqlx::Error> {
    let count = sqlx::query("SELECT COUNT(*) FROM activities WHERE market_address = ?")
        .bind(market_address)
        .fetch_one(pool)
        .await?
        .get::<i64, _>(0);

    Ok(count)
}

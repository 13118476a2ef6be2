// Thin control surface over the poller's state: health probe, progress
// status and a manual poll trigger. No independent logic lives here.

use crate::{api::error::ApiError, db::checkpoint, state::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/trigger", post(trigger_poll))
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    Json(json!({
        "status": "healthy",
        "service": "event-indexer",
        "time": now,
    }))
}

async fn status(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let checkpoint = checkpoint::load_last_version(&state.db_pool).await?;
    let rotator = state.rotator.stats().await;

    Ok(Json(json!({
        "status": "running",
        "last_version": state.last_version.load(Ordering::Relaxed),
        "checkpoint": checkpoint,
        "network": state.config.network,
        "rotator": rotator,
    })))
}

/// Wakes the poller for an out-of-band cycle. The poller consumes the
/// notification in the same select loop as its timer, so a concurrent tick
/// never overlaps a triggered pass.
async fn trigger_poll(State(state): State<Arc<AppState>>) -> Json<Value> {
    info!("Manual poll requested");
    state.poll_trigger.notify_one();

    Json(json!({
        "status": "triggered",
    }))
}

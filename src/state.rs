use crate::config::Config;
use crate::indexer::rotator::KeyRotator;
use sqlx::SqlitePool;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Notify;

pub struct AppState {
    pub config: Config,
    pub db_pool: SqlitePool,
    /// Last fully-processed ledger version, mirrored here for /status.
    pub last_version: AtomicU64,
    /// Fired by POST /trigger; the poller consumes it in its select loop.
    pub poll_trigger: Notify,
    pub rotator: Arc<KeyRotator>,
}

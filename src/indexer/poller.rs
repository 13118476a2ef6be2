// The control loop: one timer-driven task per process. Each tick walks the
// unprocessed version range in batches, feeds every transaction through the
// dispatcher sequentially in ledger order, then commits progress. Ordering
// matters: resolution events assume the creation at a lower version was
// already applied.

use crate::db::checkpoint;
use crate::indexer::client::{ClientError, LedgerClient};
use crate::indexer::dispatch::EventRouter;
use crate::state::AppState;
use crate::webhook::WebhookClient;
use sqlx::SqlitePool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub struct Poller {
    client: LedgerClient,
    router: EventRouter,
    db_pool: SqlitePool,
    state: Arc<AppState>,
    last_version: u64,
    batch_size: u64,
}

pub async fn start_polling(state: Arc<AppState>, shutdown: CancellationToken) {
    info!("Starting ledger polling service");

    let config = &state.config;

    let client = match LedgerClient::new(config, state.rotator.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build ledger client: {}", e);
            return;
        }
    };

    let webhook = match &config.webhook_url {
        Some(url) => match WebhookClient::new(url.clone()) {
            Ok(client) => {
                info!(webhook_url = %url, "Webhook client initialized");
                Some(client)
            }
            Err(e) => {
                error!("Failed to build webhook client: {}", e);
                None
            }
        },
        None => {
            warn!("No webhook URL provided, notifications will not be sent");
            None
        }
    };

    let router = EventRouter::new(
        config.module_address.clone(),
        state.db_pool.clone(),
        webhook,
    );

    let mut poller = Poller {
        client,
        router,
        db_pool: state.db_pool.clone(),
        state: state.clone(),
        last_version: 0,
        batch_size: config.batch_size.max(1),
    };

    if let Err(e) = poller.resume().await {
        error!("Failed to determine starting version: {}", e);
        return;
    }

    info!(version = poller.last_version, "Starting from version");

    let mut ticker = interval(config.poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = poller.poll().await {
                    error!("Polling error: {}", e);
                }
            }
            _ = state.poll_trigger.notified() => {
                info!("Manual poll triggered");
                if let Err(e) = poller.poll().await {
                    error!("Polling error: {}", e);
                }
            }
            _ = shutdown.cancelled() => {
                info!("Shutting down ledger polling service");
                break;
            }
        }
    }
}

impl Poller {
    /// Resume from the persisted checkpoint, or from the current tip when no
    /// checkpoint exists. The tip fallback permanently skips anything before
    /// process start; an accepted recovery tradeoff, logged loudly.
    async fn resume(&mut self) -> Result<(), ClientError> {
        match checkpoint::load_last_version(&self.db_pool).await {
            Ok(Some(version)) => {
                self.last_version = version;
            }
            Ok(None) => {
                let tip = self.client.latest_version().await?;
                warn!(
                    tip,
                    "No checkpoint found, starting from current ledger tip; earlier events are skipped"
                );
                self.last_version = tip;
            }
            Err(e) => {
                let tip = self.client.latest_version().await?;
                warn!(
                    error = %e,
                    tip,
                    "Failed to load checkpoint, starting from current ledger tip"
                );
                self.last_version = tip;
            }
        }

        self.publish_version();
        Ok(())
    }

    /// One poll cycle over `[last_version + 1, latest]`. A batch fetch
    /// failure aborts the rest of the cycle with the cursor still at the end
    /// of the last fully-applied batch; the next tick retries from there.
    /// Per-transaction handler failures skip only that transaction.
    async fn poll(&mut self) -> Result<(), ClientError> {
        let latest = self.client.latest_version().await?;

        if latest <= self.last_version {
            return Ok(());
        }

        let mut start = self.last_version + 1;
        debug!(start, latest, "Polling new transactions");

        while start <= latest {
            let limit = self.batch_size.min(latest - start + 1);
            let txs = self.client.transactions_by_range(start, limit).await?;

            for tx in &txs {
                self.router.process_transaction(tx).await;
            }

            start += limit;
            self.last_version = start - 1;
            self.publish_version();
        }

        self.last_version = latest;
        self.publish_version();

        if let Err(e) = checkpoint::save_last_version(&self.db_pool, self.last_version).await {
            // The in-memory cursor has already advanced; a crash before the
            // next successful save replays a bounded, idempotent window.
            error!("Failed to save checkpoint: {}", e);
        }

        Ok(())
    }

    fn publish_version(&self) {
        self.state
            .last_version
            .store(self.last_version, Ordering::Relaxed);
    }
}

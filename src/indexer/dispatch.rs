// Per-transaction event filter and kind routing. Only successful user
// transactions are considered; events are matched to this deployment's
// module address by substring on the fully-qualified type, then routed by
// the terminal type segment.

use crate::indexer::models::{LedgerEvent, LedgerTransaction};
use crate::webhook::WebhookClient;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Known event kinds emitted by the market module. Kinds the indexer does
/// not understand yet simply fail to parse and are skipped, so newly added
/// on-chain events never break processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SharesMinted,
    SharesBurned,
    MarketCreated,
    MarketResolved,
}

impl EventKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SharesMintedEvent" => Some(EventKind::SharesMinted),
            "SharesBurnedEvent" => Some(EventKind::SharesBurned),
            "MarketCreatedEvent" => Some(EventKind::MarketCreated),
            "MarketResolvedEvent" => Some(EventKind::MarketResolved),
            _ => None,
        }
    }
}

pub struct EventRouter {
    pub(crate) module_address: String,
    pub(crate) db_pool: SqlitePool,
    pub(crate) webhook: Option<WebhookClient>,
}

impl EventRouter {
    pub fn new(module_address: String, db_pool: SqlitePool, webhook: Option<WebhookClient>) -> Self {
        Self {
            module_address,
            db_pool,
            webhook,
        }
    }

    /// Runs every matching event of `tx` through its handler, in event
    /// order. Handler errors are logged and do not stop sibling events.
    pub async fn process_transaction(&self, tx: &LedgerTransaction) {
        if !tx.success || !tx.is_user_transaction() {
            return;
        }

        for event in &tx.events {
            if !event.event_type.contains(&self.module_address) {
                continue;
            }

            let kind = match event.kind().and_then(EventKind::from_name) {
                Some(kind) => kind,
                None => {
                    debug!(event_type = %event.event_type, "No handler for event kind");
                    continue;
                }
            };

            if let Err(e) = self.handle(kind, event, tx).await {
                error!(
                    error = %e,
                    event = ?kind,
                    tx = %tx.hash,
                    "Handler error"
                );
            }
        }
    }

    async fn handle(
        &self,
        kind: EventKind,
        event: &LedgerEvent,
        tx: &LedgerTransaction,
    ) -> Result<(), HandlerError> {
        match kind {
            EventKind::SharesMinted => self.handle_shares_minted(event, tx).await,
            EventKind::SharesBurned => self.handle_shares_burned(event, tx).await,
            EventKind::MarketCreated => self.handle_market_created(event, tx).await,
            EventKind::MarketResolved => self.handle_market_resolved(event, tx).await,
        }
    }
}

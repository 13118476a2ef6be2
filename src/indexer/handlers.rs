// One handler per event kind. Each performs exactly one idempotent write
// (activity insert keyed on tx hash, or market status overwrite) and then
// fires the webhook. Webhook outcomes never surface as handler errors.

use crate::db::{activity, market};
use crate::indexer::dispatch::{EventRouter, HandlerError};
use crate::indexer::events::{MarketCreated, MarketResolved, SharesBurned, SharesMinted};
use crate::indexer::models::{LedgerEvent, LedgerTransaction};
use crate::models::{Activity, ActivityAction, Outcome};
use serde_json::json;
use tracing::info;

impl EventRouter {
    pub(crate) async fn handle_shares_minted(
        &self,
        event: &LedgerEvent,
        tx: &LedgerTransaction,
    ) -> Result<(), HandlerError> {
        let minted = SharesMinted::decode(&event.data);
        let outcome = Outcome::from_is_yes(minted.is_yes);

        let inserted = activity::insert_activity(
            &self.db_pool,
            &Activity {
                tx_hash: tx.hash.clone(),
                market_address: minted.market_address.clone(),
                user_address: minted.user.clone(),
                action: ActivityAction::Buy,
                outcome,
                amount: minted.shares(),
                total_value: minted.apt_amount(),
                timestamp: tx.timestamp_secs(),
            },
        )
        .await?;

        if inserted {
            info!(
                market = %minted.market_address,
                user = %minted.user,
                apt = minted.apt_amount(),
                shares = minted.shares(),
                outcome = outcome.as_str(),
                "BUY activity recorded"
            );
        }

        if let Some(webhook) = &self.webhook {
            webhook
                .send_event(
                    &event.event_type,
                    json!({
                        "market_address": minted.market_address,
                        "buyer": minted.user,
                        "is_yes_outcome": minted.is_yes,
                        "apt_amount_in": minted.apt_amount_in,
                        "shares_out": minted.shares_out,
                    }),
                    &tx.hash,
                    &tx.sender,
                )
                .await;
        }

        Ok(())
    }

    pub(crate) async fn handle_shares_burned(
        &self,
        event: &LedgerEvent,
        tx: &LedgerTransaction,
    ) -> Result<(), HandlerError> {
        let burned = SharesBurned::decode(&event.data);
        let outcome = Outcome::from_is_yes(burned.is_yes);

        let inserted = activity::insert_activity(
            &self.db_pool,
            &Activity {
                tx_hash: tx.hash.clone(),
                market_address: burned.market_address.clone(),
                user_address: burned.user.clone(),
                action: ActivityAction::Sell,
                outcome,
                amount: burned.shares(),
                total_value: burned.apt_amount(),
                timestamp: tx.timestamp_secs(),
            },
        )
        .await?;

        if inserted {
            info!(
                market = %burned.market_address,
                user = %burned.user,
                apt = burned.apt_amount(),
                shares = burned.shares(),
                outcome = outcome.as_str(),
                "SELL activity recorded"
            );
        }

        if let Some(webhook) = &self.webhook {
            webhook
                .send_event(
                    &event.event_type,
                    json!({
                        "market_address": burned.market_address,
                        "seller": burned.user,
                        "is_yes_outcome": burned.is_yes,
                        "apt_amount_out": burned.apt_amount_out,
                        "shares_in": burned.shares_in,
                    }),
                    &tx.hash,
                    &tx.sender,
                )
                .await;
        }

        Ok(())
    }

    /// Market rows are created by the app's own writer; this handler only
    /// announces the event downstream.
    pub(crate) async fn handle_market_created(
        &self,
        event: &LedgerEvent,
        tx: &LedgerTransaction,
    ) -> Result<(), HandlerError> {
        let created = MarketCreated::decode(&event.data);

        info!(
            market = %created.market_address,
            creator = %created.creator,
            description = %created.description,
            "New market created"
        );

        if let Some(webhook) = &self.webhook {
            webhook
                .send_event(
                    &event.event_type,
                    json!({
                        "market_address": created.market_address,
                        "creator": created.creator,
                        "description": created.description,
                        "resolution_timestamp": created.resolution_timestamp,
                    }),
                    &tx.hash,
                    &tx.sender,
                )
                .await;
        }

        Ok(())
    }

    pub(crate) async fn handle_market_resolved(
        &self,
        event: &LedgerEvent,
        tx: &LedgerTransaction,
    ) -> Result<(), HandlerError> {
        let resolved = MarketResolved::decode(&event.data);

        let updated = market::mark_resolved(&self.db_pool, &resolved.market_address).await?;

        info!(
            market = %resolved.market_address,
            outcome = %resolved.outcome,
            updated,
            tx = %tx.hash,
            "Market resolved"
        );

        Ok(())
    }
}

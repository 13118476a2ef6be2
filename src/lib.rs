pub mod api;
pub mod config;
pub mod db;
pub mod indexer;
pub mod models;
pub mod state;
pub mod webhook;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::create_router;
pub use api::error::ApiError;
pub use config::Config;
pub use indexer::{start_polling, EventRouter, KeyRotator, LedgerClient};
pub use models::Activity;
pub use state::AppState;

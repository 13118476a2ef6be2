pub mod client;
pub mod dispatch;
pub mod events;
pub mod handlers;
pub mod models;
pub mod poller;
pub mod rotator;

// Re-exports for convenience
pub use client::LedgerClient;
pub use dispatch::EventRouter;
pub use poller::start_polling;
pub use rotator::KeyRotator;

// Initialize configuration
// Set up logging
// Create database connection pool and run migrations
// Create shared state
// Start the ledger polling task
// Start HTTP control surface

use event_indexer::{api, config::Config, db, indexer, state::AppState};

use axum::http::Method;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting event-indexer");

    // Load configuration; missing required settings are fatal before any
    // polling begins
    let config = Config::from_env()?;
    tracing::info!(network = %config.network, module = %config.module_address, "Configuration loaded");

    // Setup database connection
    let db_pool = db::connection::establish_connection(&config.database_url).await?;
    db::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database connection established");

    // API key rotation
    let rotator = Arc::new(indexer::KeyRotator::new(
        vec![
            ("aptos".to_string(), config.aptos_api_keys.clone()),
            ("nodit".to_string(), config.nodit_api_keys.clone()),
        ],
        config.key_min_delay,
    ));
    if !config.aptos_api_keys.is_empty() || !config.nodit_api_keys.is_empty() {
        tracing::info!(
            aptos_keys = config.aptos_api_keys.len(),
            nodit_keys = config.nodit_api_keys.len(),
            "API key rotation enabled"
        );
    }

    // Create shared state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        db_pool: db_pool.clone(),
        last_version: AtomicU64::new(0),
        poll_trigger: Notify::new(),
        rotator,
    });

    // Start ledger polling task
    let shutdown = CancellationToken::new();
    let polling_state = app_state.clone();
    let polling_shutdown = shutdown.clone();
    let polling_handle = tokio::spawn(async move {
        indexer::start_polling(polling_state, polling_shutdown).await;
    });
    tracing::info!("Ledger polling task started");

    // Start HTTP server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);
    let app = api::create_router(app_state).layer(cors);
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Server is down; stop the poller after its in-flight tick completes
    tracing::info!("Shutting down indexer...");
    shutdown.cancel();
    let _ = polling_handle.await;

    tracing::info!("Indexer stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}

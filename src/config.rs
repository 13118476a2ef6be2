// Configuration for:
// - Database connection string
// - Ledger module address to index
// - RPC network / endpoint and API key pools
// - Webhook URL for downstream notifications
// - Polling interval and batch sizing

use dotenv::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub network: String,
    pub module_address: String,
    pub server_host: String,
    pub server_port: u16,
    pub webhook_url: Option<String>,
    pub ledger_rpc_url: Option<String>,
    pub aptos_api_keys: Vec<String>,
    pub nodit_api_keys: Vec<String>,
    pub rpc_key_pool: String,
    pub poll_interval: Duration,
    pub batch_size: u64,
    pub rpc_timeout_secs: u64,
    pub key_min_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let module_address =
            env::var("MODULE_ADDRESS").map_err(|_| ConfigError::MissingVar("MODULE_ADDRESS"))?;

        let network = env::var("APTOS_NETWORK").unwrap_or_else(|_| "testnet".to_string());
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3002".to_string())
            .parse()
            .unwrap_or(3002);
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|url| !url.is_empty());
        let ledger_rpc_url = env::var("LEDGER_RPC_URL").ok().filter(|url| !url.is_empty());
        let aptos_api_keys = parse_key_list(env::var("APTOS_API_KEYS").ok());
        let nodit_api_keys = parse_key_list(env::var("NODIT_API_KEYS").ok());
        let rpc_key_pool = env::var("RPC_KEY_POOL").unwrap_or_else(|_| "aptos".to_string());
        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));
        let batch_size = env::var("BATCH_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .unwrap_or(100);
        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(30))
            .unwrap_or(30);
        let key_min_delay = env::var("KEY_MIN_DELAY_MS")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(100));

        Ok(Self {
            database_url,
            network,
            module_address,
            server_host,
            server_port,
            webhook_url,
            ledger_rpc_url,
            aptos_api_keys,
            nodit_api_keys,
            rpc_key_pool,
            poll_interval,
            batch_size,
            rpc_timeout_secs,
            key_min_delay,
        })
    }
}

/// Comma-separated key list, whitespace-trimmed, empties dropped.
fn parse_key_list(raw: Option<String>) -> Vec<String> {
    raw.map(|keys| {
        keys.split(',')
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

use crate::config::Config;
use crate::indexer::models::{LedgerInfo, LedgerTransaction};
use crate::indexer::rotator::KeyRotator;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const TESTNET_RPC: &str = "https://fullnode.testnet.aptoslabs.com/v1";
pub const MAINNET_RPC: &str = "https://fullnode.mainnet.aptoslabs.com/v1";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("RPC error: status={status}, body={body}")]
    Status { status: StatusCode, body: String },
}

/// Read-only fullnode client. No internal retry: a failed call fails the
/// current poll cycle and the next tick starts over from the unchanged
/// checkpoint.
pub struct LedgerClient {
    rpc_url: String,
    http: reqwest::Client,
    rotator: Arc<KeyRotator>,
    key_pool: String,
}

impl LedgerClient {
    pub fn new(config: &Config, rotator: Arc<KeyRotator>) -> Result<Self, ClientError> {
        let rpc_url = config.ledger_rpc_url.clone().unwrap_or_else(|| {
            match config.network.as_str() {
                "mainnet" => MAINNET_RPC,
                _ => TESTNET_RPC,
            }
            .to_string()
        });

        info!(
            network = %config.network,
            rpc_url = %rpc_url,
            "Initializing ledger client"
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.rpc_timeout_secs))
            .build()?;

        Ok(Self {
            rpc_url,
            http,
            rotator,
            key_pool: config.rpc_key_pool.clone(),
        })
    }

    /// Current ledger tip.
    pub async fn latest_version(&self) -> Result<u64, ClientError> {
        let info: LedgerInfo = self.get(&self.rpc_url).await?;
        Ok(info.ledger_version.parse().unwrap_or(0))
    }

    /// Transactions for `[start, start + limit)` in ledger order. The range
    /// may include non-user transactions; the dispatcher filters them.
    pub async fn transactions_by_range(
        &self,
        start: u64,
        limit: u64,
    ) -> Result<Vec<LedgerTransaction>, ClientError> {
        let url = format!("{}/transactions?start={}&limit={}", self.rpc_url, start, limit);
        self.get(&url).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let mut request = self.http.get(url);

        if let Some(key) = self.rotator.acquire(&self.key_pool).await {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

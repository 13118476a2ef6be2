// Best-effort downstream notifier. Failures are logged and swallowed:
// nothing in the pipeline may depend on webhook delivery for correctness.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct WebhookPayload<'a> {
    event: EventData<'a>,
    transaction: TransactionData<'a>,
}

#[derive(Serialize)]
struct EventData<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    data: Value,
}

#[derive(Serialize)]
struct TransactionData<'a> {
    hash: &'a str,
    sender: &'a str,
    timestamp: String,
}

pub struct WebhookClient {
    url: String,
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;

        Ok(Self { url, http })
    }

    /// Fire-and-forget delivery; bounded by the client timeout and never
    /// returns an error to the caller.
    pub async fn send_event(&self, event_type: &str, data: Value, tx_hash: &str, sender: &str) {
        let payload = WebhookPayload {
            event: EventData { event_type, data },
            transaction: TransactionData {
                hash: tx_hash,
                sender,
                timestamp: Utc::now().to_rfc3339(),
            },
        };

        let response = self.http.post(&self.url).json(&payload).send().await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!(event_type, tx = %tx_hash, "Webhook delivered");
            }
            Ok(response) => {
                warn!(
                    event_type,
                    status = %response.status(),
                    "Webhook returned non-success status (non-critical)"
                );
            }
            Err(e) => {
                warn!(event_type, error = %e, "Webhook request failed (non-critical)");
            }
        }
    }
}

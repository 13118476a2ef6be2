// Wire models for the fullnode REST API. Numeric fields arrive as decimal
// strings; everything defaults so genesis/meta entries in a version range
// deserialize without special cases.

use serde::Deserialize;
use serde_json::Value;

pub const USER_TRANSACTION: &str = "user_transaction";

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerTransaction {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub vm_status: String,
    #[serde(rename = "type", default)]
    pub tx_type: String,
    /// Microseconds since epoch, as a decimal string.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub events: Vec<LedgerEvent>,
}

impl LedgerTransaction {
    pub fn is_user_transaction(&self) -> bool {
        self.tx_type == USER_TRANSACTION
    }

    /// Wall-clock time in unix seconds; zero when absent or malformed.
    pub fn timestamp_secs(&self) -> i64 {
        self.timestamp.parse::<i64>().unwrap_or(0) / 1_000_000
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub data: Value,
}

impl LedgerEvent {
    /// Terminal segment of the fully-qualified type, e.g.
    /// `0xabc::market::SharesMintedEvent` -> `SharesMintedEvent`. `None` for
    /// type names without the full address::module::name shape.
    pub fn kind(&self) -> Option<&str> {
        let parts: Vec<&str> = self.event_type.split("::").collect();
        if parts.len() < 3 {
            return None;
        }
        parts.last().copied()
    }
}

#[derive(Debug, Deserialize)]
pub struct LedgerInfo {
    #[serde(default)]
    pub ledger_version: String,
}

// Payload decoders, one per event kind. The source emits loosely-typed JSON
// maps with amounts as decimal strings in minor units; every field decodes
// with a zero/empty default so a malformed payload degrades instead of
// aborting the transaction.

use serde_json::Value;

/// Octas per APT.
pub const APT_DECIMALS: f64 = 1e8;
/// Minor units per outcome share.
pub const SHARE_DECIMALS: f64 = 1e6;

fn str_field(data: &Value, field: &str) -> String {
    data.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_field(data: &Value, field: &str) -> bool {
    data.get(field).and_then(Value::as_bool).unwrap_or(false)
}

fn scaled(raw: &str, decimals: f64) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0) / decimals
}

/// A user bought shares.
#[derive(Debug, Clone)]
pub struct SharesMinted {
    pub market_address: String,
    pub user: String,
    /// Raw octas string, forwarded verbatim to the webhook.
    pub apt_amount_in: String,
    /// Raw share minor-units string.
    pub shares_out: String,
    pub is_yes: bool,
}

impl SharesMinted {
    pub fn decode(data: &Value) -> Self {
        Self {
            market_address: str_field(data, "market_address"),
            user: str_field(data, "user"),
            apt_amount_in: str_field(data, "apt_amount_in"),
            shares_out: str_field(data, "shares_out"),
            is_yes: bool_field(data, "is_yes"),
        }
    }

    pub fn apt_amount(&self) -> f64 {
        scaled(&self.apt_amount_in, APT_DECIMALS)
    }

    pub fn shares(&self) -> f64 {
        scaled(&self.shares_out, SHARE_DECIMALS)
    }
}

/// A user sold shares back.
#[derive(Debug, Clone)]
pub struct SharesBurned {
    pub market_address: String,
    pub user: String,
    pub apt_amount_out: String,
    pub shares_in: String,
    pub is_yes: bool,
}

impl SharesBurned {
    pub fn decode(data: &Value) -> Self {
        Self {
            market_address: str_field(data, "market_address"),
            user: str_field(data, "user"),
            apt_amount_out: str_field(data, "apt_amount_out"),
            shares_in: str_field(data, "shares_in"),
            is_yes: bool_field(data, "is_yes"),
        }
    }

    pub fn apt_amount(&self) -> f64 {
        scaled(&self.apt_amount_out, APT_DECIMALS)
    }

    pub fn shares(&self) -> f64 {
        scaled(&self.shares_in, SHARE_DECIMALS)
    }
}

#[derive(Debug, Clone)]
pub struct MarketCreated {
    pub market_address: String,
    pub creator: String,
    pub description: String,
    pub resolution_timestamp: String,
}

impl MarketCreated {
    pub fn decode(data: &Value) -> Self {
        Self {
            market_address: str_field(data, "market_address"),
            creator: str_field(data, "creator"),
            description: str_field(data, "description"),
            resolution_timestamp: str_field(data, "resolution_timestamp"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketResolved {
    pub market_address: String,
    pub outcome: String,
}

impl MarketResolved {
    pub fn decode(data: &Value) -> Self {
        Self {
            market_address: str_field(data, "market_address"),
            outcome: str_field(data, "outcome"),
        }
    }
}

// Persisted-row models shared between the handlers, the db layer and tests.

use serde::{Deserialize, Serialize};

/// BUY/SELL direction of a share trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    Buy,
    Sell,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Buy => "BUY",
            ActivityAction::Sell => "SELL",
        }
    }
}

/// Which side of a binary market the trade was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub fn from_is_yes(is_yes: bool) -> Self {
        if is_yes {
            Outcome::Yes
        } else {
            Outcome::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Yes => "YES",
            Outcome::No => "NO",
        }
    }
}

/// One trade derived from a mint or burn event. `tx_hash` is the natural
/// key; inserts are insert-or-ignore so replays collapse to one row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub tx_hash: String,
    pub market_address: String,
    pub user_address: String,
    pub action: ActivityAction,
    pub outcome: Outcome,
    /// Share quantity, scaled out of minor units.
    pub amount: f64,
    /// APT value of the trade, scaled out of octas.
    pub total_value: f64,
    /// Transaction wall-clock time, unix seconds.
    pub timestamp: i64,
}

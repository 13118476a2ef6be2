pub mod activity;
pub mod checkpoint;
pub mod connection;
pub mod market;
pub mod migration;

pub const INIT_SCHEMA: &str = r#"
-- Poller progress: single row keyed 'last_indexed_version'. Deliberately
-- not seeded so a fresh database resumes from the current ledger tip.
CREATE TABLE IF NOT EXISTS sync_state (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);

-- One row per trade, keyed on transaction hash for idempotent replay.
CREATE TABLE IF NOT EXISTS activities (
    tx_hash        TEXT PRIMARY KEY,
    market_address TEXT NOT NULL,
    user_address   TEXT NOT NULL,
    action         TEXT NOT NULL,
    outcome        TEXT NOT NULL,
    amount         REAL NOT NULL,
    total_value    REAL NOT NULL,
    timestamp      INTEGER NOT NULL,
    created_at     INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

-- Markets are created by the app writer. The indexer only flips status.
CREATE TABLE IF NOT EXISTS markets (
    market_address       TEXT PRIMARY KEY,
    creator              TEXT,
    description          TEXT,
    status               TEXT NOT NULL DEFAULT 'open',
    resolution_timestamp INTEGER,
    updated_at           INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

-- Indexes for the read paths of the reporting service
CREATE INDEX IF NOT EXISTS idx_activities_market ON activities(market_address);
CREATE INDEX IF NOT EXISTS idx_activities_user ON activities(user_address);
CREATE INDEX IF NOT EXISTS idx_activities_time ON activities(timestamp);
"#;

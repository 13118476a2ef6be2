// Round-robin API key rotation across named pools, with a minimum reuse
// interval per key so a burst of requests cannot hammer one key into a
// rate limit.

use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(100);

struct PoolState {
    keys: Vec<String>,
    cursor: u64,
}

struct RotatorState {
    pools: HashMap<String, PoolState>,
    last_used: HashMap<String, Instant>,
    total_rotations: u64,
}

pub struct KeyRotator {
    state: Mutex<RotatorState>,
    min_delay: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct RotatorStats {
    pub pool_sizes: HashMap<String, usize>,
    pub total_rotations: u64,
}

impl KeyRotator {
    pub fn new(pools: Vec<(String, Vec<String>)>, min_delay: Duration) -> Self {
        let pools = pools
            .into_iter()
            .map(|(name, keys)| (name, PoolState { keys, cursor: 0 }))
            .collect();

        Self {
            state: Mutex::new(RotatorState {
                pools,
                last_used: HashMap::new(),
                total_rotations: 0,
            }),
            min_delay,
        }
    }

    /// Next key from `pool`, round-robin. If the chosen key was used within
    /// `min_delay`, sleeps off the remainder while still holding the internal
    /// lock: acquisitions serialize pool-wide under pressure, which is the
    /// intended backpressure on the upstream RPC. `None` when the pool is
    /// empty or unknown; callers proceed unauthenticated.
    pub async fn acquire(&self, pool: &str) -> Option<String> {
        let mut state = self.state.lock().await;

        let key = {
            let pool_state = state.pools.get_mut(pool)?;
            if pool_state.keys.is_empty() {
                return None;
            }
            let key = pool_state.keys[(pool_state.cursor % pool_state.keys.len() as u64) as usize]
                .clone();
            pool_state.cursor += 1;
            key
        };
        state.total_rotations += 1;

        if let Some(last) = state.last_used.get(&key) {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                debug!(pool, "Throttling key reuse for {:?}", self.min_delay - elapsed);
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }

        state.last_used.insert(key.clone(), Instant::now());
        Some(key)
    }

    /// Read-only usage snapshot for /status; does not advance any cursor.
    pub async fn stats(&self) -> RotatorStats {
        let state = self.state.lock().await;

        RotatorStats {
            pool_sizes: state
                .pools
                .iter()
                .map(|(name, pool)| (name.clone(), pool.keys.len()))
                .collect(),
            total_rotations: state.total_rotations,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::indexer::rotator::KeyRotator;
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    fn pool(name: &str, keys: &[&str]) -> (String, Vec<String>) {
        (
            name.to_string(),
            keys.iter().map(|k| k.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn test_round_robin_fairness() {
        let rotator = KeyRotator::new(
            vec![pool("aptos", &["key-a", "key-b", "key-c"])],
            Duration::ZERO,
        );

        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order = Vec::new();

        for _ in 0..30 {
            let key = rotator.acquire("aptos").await.expect("pool has keys");
            *counts.entry(key.clone()).or_default() += 1;
            order.push(key);
        }

        // Exactly M/N selections per key
        assert_eq!(counts["key-a"], 10);
        assert_eq!(counts["key-b"], 10);
        assert_eq!(counts["key-c"], 10);

        // Strict round-robin order, wrapping by modulo
        for (i, key) in order.iter().enumerate() {
            let expected = match i % 3 {
                0 => "key-a",
                1 => "key-b",
                _ => "key-c",
            };
            assert_eq!(key, expected, "selection {} out of rotation order", i);
        }
    }

    #[tokio::test]
    async fn test_min_delay_throttles_reuse() {
        let min_delay = Duration::from_millis(50);
        let rotator = KeyRotator::new(vec![pool("aptos", &["only-key"])], min_delay);

        let started = Instant::now();
        rotator.acquire("aptos").await.expect("pool has keys");
        rotator.acquire("aptos").await.expect("pool has keys");

        // Pool of size 1: the second acquisition must wait out min_delay
        assert!(
            started.elapsed() >= min_delay,
            "consecutive acquisitions of the same key were not throttled"
        );
    }

    #[tokio::test]
    async fn test_empty_and_unknown_pools() {
        let rotator = KeyRotator::new(
            vec![pool("aptos", &[]), pool("nodit", &["n1"])],
            Duration::ZERO,
        );

        assert_eq!(rotator.acquire("aptos").await, None);
        assert_eq!(rotator.acquire("missing").await, None);
        assert_eq!(rotator.acquire("nodit").await.as_deref(), Some("n1"));
    }

    #[tokio::test]
    async fn test_pools_rotate_independently() {
        let rotator = KeyRotator::new(
            vec![pool("aptos", &["a1", "a2"]), pool("nodit", &["n1", "n2"])],
            Duration::ZERO,
        );

        assert_eq!(rotator.acquire("aptos").await.as_deref(), Some("a1"));
        assert_eq!(rotator.acquire("nodit").await.as_deref(), Some("n1"));
        // Interleaving one pool must not advance the other's cursor
        assert_eq!(rotator.acquire("aptos").await.as_deref(), Some("a2"));
        assert_eq!(rotator.acquire("nodit").await.as_deref(), Some("n2"));
    }

    #[tokio::test]
    async fn test_stats_are_read_only() {
        let rotator = KeyRotator::new(
            vec![pool("aptos", &["a1", "a2"]), pool("nodit", &["n1"])],
            Duration::ZERO,
        );

        rotator.acquire("aptos").await.expect("pool has keys");
        rotator.acquire("aptos").await.expect("pool has keys");

        let stats = rotator.stats().await;
        assert_eq!(stats.pool_sizes["aptos"], 2);
        assert_eq!(stats.pool_sizes["nodit"], 1);
        assert_eq!(stats.total_rotations, 2);

        // Reading stats must not perturb the rotation cursor
        let _ = rotator.stats().await;
        assert_eq!(rotator.acquire("aptos").await.as_deref(), Some("a1"));
    }
}

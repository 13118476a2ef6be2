#[cfg(test)]
mod tests {
    use crate::indexer::events::{MarketResolved, SharesBurned, SharesMinted};
    use crate::indexer::models::{LedgerEvent, LedgerTransaction};
    use serde_json::json;

    #[test]
    fn test_event_kind_extraction() {
        let event = LedgerEvent {
            event_type: "0xabc123::market::SharesMintedEvent".to_string(),
            data: json!({}),
        };
        assert_eq!(event.kind(), Some("SharesMintedEvent"));

        // Type names without the address::module::name shape are skipped
        let short = LedgerEvent {
            event_type: "0x1::coin".to_string(),
            data: json!({}),
        };
        assert_eq!(short.kind(), None);

        let bare = LedgerEvent {
            event_type: "SharesMintedEvent".to_string(),
            data: json!({}),
        };
        assert_eq!(bare.kind(), None);
    }

    #[test]
    fn test_minted_decoder_scales_minor_units() {
        let minted = SharesMinted::decode(&json!({
            "market_address": "0xmarket",
            "user": "0xuser",
            "apt_amount_in": "100000000",
            "shares_out": "2000000",
            "is_yes": true,
        }));

        assert_eq!(minted.market_address, "0xmarket");
        assert!(minted.is_yes);
        assert_eq!(minted.apt_amount(), 1.0);
        assert_eq!(minted.shares(), 2.0);
    }

    #[test]
    fn test_decoders_default_on_missing_or_mistyped_fields() {
        // Entirely empty payload
        let minted = SharesMinted::decode(&json!({}));
        assert_eq!(minted.market_address, "");
        assert_eq!(minted.apt_amount(), 0.0);
        assert_eq!(minted.shares(), 0.0);
        assert!(!minted.is_yes);

        // Mistyped fields fall back to defaults rather than failing
        let burned = SharesBurned::decode(&json!({
            "market_address": 42,
            "apt_amount_out": "not-a-number",
            "is_yes": "true",
        }));
        assert_eq!(burned.market_address, "");
        assert_eq!(burned.apt_amount(), 0.0);
        assert!(!burned.is_yes);

        let resolved = MarketResolved::decode(&json!({ "outcome": "YES" }));
        assert_eq!(resolved.market_address, "");
        assert_eq!(resolved.outcome, "YES");
    }

    #[test]
    fn test_transaction_wire_model() {
        let raw = json!({
            "version": "1234",
            "hash": "0xhash",
            "sender": "0xsender",
            "success": true,
            "vm_status": "Executed successfully",
            "type": "user_transaction",
            "timestamp": "1700000000123456",
            "events": [
                { "type": "0xabc::market::SharesMintedEvent", "data": { "is_yes": true } }
            ],
        });

        let tx: LedgerTransaction = serde_json::from_value(raw).unwrap();
        assert!(tx.is_user_transaction());
        assert_eq!(tx.timestamp_secs(), 1_700_000_000);
        assert_eq!(tx.events.len(), 1);

        // Metadata entries in a version range carry almost none of these
        // fields and must still deserialize
        let meta: LedgerTransaction =
            serde_json::from_value(json!({ "type": "block_metadata_transaction" })).unwrap();
        assert!(!meta.is_user_transaction());
        assert!(!meta.success);
        assert_eq!(meta.timestamp_secs(), 0);
    }
}

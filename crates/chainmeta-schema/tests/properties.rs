//! Property tests for the validation engine.
//!
//! Validation must be a pure function of its input: deterministic,
//! idempotent, and panic-free for any JSON value whatsoever — malformed
//! candidates are the expected case at this boundary, not the exceptional
//! one.

use proptest::prelude::*;
use serde_json::{json, Value};

use chainmeta_schema::{is_valid_chain_metadata, ChainMetadataValidator};

/// Arbitrary JSON values, up to a few levels deep.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<u32>().prop_map(|n| json!(n)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9:/. _-]{0,24}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9]{0,9}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_validation_is_idempotent(candidate in arb_json()) {
        let validator = ChainMetadataValidator::new();
        let first = validator.check(&candidate);
        let second = validator.check(&candidate);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_boolean_form_agrees_with_violation_list(candidate in arb_json()) {
        let validator = ChainMetadataValidator::new();
        prop_assert_eq!(
            validator.is_valid(&candidate),
            validator.check(&candidate).is_empty()
        );
    }

    #[test]
    fn prop_arbitrary_input_never_panics(candidate in arb_json()) {
        // The assertion is that we get here at all; the result is free.
        let _ = is_valid_chain_metadata(&candidate);
    }

    #[test]
    fn prop_minimal_entry_with_any_slug_is_valid(
        name in "[a-z][a-z0-9]{0,12}",
        chain_id in any::<u32>(),
        domain_id in any::<u32>(),
    ) {
        let candidate = json!({
            "chainId": chain_id,
            "domainId": domain_id,
            "name": name,
            "protocol": "ethereum",
            "rpcUrls": [{ "http": "https://rpc.example.com" }],
        });
        prop_assert!(is_valid_chain_metadata(&candidate));
    }
}

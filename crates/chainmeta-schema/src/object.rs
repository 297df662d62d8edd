//! Nested object schemas.
//!
//! One checker per sub-object of a chain metadata entry. Each walks every
//! field of its object so a single call reports all violations under that
//! subtree, with paths rooted at the caller-supplied prefix.

use serde_json::Value;

use crate::field::{
    check_object, check_positive_number, check_string, check_uint, check_url, child, require,
};
use crate::validate::Violation;

/// `{ http: URL, ws?: URL }`
pub(crate) fn check_rpc_url(value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(obj) = check_object(value, path, out) else {
        return;
    };
    if let Some(v) = require(obj, "http", path, out) {
        check_url(v, &child(path, "http"), out);
    }
    if let Some(v) = obj.get("ws") {
        check_url(v, &child(path, "ws"), out);
    }
}

/// `{ name: string, url: URL, apiUrl?: URL }`
pub(crate) fn check_block_explorer(value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(obj) = check_object(value, path, out) else {
        return;
    };
    if let Some(v) = require(obj, "name", path, out) {
        check_string(v, &child(path, "name"), out);
    }
    if let Some(v) = require(obj, "url", path, out) {
        check_url(v, &child(path, "url"), out);
    }
    if let Some(v) = obj.get("apiUrl") {
        check_url(v, &child(path, "apiUrl"), out);
    }
}

/// `{ confirmations: uint, estimateBlockTime: positive number,
///    reorgPeriod?: uint }`
pub(crate) fn check_block_config(value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(obj) = check_object(value, path, out) else {
        return;
    };
    if let Some(v) = require(obj, "confirmations", path, out) {
        check_uint(v, &child(path, "confirmations"), out);
    }
    if let Some(v) = require(obj, "estimateBlockTime", path, out) {
        check_positive_number(v, &child(path, "estimateBlockTime"), out);
    }
    if let Some(v) = obj.get("reorgPeriod") {
        check_uint(v, &child(path, "reorgPeriod"), out);
    }
}

/// `{ name: string, symbol: string, decimals: uint in 1..=255 }`
pub(crate) fn check_native_token(value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(obj) = check_object(value, path, out) else {
        return;
    };
    if let Some(v) = require(obj, "name", path, out) {
        check_string(v, &child(path, "name"), out);
    }
    if let Some(v) = require(obj, "symbol", path, out) {
        check_string(v, &child(path, "symbol"), out);
    }
    if let Some(v) = require(obj, "decimals", path, out) {
        let decimals_path = child(path, "decimals");
        if let Some(n) = check_uint(v, &decimals_path, out) {
            if !(1..=255).contains(&n) {
                out.push(Violation::new(decimals_path, "must be between 1 and 255"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_url_requires_http() {
        let mut out = Vec::new();
        check_rpc_url(&json!({}), "rpcUrls[0]", &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "rpcUrls[0].http");
    }

    #[test]
    fn test_rpc_url_bad_ws_reported() {
        let mut out = Vec::new();
        check_rpc_url(
            &json!({ "http": "https://rpc.example.com", "ws": "nope" }),
            "rpcUrls[0]",
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "rpcUrls[0].ws");
    }

    #[test]
    fn test_block_explorer_all_fields_checked() {
        let mut out = Vec::new();
        check_block_explorer(
            &json!({ "name": 7, "url": "not-a-url", "apiUrl": "also-bad" }),
            "blockExplorers[0]",
            &mut out,
        );
        // One violation per failing field, none masked by the others.
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_block_config_zero_block_time_rejected() {
        let mut out = Vec::new();
        check_block_config(
            &json!({ "confirmations": 1, "estimateBlockTime": 0 }),
            "blocks",
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "blocks.estimateBlockTime");
    }

    #[test]
    fn test_native_token_decimals_range() {
        let mut out = Vec::new();
        check_native_token(
            &json!({ "name": "Ether", "symbol": "ETH", "decimals": 0 }),
            "nativeToken",
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "nativeToken.decimals");
    }
}

//! # Chain Metadata Validation
//!
//! Runtime validation of candidate chain metadata values, including rules
//! conditioned on the declared protocol family.
//!
//! ## Trust Boundary
//!
//! Chain metadata validation is a trust boundary. Candidates arrive from
//! configuration files, APIs, or user input; a candidate that fails
//! validation must be rejected with structured error information naming the
//! violating field path and the reason — and a candidate that cannot even
//! be inspected as an object (null, a primitive, an array) is reported as
//! invalid, never as a panic.
//!
//! ## Protocol-Conditioned Rules
//!
//! The top-level schema applies a refinement keyed on the `protocol` tag:
//! the permitted chain identifier kind comes from
//! [`ProtocolType::chain_id_kind`], and the presence requirement for
//! `bech32Prefix`/`slip44` from [`ProtocolType::requires_bech32_config`].
//! Adding a protocol family touches those two extension points, not this
//! module.
//!
//! ## Result Semantics
//!
//! All failing top-level branches are reflected in the violation list, not
//! just the first. Validation is pure, synchronous, and deterministic:
//! same candidate, same result, any number of times.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use chainmeta_core::{ChainIdKind, ProtocolType};

use crate::field::{
    check_array, check_bool, check_slug, check_string, check_uint, index, json_type, require,
};
use crate::object::{
    check_block_config, check_block_explorer, check_native_token, check_rpc_url,
};

/// Every field the schema knows about. Anything else is an unknown field,
/// tolerated or rejected per [`UnknownFieldPolicy`].
const KNOWN_FIELDS: &[&str] = &[
    "chainId",
    "domainId",
    "name",
    "displayName",
    "protocol",
    "rpcUrls",
    "blockExplorers",
    "blocks",
    "nativeToken",
    "bech32Prefix",
    "slip44",
    "isTestnet",
];

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted/indexed path to the violating field (e.g. `rpcUrls[0].http`).
    /// Empty for violations against the candidate as a whole.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Error surface for callers that want diagnostics rather than a boolean.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The candidate did not conform to the chain metadata schema.
    ///
    /// This is the normal negative outcome for malformed input, carried as
    /// a value so callers can render or inspect individual violations.
    #[error("chain metadata validation failed:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },
}

/// Policy for fields the schema does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Tolerate extra fields (the reference behavior).
    #[default]
    Allow,
    /// Reject the candidate with one violation per unknown field.
    Deny,
}

/// Validator configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorOptions {
    /// How to treat fields outside the schema.
    pub unknown_fields: UnknownFieldPolicy,
}

/// Validates candidate chain metadata values.
///
/// Stateless and trivially copyable; a single validator can be shared
/// across threads and calls without coordination, because each call only
/// reads its own input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainMetadataValidator {
    options: ValidatorOptions,
}

impl ChainMetadataValidator {
    /// Create a validator with default options (unknown fields tolerated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with explicit options.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Walk the candidate and collect every violation.
    ///
    /// An empty result means the candidate conforms. The list reflects all
    /// failing top-level branches, in field order, not just the first.
    pub fn check(&self, candidate: &Value) -> ValidationViolations {
        let mut out = Vec::new();
        self.check_into(candidate, &mut out);
        if !out.is_empty() {
            tracing::debug!(
                violations = out.len(),
                first = %out[0].path,
                "chain metadata candidate failed validation"
            );
        }
        ValidationViolations { violations: out }
    }

    /// Validate the candidate, returning structured violations on failure.
    pub fn validate(&self, candidate: &Value) -> Result<(), SchemaValidationError> {
        let violations = self.check(candidate);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed { violations })
        }
    }

    /// Boolean form of [`validate`](Self::validate).
    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.check(candidate).is_empty()
    }

    fn check_into(&self, candidate: &Value, out: &mut Vec<Violation>) {
        // Step 1: the candidate must be an inspectable object at all.
        let Some(obj) = candidate.as_object() else {
            out.push(Violation::new(
                "",
                format!("expected an object, got {}", json_type(candidate)),
            ));
            return;
        };

        // Step 2: per-field shape rules, each branch independent.
        if let Some(v) = require(obj, "name", "", out) {
            check_slug(v, "name", out);
        }
        if let Some(v) = require(obj, "domainId", "", out) {
            check_uint(v, "domainId", out);
        }
        if let Some(v) = require(obj, "rpcUrls", "", out) {
            if let Some(urls) = check_array(v, "rpcUrls", out) {
                if urls.is_empty() {
                    out.push(Violation::new("rpcUrls", "must contain at least one entry"));
                }
                for (i, entry) in urls.iter().enumerate() {
                    check_rpc_url(entry, &index("rpcUrls", i), out);
                }
            }
        }
        if let Some(v) = obj.get("blockExplorers") {
            if let Some(explorers) = check_array(v, "blockExplorers", out) {
                for (i, entry) in explorers.iter().enumerate() {
                    check_block_explorer(entry, &index("blockExplorers", i), out);
                }
            }
        }
        if let Some(v) = obj.get("blocks") {
            check_block_config(v, "blocks", out);
        }
        if let Some(v) = obj.get("displayName") {
            check_string(v, "displayName", out);
        }
        if let Some(v) = obj.get("nativeToken") {
            check_native_token(v, "nativeToken", out);
        }
        if let Some(v) = obj.get("isTestnet") {
            check_bool(v, "isTestnet", out);
        }

        // Step 3: resolve the protocol family and apply its refinement.
        let protocol = require(obj, "protocol", "", out)
            .and_then(|v| check_string(v, "protocol", out))
            .and_then(|s| match ProtocolType::from_str(s) {
                Ok(protocol) => Some(protocol),
                Err(_) => {
                    out.push(Violation::new(
                        "protocol",
                        format!("unknown protocol family {s:?}"),
                    ));
                    None
                }
            });

        match (obj.get("chainId"), protocol) {
            (None, _) => out.push(Violation::new("chainId", "missing required field")),
            (Some(v), Some(protocol)) => check_chain_id(v, protocol, out),
            (Some(v), None) => {
                // The family is unresolved (already reported above); only
                // the representation-independent shape can be checked.
                if v.as_u64().is_none() && !v.is_string() {
                    out.push(Violation::new(
                        "chainId",
                        format!(
                            "expected a non-negative integer or string, got {}",
                            json_type(v)
                        ),
                    ));
                }
            }
        }

        if let Some(protocol) = protocol {
            if protocol.requires_bech32_config() {
                match obj.get("bech32Prefix") {
                    Some(v) => {
                        check_slug(v, "bech32Prefix", out);
                    }
                    None => out.push(Violation::new(
                        "bech32Prefix",
                        format!("required for {protocol} chains"),
                    )),
                }
                match obj.get("slip44") {
                    Some(v) => {
                        check_uint(v, "slip44", out);
                    }
                    None => out.push(Violation::new(
                        "slip44",
                        format!("required for {protocol} chains"),
                    )),
                }
            }
        }

        // Step 4: unknown fields, per policy.
        if self.options.unknown_fields == UnknownFieldPolicy::Deny {
            for key in obj.keys() {
                if !KNOWN_FIELDS.contains(&key.as_str()) {
                    out.push(Violation::new(key.clone(), "unknown field"));
                }
            }
        }
    }
}

/// The chain identifier rule for the resolved protocol family.
fn check_chain_id(value: &Value, protocol: ProtocolType, out: &mut Vec<Violation>) {
    match protocol.chain_id_kind() {
        ChainIdKind::Numeric => {
            if value.as_u64().is_none() {
                out.push(Violation::new(
                    "chainId",
                    format!(
                        "must be a non-negative integer for {protocol} chains, got {}",
                        json_type(value)
                    ),
                ));
            }
        }
        ChainIdKind::NumericOrText => match value {
            Value::Number(_) if value.as_u64().is_some() => {}
            Value::String(s) if !s.is_empty() => {}
            Value::String(_) => {
                out.push(Violation::new("chainId", "must not be an empty string"));
            }
            other => out.push(Violation::new(
                "chainId",
                format!(
                    "must be a non-negative integer or string for {protocol} chains, got {}",
                    json_type(other)
                ),
            )),
        },
    }
}

/// Validate a candidate with default options, returning structured
/// violations on failure.
pub fn validate_chain_metadata(candidate: &Value) -> Result<(), SchemaValidationError> {
    ChainMetadataValidator::new().validate(candidate)
}

/// Boolean go/no-go validation with default options.
pub fn is_valid_chain_metadata(candidate: &Value) -> bool {
    ChainMetadataValidator::new().is_valid(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "chainId": 5,
            "domainId": 5,
            "name": "goerli",
            "protocol": "ethereum",
            "rpcUrls": [{ "http": "https://foobar.com" }],
        })
    }

    fn with(base: Value, key: &str, value: Value) -> Value {
        let mut obj = base;
        obj.as_object_mut().unwrap().insert(key.to_string(), value);
        obj
    }

    fn explorers() -> Value {
        json!([{
            "name": "scan",
            "url": "https://foobar.com",
            "apiUrl": "https://api.foobar.com",
        }])
    }

    #[test]
    fn test_accepts_minimal_schema() {
        assert!(is_valid_chain_metadata(&minimal()));
    }

    #[test]
    fn test_accepts_block_explorers_and_blocks() {
        let candidate = with(
            with(minimal(), "blockExplorers", explorers()),
            "blocks",
            json!({ "confirmations": 1, "estimateBlockTime": 10 }),
        );
        assert!(is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_accepts_supplementary_fields() {
        let candidate = with(
            with(
                with(minimal(), "displayName", json!("Goerli")),
                "nativeToken",
                json!({ "name": "Ether", "symbol": "ETH", "decimals": 18 }),
            ),
            "isTestnet",
            json!(true),
        );
        assert!(is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_accepts_cosmos_with_bech32_config() {
        let candidate = with(
            with(
                with(
                    with(minimal(), "protocol", json!("cosmos")),
                    "chainId",
                    json!("cosmos"),
                ),
                "bech32Prefix",
                json!("cosmos"),
            ),
            "slip44",
            json!(118),
        );
        assert!(is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_rejects_empty_object() {
        let violations = ChainMetadataValidator::new().check(&json!({}));
        assert!(!violations.is_empty());
        // One violation per missing required field.
        let paths: Vec<_> = violations.violations().iter().map(|v| v.path.as_str()).collect();
        for required in ["name", "domainId", "rpcUrls", "protocol", "chainId"] {
            assert!(paths.contains(&required), "missing violation for {required}");
        }
        assert_eq!(violations.len(), 5);
    }

    #[test]
    fn test_rejects_non_object_candidates() {
        for candidate in [json!(null), json!(5), json!("chain"), json!([1, 2])] {
            let violations = ChainMetadataValidator::new().check(&candidate);
            assert_eq!(violations.len(), 1);
            assert_eq!(violations.violations()[0].path, "");
        }
    }

    #[test]
    fn test_rejects_string_chain_id_for_ethereum() {
        let candidate = with(minimal(), "chainId", json!("id"));
        assert!(!is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_rejects_cosmos_without_bech32_config() {
        let candidate = with(
            with(minimal(), "protocol", json!("cosmos")),
            "chainId",
            json!("string-id"),
        );
        let violations = ChainMetadataValidator::new().check(&candidate);
        let paths: Vec<_> = violations.violations().iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"bech32Prefix"));
        assert!(paths.contains(&"slip44"));
    }

    #[test]
    fn test_rejects_bad_nested_api_url() {
        let candidate = with(
            minimal(),
            "blockExplorers",
            json!([{
                "name": "scan",
                "url": "https://foobar.com",
                "apiUrl": "not-a-url",
            }]),
        );
        let violations = ChainMetadataValidator::new().check(&candidate);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.violations()[0].path, "blockExplorers[0].apiUrl");
    }

    #[test]
    fn test_rejects_invalid_name() {
        let candidate = with(minimal(), "name", json!("Invalid name"));
        assert!(!is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_rejects_empty_rpc_urls() {
        let candidate = with(minimal(), "rpcUrls", json!([]));
        let violations = ChainMetadataValidator::new().check(&candidate);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.violations()[0].path, "rpcUrls");
    }

    #[test]
    fn test_rejects_numeric_string_domain_id() {
        let candidate = with(minimal(), "domainId", json!("5"));
        assert!(!is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_rejects_unknown_protocol_family() {
        let candidate = with(minimal(), "protocol", json!("bitcoin"));
        let violations = ChainMetadataValidator::new().check(&candidate);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.violations()[0].path, "protocol");
    }

    #[test]
    fn test_all_failing_branches_reported() {
        let candidate = with(
            with(minimal(), "name", json!("Bad Name")),
            "domainId",
            json!(true),
        );
        let violations = ChainMetadataValidator::new().check(&candidate);
        let paths: Vec<_> = violations.violations().iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"name"));
        assert!(paths.contains(&"domainId"));
    }

    #[test]
    fn test_unknown_fields_tolerated_by_default() {
        let candidate = with(minimal(), "futureField", json!({ "anything": 1 }));
        assert!(is_valid_chain_metadata(&candidate));
    }

    #[test]
    fn test_unknown_fields_rejected_in_strict_mode() {
        let strict = ChainMetadataValidator::with_options(ValidatorOptions {
            unknown_fields: UnknownFieldPolicy::Deny,
        });
        let candidate = with(minimal(), "futureField", json!(1));
        let violations = strict.check(&candidate);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.violations()[0].path, "futureField");
        assert!(strict.is_valid(&minimal()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let candidates = [minimal(), json!({}), json!(null), with(minimal(), "chainId", json!("id"))];
        let validator = ChainMetadataValidator::new();
        for candidate in &candidates {
            assert_eq!(validator.check(candidate), validator.check(candidate));
        }
    }

    #[test]
    fn test_error_display_names_paths() {
        let candidate = with(minimal(), "name", json!("Bad Name"));
        let err = validate_chain_metadata(&candidate).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("name"), "message was: {rendered}");
        assert!(rendered.contains("slug"), "message was: {rendered}");
    }
}

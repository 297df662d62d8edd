//! # Error Types
//!
//! Errors for constructor-level validation in the core types. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Note the split with the schema layer: candidate values that fail
//! structural validation are reported through `ValidationViolations` in
//! `chainmeta-schema` — invalid input there is the normal negative outcome,
//! not an error. `ChainMetaError` is for the narrower case where a caller
//! asked for a typed value (a `ChainName`, a deserialized `ChainMetadata`)
//! and cannot be given one.

use thiserror::Error;

/// Top-level error type for the core chain metadata types.
#[derive(Error, Debug)]
pub enum ChainMetaError {
    /// A chain name did not satisfy the slug pattern.
    #[error("invalid chain name {0:?}: must be lowercase alphanumeric starting with a letter")]
    InvalidChainName(String),

    /// A protocol tag did not name a known protocol family.
    #[error("unknown protocol type: {0:?}")]
    UnknownProtocol(String),

    /// A chain name was not found in a registry lookup.
    #[error("unknown chain: {0:?}")]
    UnknownChain(String),

    /// Deserialization into the typed model failed.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

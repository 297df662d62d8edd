//! # chainmeta-registry — Static Chain Metadata Table
//!
//! A registry of real-world chain metadata entries, embedded at compile
//! time from `data/chains.yaml` and parsed once on first access. Entries
//! are exposed in two forms:
//!
//! - raw `serde_json::Value`s keyed by chain slug — the form the schema
//!   validator consumes, and what the regression test feeds it;
//! - the typed [`ChainMetadata`] model, for consumers that want structured
//!   access after validation.
//!
//! The registry is data, not behavior: it never contacts any endpoint it
//! lists. Every entry must validate against the chainmeta schema; the
//! `validate_registry` integration test enforces this wholesale, and a
//! single failing entry is a regression.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value;

use chainmeta_core::{ChainMetaError, ChainMetadata};

static CHAINS_YAML: &str = include_str!("../data/chains.yaml");

static REGISTRY: OnceLock<BTreeMap<String, Value>> = OnceLock::new();

/// All registry entries as raw JSON values, keyed by chain slug.
///
/// Parsed from the embedded document on first call; later calls are a
/// pointer read. The embedded document is covered by unit tests, so a
/// parse failure here is a build defect, and panicking is deliberate.
pub fn raw_chain_metadata() -> &'static BTreeMap<String, Value> {
    REGISTRY.get_or_init(|| {
        serde_yaml::from_str(CHAINS_YAML).expect("embedded chain registry must parse as YAML")
    })
}

/// Look up one raw entry by chain slug.
pub fn chain_metadata(name: &str) -> Option<&'static Value> {
    raw_chain_metadata().get(name)
}

/// Look up one entry and deserialize it into the typed model.
///
/// # Errors
///
/// Returns `ChainMetaError::UnknownChain` if no entry has that slug, or
/// `ChainMetaError::Deserialization` if the entry does not fit the typed
/// model.
pub fn typed_chain_metadata(name: &str) -> Result<ChainMetadata, ChainMetaError> {
    let value = chain_metadata(name)
        .ok_or_else(|| ChainMetaError::UnknownChain(name.to_string()))?;
    Ok(serde_json::from_value(value.clone())?)
}

/// All chain slugs in the registry, in sorted order.
pub fn chain_names() -> Vec<&'static str> {
    raw_chain_metadata().keys().map(|k| k.as_str()).collect()
}

/// Number of entries in the registry.
pub fn chain_count() -> usize {
    raw_chain_metadata().len()
}

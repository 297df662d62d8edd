//! # chainmeta-core — Foundational Types for Chain Metadata
//!
//! This crate is the bedrock of the chainmeta workspace. It defines the
//! type-system primitives that every other crate builds on: the protocol
//! family taxonomy, validated identifier newtypes, and the typed metadata
//! model for describing a blockchain network.
//!
//! ## Key Design Principles
//!
//! 1. **Single `ProtocolType` enum.** One definition of the protocol family
//!    taxonomy, exhaustive `match` everywhere. The per-family validation
//!    rules (`chain_id_kind()`, `requires_bech32_config()`) live on the enum,
//!    so adding a family forces every consumer to handle it at compile time.
//!
//! 2. **Validated newtypes for domain primitives.** `ChainName` is a slug
//!    newtype with a validating constructor — malformed names are rejected
//!    at construction, not discovered downstream.
//!
//! 3. **Typed model mirrors the wire shape.** `ChainMetadata` and its
//!    sub-objects use camelCase wire names and `url::Url` for URL-bearing
//!    fields, so a successfully deserialized value already satisfies the
//!    primitive shape rules.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `chainmeta-*` crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod metadata;
pub mod name;
pub mod protocol;

// Re-export primary types for ergonomic imports.
pub use error::ChainMetaError;
pub use metadata::{BlockConfig, BlockExplorer, ChainId, ChainMetadata, NativeToken, RpcUrl};
pub use name::ChainName;
pub use protocol::{ChainIdKind, ProtocolType, ALL_PROTOCOLS};

//! # chainmeta-schema — Chain Metadata Validation
//!
//! Runtime validation of candidate chain metadata values against the
//! expected shape, including rules conditioned on the declared protocol
//! family.
//!
//! ## Validation Surface (`validate`)
//!
//! The [`validate`] module exposes [`ChainMetadataValidator`], which takes
//! any already-parsed JSON value and reports conformance. Key functions:
//!
//! - [`is_valid_chain_metadata`] — boolean go/no-go decision.
//! - [`validate_chain_metadata`] — structured result carrying an ordered
//!   list of field-path + reason violations.
//!
//! ## Engine Structure
//!
//! The engine is composed from small reusable pieces rather than one
//! monolithic check: field-level primitive validators (URL, slug pattern,
//! non-negative integer, positive number) are combined into per-object
//! schemas (RPC endpoint, block explorer, block config), which the
//! top-level validator assembles and refines per protocol family via the
//! extension points on [`chainmeta_core::ProtocolType`].
//!
//! ## Crate Policy
//!
//! - Depends only on `chainmeta-core` internally.
//! - Validation is pure and synchronous: no I/O, no shared state, no
//!   mutation of the candidate. Safe to call concurrently.
//! - A well-formed-but-invalid candidate is the normal negative outcome,
//!   reported with structured violations — never a panic.

mod field;
mod object;
pub mod validate;

pub use validate::{
    is_valid_chain_metadata, validate_chain_metadata, ChainMetadataValidator,
    SchemaValidationError, UnknownFieldPolicy, ValidationViolations, ValidatorOptions, Violation,
};

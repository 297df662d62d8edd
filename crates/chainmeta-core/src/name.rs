//! # Chain Name Slugs
//!
//! Defines `ChainName`, a validated newtype for the human-readable chain
//! slug that keys routing tables and registry lookups.
//!
//! Slug format: lowercase ASCII alphanumeric, starting with a letter —
//! no whitespace, no uppercase, no punctuation. Examples: `ethereum`,
//! `goerli`, `arbitrum`, `bsc`.
//!
//! Malformed names are **rejected at construction** — a `ChainName` in
//! hand is always a well-formed slug, so downstream code never re-checks.

use serde::{Deserialize, Serialize};

use crate::error::ChainMetaError;

/// Returns true if `s` is a well-formed chain slug.
///
/// Pattern: one lowercase ASCII letter followed by any number of lowercase
/// ASCII letters or digits.
pub fn is_valid_slug(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// A validated chain name slug.
///
/// # Construction
///
/// - [`ChainName::parse()`] — from a string, rejecting non-slug input.
/// - Deserialization goes through the same check via `try_from`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ChainName(String);

impl ChainName {
    /// Parse a chain name, enforcing the slug pattern.
    ///
    /// # Errors
    ///
    /// Returns `ChainMetaError::InvalidChainName` if the input contains
    /// uppercase letters, whitespace, punctuation, or is empty.
    pub fn parse(s: &str) -> Result<Self, ChainMetaError> {
        if is_valid_slug(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ChainMetaError::InvalidChainName(s.to_string()))
        }
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ChainName {
    type Error = ChainMetaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ChainName::parse(&s)
    }
}

impl AsRef<str> for ChainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_real_slugs() {
        for name in ["ethereum", "goerli", "bsc", "arbitrum", "base", "op1"] {
            assert!(ChainName::parse(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(ChainName::parse("").is_err());
    }

    #[test]
    fn test_rejects_whitespace_and_case() {
        for name in ["Invalid name", "Goerli", "eth mainnet", "eth-2", "eth_2"] {
            assert!(ChainName::parse(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(ChainName::parse("1inch").is_err());
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: Result<ChainName, _> = serde_json::from_str("\"goerli\"");
        assert_eq!(ok.unwrap().as_str(), "goerli");

        let bad: Result<ChainName, _> = serde_json::from_str("\"Goerli\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_slugs_round_trip(s in "[a-z][a-z0-9]{0,15}") {
            let name = ChainName::parse(&s).unwrap();
            prop_assert_eq!(name.as_str(), s);
        }

        #[test]
        fn prop_uppercase_anywhere_rejected(
            head in "[a-z]{0,8}",
            upper in "[A-Z]",
            tail in "[a-z0-9]{0,8}",
        ) {
            let s = format!("{head}{upper}{tail}");
            prop_assert!(ChainName::parse(&s).is_err());
        }
    }
}

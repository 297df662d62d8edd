//! # Protocol Family — Single Source of Truth
//!
//! Defines the `ProtocolType` enum with all supported protocol families.
//! This is the ONE definition used across the entire workspace. Every
//! `match` on `ProtocolType` must be exhaustive — adding a new family
//! forces every consumer to handle it at compile time.
//!
//! The per-family validation rules live here as methods, so the schema
//! layer never hard-codes family names: `chain_id_kind()` decides which
//! chain identifier representations a family permits, and
//! `requires_bech32_config()` decides whether the bech32 address prefix and
//! SLIP-0044 coin type must accompany the entry.
//!
//! # Families
//!
//! | Tag | Family | Chain identifier |
//! |-----|--------|------------------|
//! | `ethereum` | Account-model EVM chains | numeric |
//! | `sealevel` | Solana-style runtimes | numeric |
//! | `cosmos` | Cosmos-SDK chains | numeric or textual (e.g. `cosmoshub-4`) |
//! | `fuel` | FuelVM chains | numeric |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainMetaError;

/// The protocol family of a chain.
///
/// Drives the protocol-conditioned validation rules: which chain identifier
/// kinds are permitted and which extra fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    /// Account-model EVM chains (Ethereum mainnet, rollups, sidechains).
    Ethereum,
    /// Sealevel runtimes (Solana and derivatives).
    Sealevel,
    /// Cosmos-SDK chains (Tendermint consensus, bech32 addresses).
    Cosmos,
    /// FuelVM chains.
    Fuel,
}

/// All protocol families, in declaration order.
pub const ALL_PROTOCOLS: [ProtocolType; 4] = [
    ProtocolType::Ethereum,
    ProtocolType::Sealevel,
    ProtocolType::Cosmos,
    ProtocolType::Fuel,
];

/// Which chain identifier representations a protocol family permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainIdKind {
    /// The identifier must be a non-negative integer.
    Numeric,
    /// The identifier may be a non-negative integer or a non-empty string
    /// (for chains whose native identifier is textual, e.g. `cosmoshub-4`).
    NumericOrText,
}

impl ProtocolType {
    /// The chain identifier kind this family permits.
    pub fn chain_id_kind(&self) -> ChainIdKind {
        match self {
            ProtocolType::Ethereum => ChainIdKind::Numeric,
            ProtocolType::Sealevel => ChainIdKind::Numeric,
            ProtocolType::Cosmos => ChainIdKind::NumericOrText,
            ProtocolType::Fuel => ChainIdKind::Numeric,
        }
    }

    /// Whether entries of this family must carry `bech32Prefix` and
    /// `slip44`.
    pub fn requires_bech32_config(&self) -> bool {
        match self {
            ProtocolType::Ethereum => false,
            ProtocolType::Sealevel => false,
            ProtocolType::Cosmos => true,
            ProtocolType::Fuel => false,
        }
    }

    /// The lowercase wire tag for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::Ethereum => "ethereum",
            ProtocolType::Sealevel => "sealevel",
            ProtocolType::Cosmos => "cosmos",
            ProtocolType::Fuel => "fuel",
        }
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolType {
    type Err = ChainMetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(ProtocolType::Ethereum),
            "sealevel" => Ok(ProtocolType::Sealevel),
            "cosmos" => Ok(ProtocolType::Cosmos),
            "fuel" => Ok(ProtocolType::Fuel),
            other => Err(ChainMetaError::UnknownProtocol(other.to_string())),
        }
    }
}

//! # Typed Chain Metadata Model
//!
//! Strongly-typed representation of a chain metadata entry, mirroring the
//! camelCase wire shape consumed by the schema validator. A successfully
//! deserialized `ChainMetadata` already satisfies the primitive shape rules
//! (URLs parse, the name is a slug, the protocol tag is known); the
//! cross-field protocol rules are the schema layer's job.
//!
//! Unknown wire fields are tolerated on deserialization, matching the
//! validator's default unknown-field policy.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::name::ChainName;
use crate::protocol::ProtocolType;

/// A chain identifier — numeric for account-model chains, textual for
/// families whose native identifier is a string (e.g. `cosmoshub-4`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainId {
    /// Numeric chain identifier (EIP-155 style).
    Id(u64),
    /// Textual chain identifier.
    Name(String),
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainId::Id(id) => write!(f, "{id}"),
            ChainId::Name(name) => f.write_str(name),
        }
    }
}

/// One RPC endpoint for a chain, in priority order within `rpc_urls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcUrl {
    /// HTTP(S) endpoint. Must be an absolute URL.
    pub http: Url,
    /// Optional websocket endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<Url>,
}

/// A block explorer for a chain, with an optional query API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExplorer {
    /// Human-readable explorer name (e.g. `Etherscan`).
    pub name: String,
    /// Explorer web UI base URL.
    pub url: Url,
    /// Explorer API base URL, if the explorer exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<Url>,
}

/// Block timing and finality parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    /// Number of confirmations to treat a transaction as settled.
    pub confirmations: u64,
    /// Estimated seconds between blocks. Strictly positive.
    pub estimate_block_time: f64,
    /// Blocks to wait before considering a block reorg-safe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorg_period: Option<u64>,
}

/// The chain's native fee token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
    /// Token name (e.g. `Ether`).
    pub name: String,
    /// Ticker symbol (e.g. `ETH`).
    pub symbol: String,
    /// Decimal places, `1..=255`.
    pub decimals: u32,
}

/// A full chain metadata entry.
///
/// Required fields are the minimum a consumer needs to construct a client:
/// identifiers, name, protocol family, and at least one RPC endpoint.
/// `bech32_prefix` and `slip44` are required exactly when `protocol` is a
/// family for which [`ProtocolType::requires_bech32_config`] returns true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// Chain identifier; kind constrained by `protocol`.
    pub chain_id: ChainId,
    /// Identifier used by the cross-chain addressing layer. Independent of
    /// `chain_id`.
    pub domain_id: u64,
    /// Chain name slug.
    pub name: ChainName,
    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Protocol family.
    pub protocol: ProtocolType,
    /// RPC endpoints in priority/fallback order. Never empty.
    pub rpc_urls: Vec<RpcUrl>,
    /// Block explorers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorers: Option<Vec<BlockExplorer>>,
    /// Block timing parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<BlockConfig>,
    /// Native fee token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_token: Option<NativeToken>,
    /// bech32 address prefix. Required for Cosmos-family chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bech32_prefix: Option<String>,
    /// SLIP-0044 coin type. Required for Cosmos-family chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slip44: Option<u32>,
    /// Whether this is a testnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_testnet: Option<bool>,
}

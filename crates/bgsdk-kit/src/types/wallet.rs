//! Wallet and NFT balance payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chain a wallet or token lives on (the upstream calls this "secret type").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Chain {
    Avac,
    Bsc,
    Ethereum,
    Matic,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Avac => "AVAC",
            Chain::Bsc => "BSC",
            Chain::Ethereum => "ETHEREUM",
            Chain::Matic => "MATIC",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wallet as returned by the wallet endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub secret_type: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wallet collection. Bare-array responses are wrapped under `result`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletList {
    pub result: Vec<Wallet>,
}

/// Single-wallet responses arrive wrapped as `{"result": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletEnvelope {
    pub result: Wallet,
}

/// A typed attribute on a token (`property`, `stat` or `boost`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    /// Only meaningful for `stat` attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u64>,
}

/// A non-fungible token held by a wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftToken {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub contract: Option<serde_json::Value>,
    #[serde(default)]
    pub attributes: Vec<TokenAttribute>,
}

/// NFT collection. Bare-array responses are wrapped under `result`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NftList {
    pub result: Vec<NftToken>,
}

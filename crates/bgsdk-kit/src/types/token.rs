//! Token minting payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of a non-fungible mint call: one token of `type_id` per destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintNonFungible {
    pub type_id: String,
    pub destinations: Vec<String>,
}

/// Result of a non-fungible mint.
///
/// Token ids can exceed `u64`, so they are kept as decimal strings whether the
/// server sent them as JSON strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintResult {
    #[serde(default, deserialize_with = "ids_as_strings")]
    pub token_ids: Vec<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn ids_as_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|id| match id {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        })
        .collect())
}

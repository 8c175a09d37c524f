//! Marketplace offer and signature payloads.

use serde::{Deserialize, Serialize};

use super::Chain;

/// Reference to an NFT being offered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftRef {
    pub token_id: String,
    pub address: String,
    pub chain: Chain,
}

/// Body of a create-offer call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffer {
    #[serde(rename = "type")]
    pub offer_type: String,
    pub nft: NftRef,
    pub seller_address: String,
    /// Decimal price, kept as a string to avoid float rounding.
    pub price: String,
}

impl CreateOffer {
    /// A `SALE` offer for `nft` at `price`.
    pub fn sale(nft: NftRef, seller_address: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            offer_type: "SALE".to_string(),
            nft,
            seller_address: seller_address.into(),
            price: price.into(),
        }
    }
}

/// The NFT echoed back on an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferedNft {
    pub token_id: String,
    pub address: String,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub contract: Option<serde_json::Value>,
}

/// An offer as returned by the market API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferResultData {
    pub id: String,
    #[serde(default)]
    pub nft: Option<OfferedNft>,
    /// Payload the seller's wallet must sign to publish the offer.
    #[serde(default)]
    pub data_to_sign: Option<String>,
    #[serde(default)]
    pub signed: Option<serde_json::Value>,
}

/// Signature request nested in [`OfferSignature`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRequest {
    #[serde(rename = "type")]
    pub request_type: String,
    pub secret_type: Chain,
    pub wallet_id: String,
    pub data: String,
}

/// Body of a sign-offer call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OfferSignature {
    pub pincode: String,
    pub signature_request: SignatureRequest,
}

impl OfferSignature {
    /// Ask `wallet_id` to sign `data` as a `MESSAGE`.
    pub fn message(
        chain: Chain,
        wallet_id: impl Into<String>,
        data: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            pincode: pincode.into(),
            signature_request: SignatureRequest {
                request_type: "MESSAGE".to_string(),
                secret_type: chain,
                wallet_id: wallet_id.into(),
                data: data.into(),
            },
        }
    }
}

/// The signature produced for an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferSignatureData {
    #[serde(rename = "type", default)]
    pub signature_type: Option<String>,
    pub signature: String,
    #[serde(default)]
    pub r: Option<String>,
    #[serde(default)]
    pub s: Option<String>,
    #[serde(default)]
    pub v: Option<String>,
}

/// Signature responses arrive as `{"success": true, "result": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferSignatureEnvelope {
    pub result: OfferSignatureData,
}

/// Body of the submit-signature call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitSignature {
    pub signature: String,
}

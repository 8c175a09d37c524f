//! NFT marketplace calls: listing an NFT for sale and signing the listing.
//!
//! Selling is a three-step exchange:
//!
//! 1. [`Bgsdk::create_offer`] registers the offer and returns the data the
//!    seller's wallet must sign.
//! 2. [`Bgsdk::sign_offer`] has the wallet sign that data.
//! 3. [`Bgsdk::submit_offer_signature`] attaches the signature to the offer.

use crate::types::{
    CallDescription, Chain, CreateOffer, Domain, OfferResultData, OfferSignature,
    OfferSignatureData, OfferSignatureEnvelope, Outcome, SubmitSignature, Target,
};

use super::bgsdk::Bgsdk;

impl Bgsdk {
    /// Create a market offer.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bgsdk_kit::*;
    ///
    /// # async fn example(client: Bgsdk) -> Result<(), bgsdk_kit::Error> {
    /// let nft = NftRef {
    ///     token_id: "12".into(),
    ///     address: "0xcontract".into(),
    ///     chain: Chain::Matic,
    /// };
    /// let offer = client
    ///     .create_offer(&CreateOffer::sale(nft, "0xseller", "1.5"))
    ///     .await
    ///     .into_result()?;
    /// println!("sign {:?}", offer.data_to_sign);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_offer(&self, offer: &CreateOffer) -> Outcome<OfferResultData> {
        let call = CallDescription::post(Target::route(Domain::Market, "/offers"))
            .label("creating an offer");
        self.send_json(call, offer).await
    }

    /// Fetch an offer by id.
    pub async fn offer(&self, offer_id: &str) -> Outcome<OfferResultData> {
        let call = CallDescription::get(Target::route(
            Domain::Market,
            format!("/offers/{offer_id}"),
        ))
        .label("fetching an offer");
        self.call(call).await
    }

    /// Sign offer data with a custodial wallet.
    pub async fn sign_offer(&self, signature: &OfferSignature) -> Outcome<OfferSignatureData> {
        let call = CallDescription::post(Target::route(Domain::Api, "/api/signatures"))
            .label("signing an offer");
        self.send_json::<OfferSignatureEnvelope, _>(call, signature)
            .await
            .map(|envelope| envelope.result)
    }

    /// Shorthand for [`sign_offer`](Self::sign_offer) with a `MESSAGE` request.
    pub async fn sign_offer_data(
        &self,
        chain: Chain,
        wallet_id: &str,
        data: &str,
        pincode: &str,
    ) -> Outcome<OfferSignatureData> {
        self.sign_offer(&OfferSignature::message(chain, wallet_id, data, pincode))
            .await
    }

    /// Attach a signature to an offer.
    pub async fn submit_offer_signature(
        &self,
        offer_id: &str,
        signature: impl Into<String>,
    ) -> Outcome<OfferResultData> {
        let call = CallDescription::patch(Target::route(
            Domain::Market,
            format!("/offers/{offer_id}/signature"),
        ))
        .label("submitting an offer signature");
        let body = SubmitSignature {
            signature: signature.into(),
        };
        self.send_json(call, &body).await
    }
}

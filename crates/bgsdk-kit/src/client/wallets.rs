//! Wallet and NFT inventory calls.

use crate::types::{
    CallDescription, Chain, Domain, NftList, Outcome, ResponseShape, Target, Wallet,
    WalletEnvelope, WalletList,
};

use super::bgsdk::Bgsdk;

impl Bgsdk {
    /// List the wallets of the authenticated user.
    ///
    /// The endpoint answers with either a bare array or a `{"result": [...]}`
    /// object; both decode into [`WalletList`].
    pub async fn wallets(&self) -> Outcome<WalletList> {
        let call = CallDescription::get(Target::route(Domain::Api, "/api/wallets"))
            .shape(ResponseShape::wrap_array("result"))
            .label("listing wallets");
        self.call(call).await
    }

    /// Fetch one wallet by id or address.
    pub async fn wallet(&self, wallet: &str) -> Outcome<Wallet> {
        let call = CallDescription::get(Target::route(
            Domain::Api,
            format!("/api/wallets/{wallet}"),
        ))
        .label("fetching a wallet");
        self.call::<WalletEnvelope>(call)
            .await
            .map(|envelope| envelope.result)
    }

    /// List the NFTs held by `address` on `chain`, optionally limited to the
    /// given contract addresses.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bgsdk_kit::*;
    ///
    /// # async fn example(client: Bgsdk) {
    /// let outcome = client.nfts(Chain::Matic, "0xwallet", &["0xcontract"]).await;
    /// for token in outcome.payload().map(|l| l.result.as_slice()).unwrap_or_default() {
    ///     println!("{} {:?}", token.id, token.name);
    /// }
    /// # }
    /// ```
    pub async fn nfts<S: AsRef<str>>(
        &self,
        chain: Chain,
        address: &str,
        contract_addresses: &[S],
    ) -> Outcome<NftList> {
        let mut call = CallDescription::get(Target::route(
            Domain::Api,
            format!("/api/wallets/{chain}/{address}/nonfungibles"),
        ));
        for contract in contract_addresses {
            call = call.query("contract-addresses", contract.as_ref());
        }
        let call = call
            .shape(ResponseShape::wrap_array("result"))
            .label("listing NFTs");
        self.call(call).await
    }
}

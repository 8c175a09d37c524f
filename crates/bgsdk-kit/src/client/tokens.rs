//! Privileged token calls against the configured app's contracts.

use crate::types::{CallDescription, MintNonFungible, MintResult, Outcome, ResponseShape, Target};

use super::bgsdk::Bgsdk;

impl Bgsdk {
    /// Mint one non-fungible token of `type_id` to each destination.
    ///
    /// Needs an app id on the client. The endpoint answers with a
    /// one-element array; its single element is returned.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bgsdk_kit::*;
    ///
    /// # async fn example() -> Result<(), bgsdk_kit::Error> {
    /// let client = Bgsdk::staging()
    ///     .app_id("my-app")
    ///     .identity(AccessToken::bearer("service-token"))
    ///     .build()?;
    ///
    /// let minted = client
    ///     .mint_non_fungible("42", "7", &["0xplayer"])
    ///     .await
    ///     .into_result()?;
    /// println!("minted {:?}", minted.token_ids);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn mint_non_fungible<S: AsRef<str>>(
        &self,
        contract_id: &str,
        type_id: &str,
        destinations: &[S],
    ) -> Outcome<MintResult> {
        let body = MintNonFungible {
            type_id: type_id.to_string(),
            destinations: destinations.iter().map(|d| d.as_ref().to_string()).collect(),
        };
        let call = CallDescription::post(Target::app_contracts(format!(
            "/{contract_id}/tokens/non-fungible"
        )))
        .shape(ResponseShape::SingleElement)
        .label("minting a non-fungible token");
        self.send_json(call, &body).await
    }
}

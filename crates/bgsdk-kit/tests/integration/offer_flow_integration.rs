//! Mint an NFT, list it on the market and sign the listing, end to end.

use bgsdk_kit::*;
use mockito::Matcher;
use serde_json::json;

use crate::common::{TOKEN, client};

#[tokio::test]
async fn test_mint_then_sell() {
    let mut server = mockito::Server::new_async().await;
    let auth = format!("Bearer {TOKEN}");

    let mint = server
        .mock("POST", "/api/apps/app-1/contracts/42/tokens/non-fungible")
        .match_header("authorization", auth.as_str())
        .match_header("content-type", JSON_CONTENT_TYPE)
        .match_body(Matcher::Json(json!({
            "typeId": "7",
            "destinations": ["0xseller"]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"tokenIds":[1001],"transactionHash":"0xmint","destinations":["0xseller"]}]"#)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/offers")
        .match_header("authorization", auth.as_str())
        .match_body(Matcher::PartialJson(json!({
            "type": "SALE",
            "nft": {"tokenId": "1001", "address": "0xcontract", "chain": "MATIC"},
            "sellerAddress": "0xseller"
        })))
        .with_status(202)
        .with_body(r#"{"id":"abc123","dataToSign":"0xdead"}"#)
        .create_async()
        .await;

    let sign = server
        .mock("POST", "/api/signatures")
        .match_body(Matcher::PartialJson(json!({
            "pincode": "1234",
            "signatureRequest": {"type": "MESSAGE", "data": "0xdead", "walletId": "wallet-1"}
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"result":{"type":"MESSAGE_SIGNATURE","signature":"0xsig"}}"#)
        .create_async()
        .await;

    let submit = server
        .mock("PATCH", "/offers/abc123/signature")
        .match_body(Matcher::Json(json!({"signature": "0xsig"})))
        .with_status(200)
        .with_body(r#"{"id":"abc123","signed":true}"#)
        .create_async()
        .await;

    let client = client(&server);

    let minted = client
        .mint_non_fungible("42", "7", &["0xseller"])
        .await
        .into_result()
        .unwrap();
    assert_eq!(minted.token_ids, vec!["1001"]);

    let nft = NftRef {
        token_id: minted.token_ids[0].clone(),
        address: "0xcontract".to_string(),
        chain: Chain::Matic,
    };
    let offer = client
        .create_offer(&CreateOffer::sale(nft, "0xseller", "2.5"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(offer.id, "abc123");
    let data = offer.data_to_sign.unwrap();

    let signature = client
        .sign_offer_data(Chain::Matic, "wallet-1", &data, "1234")
        .await
        .into_result()
        .unwrap();
    assert_eq!(signature.signature, "0xsig");

    let submitted = client
        .submit_offer_signature(&offer.id, signature.signature)
        .await;
    assert_eq!(submitted.status_code(), Some(200));
    assert_eq!(
        submitted.payload().and_then(|o| o.signed.clone()),
        Some(json!(true))
    );

    mint.assert_async().await;
    create.assert_async().await;
    sign.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_create_offer_rejected() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/offers")
        .with_status(400)
        .with_body(r#"{"errors":[{"code":"offer.price.invalid"}]}"#)
        .create_async()
        .await;

    let nft = NftRef {
        token_id: "1".to_string(),
        address: "0xcontract".to_string(),
        chain: Chain::Bsc,
    };
    let outcome = client(&server)
        .create_offer(&CreateOffer::sale(nft, "0xseller", "-1"))
        .await;

    assert_eq!(outcome.kind(), OutcomeKind::HttpFailure);
    assert_eq!(outcome.status_code(), Some(400));
    assert!(outcome.raw_body().unwrap().contains("offer.price.invalid"));

    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(
        err.to_string(),
        "Error: a HTTP error occurred while creating an offer (HTTP 400)."
    );

    mock.assert_async().await;
}

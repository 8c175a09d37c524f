//! Wallet and NFT inventory calls against a mock server.

use bgsdk_kit::*;
use mockito::Matcher;

use crate::common::{TOKEN, client};

const WALLETS: &str = r#"[
    {"id":"w-1","address":"0xaaa","walletType":"WHITE_LABEL","secretType":"MATIC"},
    {"id":"w-2","address":"0xbbb","walletType":"WHITE_LABEL","secretType":"BSC"}
]"#;

#[tokio::test]
async fn test_wallets_bare_array_and_envelope_agree() {
    let mut server = mockito::Server::new_async().await;
    let auth = format!("Bearer {TOKEN}");

    let bare = server
        .mock("GET", "/api/wallets")
        .match_header("authorization", auth.as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(WALLETS)
        .create_async()
        .await;
    let from_bare = client(&server).wallets().await.into_result().unwrap();
    bare.assert_async().await;

    let mut server = mockito::Server::new_async().await;
    let wrapped = server
        .mock("GET", "/api/wallets")
        .with_status(200)
        .with_body(format!(r#"{{"success":true,"result":{WALLETS}}}"#))
        .create_async()
        .await;
    let from_wrapped = client(&server).wallets().await.into_result().unwrap();
    wrapped.assert_async().await;

    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_bare.result.len(), 2);
    assert_eq!(from_bare.result[1].secret_type.as_deref(), Some("BSC"));
}

#[tokio::test]
async fn test_wallets_request_has_no_body_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let list = client(&server).wallets().await.into_result().unwrap();

    assert!(list.result.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_nfts_filtered_by_contract() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets/MATIC/0xaaa/nonfungibles")
        .match_query(Matcher::Exact(
            "contract-addresses=0xc1&contract-addresses=0xc2".to_string(),
        ))
        .with_status(200)
        .with_body(
            r#"[{"id":"5","name":"Shield","imageUrl":"https://img/5.png",
                 "attributes":[{"name":"rarity","type":"property","value":"epic"}]}]"#,
        )
        .create_async()
        .await;

    let list = client(&server)
        .nfts(Chain::Matic, "0xaaa", &["0xc1", "0xc2"])
        .await
        .into_result()
        .unwrap();

    assert_eq!(list.result.len(), 1);
    let token = &list.result[0];
    assert_eq!(token.id, "5");
    assert_eq!(token.image_url.as_deref(), Some("https://img/5.png"));
    assert_eq!(token.attributes[0].kind, "property");
    assert_eq!(token.attributes[0].max_value, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_per_call_token_override() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/apps")
        .match_header("authorization", "Service svc-token")
        .with_status(200)
        .with_body(r#"{"result":[]}"#)
        .create_async()
        .await;

    let call = CallDescription::get(Target::route(Domain::Business, "/api/apps"))
        .token(AccessToken::new("Service", "svc-token"))
        .label("listing apps");
    let outcome: Outcome<serde_json::Value> = client(&server).call(call).await;

    assert!(outcome.is_success());
    mock.assert_async().await;
}

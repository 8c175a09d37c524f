//! Each failure class surfaces as its own outcome over a real HTTP stack.

use bgsdk_kit::*;

use crate::common::{TOKEN, client, dead_url, init_tracing, truncated_body_url};

// =============================================================================
// Precondition failures
// =============================================================================

#[tokio::test]
async fn test_no_identity_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets")
        .expect(0)
        .create_async()
        .await;

    let client = Bgsdk::custom(server.url()).build().unwrap();
    let outcome = client.wallets().await;

    assert_eq!(outcome.kind(), OutcomeKind::PreconditionFailure);
    assert!(outcome.message().unwrap().contains("Identity"));
    assert!(outcome.into_result().unwrap_err().is_precondition());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unconfigured_client_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets")
        .expect(0)
        .create_async()
        .await;

    let client = Bgsdk::custom(server.url())
        .identity(AccessToken::bearer(TOKEN))
        .unconfigured()
        .build()
        .unwrap();
    let outcome = client.wallets().await;

    assert!(matches!(
        &outcome,
        Outcome::PreconditionFailure { precondition, .. } if precondition == "client-configured"
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unconfigured_client_reaches_absolute_urls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"UP"}"#)
        .create_async()
        .await;

    let client = Bgsdk::staging()
        .identity(AccessToken::bearer(TOKEN))
        .unconfigured()
        .build()
        .unwrap();
    let call = CallDescription::get(Target::url(format!("{}/health", server.url())));
    let outcome: Outcome<serde_json::Value> = client.call(call).await;

    assert_eq!(outcome.payload().unwrap()["status"], "UP");
    mock.assert_async().await;
}

// =============================================================================
// Network failures
// =============================================================================

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    init_tracing();
    let client = Bgsdk::custom(dead_url())
        .identity(AccessToken::bearer(TOKEN))
        .build()
        .unwrap();

    let outcome = client.wallets().await;

    assert_eq!(outcome.kind(), OutcomeKind::NetworkFailure);
    assert_eq!(outcome.status_code(), None);
    assert_eq!(
        outcome.message(),
        Some("Error: a network error occurred while listing wallets.")
    );
}

// =============================================================================
// HTTP failures
// =============================================================================

#[tokio::test]
async fn test_error_statuses_keep_code_and_body() {
    for status in [400usize, 401, 403, 404, 409, 500, 502] {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/wallets/0xabc")
            .with_status(status)
            .with_body(format!(r#"{{"code":{status}}}"#))
            .create_async()
            .await;

        let outcome = client(&server).wallet("0xabc").await;

        assert_eq!(outcome.kind(), OutcomeKind::HttpFailure, "status {status}");
        assert_eq!(outcome.status_code(), Some(status as u16));
        assert_eq!(outcome.raw_body(), Some(format!(r#"{{"code":{status}}}"#).as_str()));

        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_truncated_error_body_is_http_failure() {
    init_tracing();
    let client = Bgsdk::custom(truncated_body_url("HTTP/1.1 500 Internal Server Error"))
        .identity(AccessToken::bearer(TOKEN))
        .build()
        .unwrap();

    let outcome = client.wallets().await;

    assert_eq!(outcome.kind(), OutcomeKind::HttpFailure);
    assert_eq!(outcome.status_code(), Some(500));
    assert_eq!(outcome.raw_body(), Some(""));
}

#[tokio::test]
async fn test_truncated_success_body_is_network_failure() {
    init_tracing();
    let client = Bgsdk::custom(truncated_body_url("HTTP/1.1 200 OK"))
        .identity(AccessToken::bearer(TOKEN))
        .build()
        .unwrap();

    let outcome = client.wallets().await;

    assert_eq!(outcome.kind(), OutcomeKind::NetworkFailure);
    assert_eq!(outcome.status_code(), None);
}

// =============================================================================
// Malformed payloads
// =============================================================================

#[tokio::test]
async fn test_success_status_with_wrong_shape() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets/0xabc")
        .with_status(200)
        .with_body(r#"{"success":true,"result":"not a wallet"}"#)
        .create_async()
        .await;

    let outcome = client(&server).wallet("0xabc").await;

    assert_eq!(outcome.kind(), OutcomeKind::MalformedPayload);
    assert_eq!(outcome.status_code(), Some(200));
    assert!(
        outcome
            .message()
            .unwrap()
            .starts_with("An error occurred while processing JSON results")
    );
    assert_eq!(
        outcome.raw_body(),
        Some(r#"{"success":true,"result":"not a wallet"}"#)
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_html_error_page_on_success_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wallets")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Maintenance</body></html>")
        .create_async()
        .await;

    let outcome = client(&server).wallets().await;

    assert_eq!(outcome.kind(), OutcomeKind::MalformedPayload);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_content_decodes_as_unit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/wallets/w-1/description")
        .with_status(204)
        .create_async()
        .await;

    let call = CallDescription::put(Target::route(Domain::Api, "/api/wallets/w-1/description"))
        .raw_json(r#"{"description":"main"}"#)
        .label("renaming a wallet");
    let outcome: Outcome<()> = client(&server).call(call).await;

    assert_eq!(outcome, Outcome::Success { payload: (), status: 204 });
    mock.assert_async().await;
}

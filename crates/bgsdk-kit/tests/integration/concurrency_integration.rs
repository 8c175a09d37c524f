//! Many calls in flight on one client.

use bgsdk_kit::*;
use futures::future::join_all;

use crate::common::client;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_get_independent_outcomes() {
    let mut server = mockito::Server::new_async().await;

    let mut mocks = Vec::new();
    for i in 0..10 {
        let mock = if i % 2 == 0 {
            server
                .mock("GET", format!("/api/wallets/w-{i}").as_str())
                .with_status(200)
                .with_body(format!(
                    r#"{{"result":{{"id":"w-{i}","address":"0x{i}"}}}}"#
                ))
        } else {
            server
                .mock("GET", format!("/api/wallets/w-{i}").as_str())
                .with_status(404)
                .with_body("not found")
        };
        mocks.push(mock.create_async().await);
    }

    let client = client(&server);
    let outcomes = join_all((0..10).map(|i| {
        let client = client.clone();
        async move { (i, client.wallet(&format!("w-{i}")).await) }
    }))
    .await;

    for (i, outcome) in outcomes {
        if i % 2 == 0 {
            let wallet = outcome.into_payload().unwrap();
            assert_eq!(wallet.id, format!("w-{i}"));
            assert_eq!(wallet.address, format!("0x{i}"));
        } else {
            assert_eq!(outcome.kind(), OutcomeKind::HttpFailure);
            assert_eq!(outcome.status_code(), Some(404));
        }
    }

    for mock in mocks {
        mock.assert_async().await;
    }
}

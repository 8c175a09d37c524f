//! Shared helpers for the integration tests.

use bgsdk_kit::*;
use tracing_subscriber::EnvFilter;

pub const TOKEN: &str = "integration-token";

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client pointed at `server` with a bearer identity and an app id.
pub fn client(server: &mockito::ServerGuard) -> Bgsdk {
    init_tracing();
    Bgsdk::custom(server.url())
        .app_id("app-1")
        .identity(AccessToken::bearer(TOKEN))
        .build()
        .unwrap()
}

/// A loopback URL nothing listens on.
pub fn dead_url() -> String {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    format!("http://{addr}")
}

/// A loopback server that answers one request with `status_line` and a body
/// shorter than its declared `Content-Length`.
pub fn truncated_body_url(status_line: &'static str) -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let response =
            format!("{status_line}\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort");
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}")
}

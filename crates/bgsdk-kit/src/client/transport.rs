//! HTTP transport seam.
//!
//! The executor describes each exchange as plain data ([`HttpRequest`] in,
//! [`HttpResponse`] out) and hands it to a [`Transport`]. The default
//! transport is reqwest; tests plug in a recording transport instead.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::TransportError;
use crate::types::Method;

/// An outbound request as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value with a case-insensitively matching name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A completed exchange as plain data. Any status code, including 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> = BoxFuture<'a, Result<HttpResponse, TransportError>>;

/// Performs one HTTP exchange.
///
/// Implementations must return `Ok` for every response that arrived,
/// whatever its status, and `Err` only when no response was received.
/// A non-2xx response whose body cannot be read is still `Ok`, with an empty
/// body.
///
/// # Example
///
/// ```rust
/// use bgsdk_kit::{HttpRequest, HttpResponse, Transport, TransportFuture};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(&self, _request: HttpRequest) -> TransportFuture<'_> {
///         Box::pin(async { Ok(HttpResponse::new(200, "{}")) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        (**self).send(request)
    }
}

// ============================================================================
// ReqwestTransport
// ============================================================================

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, proxies).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();

            // An error body that cannot be read is reported as empty.
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) if !(200..300).contains(&status) => {
                    tracing::warn!(status, error = %err, "failed to read error response body");
                    String::new()
                }
                Err(err) => return Err(err.into()),
            };

            Ok(HttpResponse { status, body })
        })
    }
}

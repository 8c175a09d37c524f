//! An async client core for the Arkane/Venly blockchain game API.
//!
//! **bgsdk-kit** turns one outbound call into one typed [`Outcome`]: it
//! checks preconditions, attaches credentials, sends the request, and sorts
//! whatever comes back into success, malformed payload, network failure,
//! HTTP failure or precondition failure. It never panics on bad input from
//! the server and never blocks the caller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bgsdk_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bgsdk_kit::Error> {
//!     // Configure once
//!     let client = Bgsdk::staging()
//!         .identity(AccessToken::bearer("eyJhbGciOi..."))
//!         .build()?;
//!
//!     // Every call returns an Outcome
//!     let outcome = client.wallets().await;
//!     match &outcome {
//!         Outcome::Success { payload, .. } => println!("{} wallets", payload.result.len()),
//!         other => eprintln!("{}: {:?}", other.kind(), other.message()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Failures are values**: every call yields exactly one [`Outcome`] variant
//! 2. **Configure once**: settings and identity are injected at construction
//! 3. **Nothing sent on a failed precondition**: checks run before any I/O
//! 4. **Per-call response shapes**: bare-array bodies are wrapped only where a
//!    call asks for it ([`ResponseShape`])
//!
//! # Custom calls
//!
//! Endpoints without a typed method go through [`Bgsdk::call`]:
//!
//! ```rust,no_run
//! use bgsdk_kit::*;
//!
//! # async fn example(client: Bgsdk) {
//! let call = CallDescription::get(Target::route(Domain::Business, "/api/apps"))
//!     .label("listing apps");
//! let apps: Outcome<serde_json::Value> = client.call(call).await;
//! # }
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Access tokens are never logged.

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{Error, TransportError};
pub use types::*;

// Re-export client types
pub use client::{
    Bgsdk, BgsdkBuilder, DEFAULT_TIMEOUT, DomainTarget, Endpoints, HttpRequest, HttpResponse,
    JSON_CONTENT_TYPE, Precondition, RequestExecutor, ReqwestTransport, Settings, Transport,
    TransportFuture, classify, classify_shaped, json, normalize,
};

//! Client module for the blockchain game API.
//!
//! This module provides the core client infrastructure:
//!
//! - [`Bgsdk`] - The main client, the single entry point for typed calls
//! - [`BgsdkBuilder`] - Fluent builder for configuring the client
//! - [`RequestExecutor`] - Runs a [`CallDescription`](crate::CallDescription)
//!   and returns an [`Outcome`](crate::Outcome)
//!
//! # Transports
//!
//! The executor never talks HTTP directly; it hands plain [`HttpRequest`]
//! values to a [`Transport`]:
//!
//! | Transport | Use Case |
//! |-----------|----------|
//! | [`ReqwestTransport`] | Default; shared connection pool, configurable timeout |
//! | your own `impl Transport` | Tests, proxies, recording/replay |
//!
//! # Configuration
//!
//! - [`Settings`] - Environment, endpoint table and app id
//! - [`Endpoints`] / [`DomainTarget`] - Per-environment base URLs
//! - [`Precondition`] - Checks run before anything is sent
//!
//! # Response handling
//!
//! - [`classify`] / [`classify_shaped`] - Turn a 2xx body into an outcome
//! - [`normalize`] - Reshape bare arrays before decoding

mod bgsdk;
mod classifier;
mod endpoints;
mod executor;
mod market;
mod precondition;
mod tokens;
mod transport;
mod wallets;

pub use bgsdk::{Bgsdk, BgsdkBuilder};
pub use classifier::{classify, classify_shaped, json, normalize};
pub use endpoints::{DomainTarget, Endpoints, Settings};
pub use executor::{JSON_CONTENT_TYPE, RequestExecutor};
pub use precondition::Precondition;
pub use transport::{
    DEFAULT_TIMEOUT, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFuture,
};

//! Error types for bgsdk-kit.
//!
//! Calls made through the [`RequestExecutor`](crate::RequestExecutor) never
//! fail with these types directly: they produce an [`Outcome`](crate::Outcome),
//! a plain value with one variant per failure class. [`Error`](enum@Error) is
//! what you get when you opt into `?`-style handling via
//! [`Outcome::into_result`](crate::Outcome::into_result), or when building a
//! client or a call fails before anything is sent.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) - Main error type
//!   - [`TransportError`] - What the HTTP transport reports when no response
//!     arrived at all (DNS, connect, timeout)
//!
//! # Example
//!
//! ```rust,no_run
//! use bgsdk_kit::*;
//!
//! # async fn example() -> Result<(), bgsdk_kit::Error> {
//! let client = Bgsdk::staging()
//!     .identity(AccessToken::bearer("eyJhbGciOi..."))
//!     .build()?;
//!
//! match client.wallets().await.into_result() {
//!     Ok(list) => println!("{} wallets", list.result.len()),
//!     Err(Error::Http { status: 401, .. }) => println!("token expired"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

// ============================================================================
// Transport Errors
// ============================================================================

/// Failure reported by a [`Transport`](crate::Transport) when the exchange
/// did not produce an HTTP response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns true if the exchange timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for bgsdk-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    // ─── Call outcomes ───
    #[error("Precondition '{name}' failed: {message}")]
    Precondition { name: String, message: String },

    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{message}")]
    MalformedPayload {
        status: u16,
        message: String,
        raw_body: String,
    },
}

impl Error {
    /// The HTTP status code attached to this error, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } | Error::MalformedPayload { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error came from a failed precondition (no I/O was attempted).
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition { .. })
    }
}

//! The result of one call.

use std::fmt;

use crate::error::Error;

/// Which variant an [`Outcome`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    MalformedPayload,
    NetworkFailure,
    HttpFailure,
    PreconditionFailure,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::MalformedPayload => "malformed-payload",
            OutcomeKind::NetworkFailure => "network-failure",
            OutcomeKind::HttpFailure => "http-failure",
            OutcomeKind::PreconditionFailure => "precondition-failure",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged result of a single call. Exactly one variant is produced per call
/// and every non-success variant carries a non-empty, human-readable message.
///
/// Failures are ordinary values here; use [`Outcome::into_result`] to switch
/// to `Result` and `?`.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// 2xx response whose body decoded into `T`.
    Success { payload: T, status: u16 },

    /// 2xx response whose body did not match the expected shape.
    MalformedPayload {
        raw_body: String,
        error: String,
        status: u16,
    },

    /// No response arrived (DNS, connect, timeout).
    NetworkFailure { message: String },

    /// The server answered with a non-2xx status.
    HttpFailure {
        status: u16,
        message: String,
        raw_body: String,
    },

    /// A precondition failed; nothing was sent.
    PreconditionFailure { precondition: String, message: String },
}

impl<T> Outcome<T> {
    /// True for every variant except `Success`.
    pub fn has_error(&self) -> bool {
        !matches!(self, Outcome::Success { .. })
    }

    pub fn is_success(&self) -> bool {
        !self.has_error()
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success { .. } => OutcomeKind::Success,
            Outcome::MalformedPayload { .. } => OutcomeKind::MalformedPayload,
            Outcome::NetworkFailure { .. } => OutcomeKind::NetworkFailure,
            Outcome::HttpFailure { .. } => OutcomeKind::HttpFailure,
            Outcome::PreconditionFailure { .. } => OutcomeKind::PreconditionFailure,
        }
    }

    /// Status code of the response, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. }
            | Outcome::MalformedPayload { status, .. }
            | Outcome::HttpFailure { status, .. } => Some(*status),
            Outcome::NetworkFailure { .. } | Outcome::PreconditionFailure { .. } => None,
        }
    }

    /// The failure message. `None` only for `Success`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::MalformedPayload { error, .. } => Some(error),
            Outcome::NetworkFailure { message }
            | Outcome::HttpFailure { message, .. }
            | Outcome::PreconditionFailure { message, .. } => Some(message),
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Outcome::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Outcome::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The response body as received, for malformed payloads and HTTP failures.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Outcome::MalformedPayload { raw_body, .. } | Outcome::HttpFailure { raw_body, .. } => {
                Some(raw_body)
            }
            _ => None,
        }
    }

    /// Transform the payload, leaving failures untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success { payload, status } => Outcome::Success {
                payload: f(payload),
                status,
            },
            Outcome::MalformedPayload {
                raw_body,
                error,
                status,
            } => Outcome::MalformedPayload {
                raw_body,
                error,
                status,
            },
            Outcome::NetworkFailure { message } => Outcome::NetworkFailure { message },
            Outcome::HttpFailure {
                status,
                message,
                raw_body,
            } => Outcome::HttpFailure {
                status,
                message,
                raw_body,
            },
            Outcome::PreconditionFailure {
                precondition,
                message,
            } => Outcome::PreconditionFailure {
                precondition,
                message,
            },
        }
    }

    /// Convert into a `Result`, mapping each failure variant onto [`Error`].
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Outcome::Success { payload, .. } => Ok(payload),
            Outcome::MalformedPayload {
                raw_body,
                error,
                status,
            } => Err(Error::MalformedPayload {
                status,
                message: error,
                raw_body,
            }),
            Outcome::NetworkFailure { message } => Err(Error::Network(message)),
            Outcome::HttpFailure {
                status, message, ..
            } => Err(Error::Http { status, message }),
            Outcome::PreconditionFailure {
                precondition,
                message,
            } => Err(Error::Precondition {
                name: precondition,
                message,
            }),
        }
    }
}

//! Authentication token supplied by the host's session layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An OAuth-style access token: a scheme (`token_type`) plus the opaque value.
///
/// The field names match the token endpoint's JSON response, so a host that
/// performs the login exchange itself can deserialize straight into this type.
///
/// The `Debug` implementation never prints the token value.
///
/// # Example
///
/// ```
/// use bgsdk_kit::AccessToken;
///
/// let token = AccessToken::bearer("abc");
/// assert_eq!(token.authorization_value(), "Bearer abc");
/// assert!(!format!("{:?}", token).contains("abc"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token_type: String,
    pub access_token: String,
}

impl AccessToken {
    /// Create a token with an explicit scheme.
    pub fn new(token_type: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            access_token: access_token.into(),
        }
    }

    /// Create a `Bearer` token.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::new("Bearer", access_token)
    }

    /// The value of the `Authorization` header: `"<token_type> <access_token>"`.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

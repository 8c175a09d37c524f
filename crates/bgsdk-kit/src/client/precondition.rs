//! Pre-flight checks gating whether a call touches the network.

use crate::types::AccessToken;

use super::endpoints::Settings;

/// A named check run before a call is sent.
///
/// Checks run in the order they were declared on the
/// [`CallDescription`](crate::CallDescription); the first failure ends the
/// call with [`Outcome::PreconditionFailure`](crate::Outcome::PreconditionFailure)
/// and no request is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// Client settings were supplied at construction.
    ClientConfigured,
    /// An access token is available (per-call override or client identity).
    UserAuthenticated,
    /// The settings carry an app id.
    AppConfigured,
    /// A caller-evaluated check.
    Custom {
        name: String,
        message: String,
        satisfied: bool,
    },
}

impl Precondition {
    /// A caller-evaluated check; `message` is reported when `satisfied` is false.
    pub fn custom(name: impl Into<String>, message: impl Into<String>, satisfied: bool) -> Self {
        Precondition::Custom {
            name: name.into(),
            message: message.into(),
            satisfied,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Precondition::ClientConfigured => "client-configured",
            Precondition::UserAuthenticated => "user-authenticated",
            Precondition::AppConfigured => "app-configured",
            Precondition::Custom { name, .. } => name,
        }
    }

    /// Evaluate against the injected configuration. `operation` names the
    /// call in the failure message.
    pub(crate) fn check(
        &self,
        settings: Option<&Settings>,
        token: Option<&AccessToken>,
        operation: &str,
    ) -> Result<(), String> {
        match self {
            Precondition::ClientConfigured => match settings {
                Some(_) => Ok(()),
                None => Err(format!(
                    "Attempted {operation} with no client settings applied. \
                     Build the client with Bgsdk::staging(), Bgsdk::production() or Bgsdk::custom()."
                )),
            },
            Precondition::UserAuthenticated => match token {
                Some(_) => Ok(()),
                None => Err(format!(
                    "Identity required, no access token provided. \
                     Set an identity on the client before {operation}."
                )),
            },
            Precondition::AppConfigured => match settings.and_then(|s| s.app_id.as_ref()) {
                Some(_) => Ok(()),
                None => Err(format!(
                    "An app id is required for {operation}. Call .app_id() on the builder."
                )),
            },
            Precondition::Custom {
                name,
                message,
                satisfied,
            } => {
                if *satisfied {
                    Ok(())
                } else if message.is_empty() {
                    Err(format!("Precondition '{name}' not met for {operation}."))
                } else {
                    Err(message.clone())
                }
            }
        }
    }
}

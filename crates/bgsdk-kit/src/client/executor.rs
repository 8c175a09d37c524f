//! The request executor: call description in, outcome out.

use std::fmt::Display;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::types::{AccessToken, CallDescription, Outcome, Target};

use super::classifier::{classify_shaped, json};
use super::endpoints::Settings;
use super::precondition::Precondition;
use super::transport::{HttpRequest, Transport};

/// Content type sent with every bodied request.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Runs [`CallDescription`]s against a [`Transport`].
///
/// Settings and identity are fixed at construction and only read. The
/// executor holds no per-call state, so one instance can serve any number of
/// concurrent calls; each produces its own [`Outcome`].
///
/// Per call:
///
/// 1. Preconditions run in declaration order. The first failure returns
///    [`Outcome::PreconditionFailure`] without sending anything.
/// 2. The request is sent with `Authorization: <token_type> <access_token>`
///    and, when there is a body, `Content-Type: application/json;charset=UTF-8`.
/// 3. No response → [`Outcome::NetworkFailure`]. Non-2xx →
///    [`Outcome::HttpFailure`]. 2xx → the response classifier.
///
/// There is no retry; callers re-invoke if they want one.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    settings: Option<Arc<Settings>>,
    identity: Option<AccessToken>,
}

impl RequestExecutor {
    pub fn new(
        transport: Arc<dyn Transport>,
        settings: Option<Settings>,
        identity: Option<AccessToken>,
    ) -> Self {
        Self {
            transport,
            settings: settings.map(Arc::new),
            identity,
        }
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_deref()
    }

    pub fn identity(&self) -> Option<&AccessToken> {
        self.identity.as_ref()
    }

    /// Execute `call` and decode a 2xx body as JSON into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, call: CallDescription) -> Outcome<T> {
        self.execute_with(call, json::<T>).await
    }

    /// Execute `call` and decode a 2xx body with `decode`.
    #[tracing::instrument(
        name = "bgsdk.execute",
        skip_all,
        fields(method = %call.method(), operation = %call.operation())
    )]
    pub async fn execute_with<T, E, F>(&self, call: CallDescription, decode: F) -> Outcome<T>
    where
        E: Display,
        F: FnOnce(&str) -> Result<T, E>,
    {
        let settings = self.settings.as_deref();
        let token = call.token_override().or(self.identity.as_ref());
        let operation = call.operation();

        for precondition in call.preconditions() {
            if let Err(message) = precondition.check(settings, token, operation) {
                tracing::debug!(precondition = precondition.name(), "precondition failed");
                return Outcome::PreconditionFailure {
                    precondition: precondition.name().to_string(),
                    message,
                };
            }
        }

        let url = match self.resolve_url(&call) {
            Ok(url) => url,
            Err(message) => {
                return Outcome::PreconditionFailure {
                    precondition: "resolvable-target".to_string(),
                    message,
                };
            }
        };
        let token = match token {
            Some(token) => token,
            None => {
                let precondition = Precondition::UserAuthenticated;
                let message = precondition
                    .check(settings, None, operation)
                    .err()
                    .unwrap_or_default();
                return Outcome::PreconditionFailure {
                    precondition: precondition.name().to_string(),
                    message,
                };
            }
        };

        let mut headers = vec![
            ("Authorization".to_string(), token.authorization_value()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if call.body().is_some() {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }

        let request = HttpRequest {
            method: call.method(),
            url,
            headers,
            body: call.body().map(str::to_string),
        };

        tracing::debug!(url = %request.url, "dispatching request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "network failure");
                return Outcome::NetworkFailure {
                    message: format!("Error: a network error occurred while {operation}."),
                };
            }
        };

        tracing::debug!(status = response.status, "response received");

        if !response.is_success() {
            tracing::warn!(status = response.status, "HTTP failure");
            return Outcome::HttpFailure {
                status: response.status,
                message: format!(
                    "Error: a HTTP error occurred while {operation} (HTTP {}).",
                    response.status
                ),
                raw_body: response.body,
            };
        }

        classify_shaped(response.body, response.status, call.response_shape(), decode)
    }

    /// Full URL for `call`, with its query pairs form-encoded.
    fn resolve_url(&self, call: &CallDescription) -> Result<String, String> {
        let operation = call.operation();
        let base = match (self.settings.as_deref(), call.target()) {
            (Some(settings), target) => settings.resolve(target),
            (None, Target::Url(url)) => Some(url.clone()),
            (None, _) => None,
        }
        .ok_or_else(|| {
            format!("Unable to compose a URL for {operation}: client settings or app id missing.")
        })?;

        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| format!("Invalid URL '{base}' for {operation}: {e}"))?;
        if !call.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(
                call.query_pairs()
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        Ok(url.into())
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("settings", &self.settings)
            .field("identity", &self.identity)
            .finish()
    }
}

//! Call descriptions: one immutable value per outbound request.

use std::fmt;

use serde::Serialize;

use crate::client::Precondition;
use crate::error::Error;

use super::AccessToken;

/// HTTP method of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the upstream's base domains. Each has a staging and a production URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// OpenID Connect login server.
    Authentication,
    /// Hosted wallet UI.
    Wallet,
    /// Wallet / signature API.
    Api,
    /// Widget auth exchange.
    Connect,
    /// Business API (apps, contracts, token types, minting).
    Business,
    /// NFT marketplace API.
    Market,
}

/// Where a call goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A fully composed URL; needs no client settings.
    Url(String),
    /// A path appended to one of the configured domains.
    Route { domain: Domain, path: String },
    /// A path appended to `<business>/api/apps/<app_id>/contracts`.
    AppContracts { path: String },
}

impl Target {
    /// Target a path on a configured domain.
    pub fn route(domain: Domain, path: impl Into<String>) -> Self {
        Target::Route {
            domain,
            path: path.into(),
        }
    }

    /// Target an absolute URL.
    pub fn url(url: impl Into<String>) -> Self {
        Target::Url(url.into())
    }

    /// Target a path below the configured app's contract collection.
    pub fn app_contracts(path: impl Into<String>) -> Self {
        Target::AppContracts { path: path.into() }
    }

    /// Returns true if resolving this target requires client settings.
    pub fn needs_settings(&self) -> bool {
        !matches!(self, Target::Url(_))
    }
}

/// How a successful response body is reshaped before decoding.
///
/// Upstream endpoints disagree on whether collections come back as a bare
/// array or wrapped in an object, so the shape is declared per call.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// Decode the body unchanged.
    #[default]
    AsIs,
    /// A top-level array becomes `{"<field>": [...]}`. Objects pass through.
    WrapArray { field: String },
    /// A top-level array is replaced by its first element. Objects pass through.
    SingleElement,
}

impl ResponseShape {
    /// Wrap bare arrays under `field`.
    pub fn wrap_array(field: impl Into<String>) -> Self {
        ResponseShape::WrapArray {
            field: field.into(),
        }
    }
}

/// Immutable description of one outbound call.
///
/// Built once, handed to [`RequestExecutor::execute`](crate::RequestExecutor::execute)
/// by value and consumed there. The builder methods take `self` so a
/// description is complete before it is ever sent.
///
/// Routed targets start with the `[ClientConfigured, UserAuthenticated]`
/// preconditions; absolute URLs start with `[UserAuthenticated]`.
///
/// # Example
///
/// ```
/// use bgsdk_kit::{CallDescription, Domain, Method, Precondition, Target};
///
/// let call = CallDescription::get(Target::route(Domain::Api, "/api/wallets"))
///     .label("listing wallets");
///
/// assert_eq!(call.method(), Method::Get);
/// assert_eq!(
///     call.preconditions(),
///     &[Precondition::ClientConfigured, Precondition::UserAuthenticated]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct CallDescription {
    method: Method,
    target: Target,
    query: Vec<(String, String)>,
    body: Option<String>,
    token: Option<AccessToken>,
    preconditions: Vec<Precondition>,
    shape: ResponseShape,
    label: String,
}

impl CallDescription {
    /// Create a call with the given method and target.
    pub fn new(method: Method, target: Target) -> Self {
        let mut preconditions = Vec::with_capacity(2);
        if target.needs_settings() {
            preconditions.push(Precondition::ClientConfigured);
        }
        if matches!(target, Target::AppContracts { .. }) {
            preconditions.push(Precondition::AppConfigured);
        }
        preconditions.push(Precondition::UserAuthenticated);

        let label = format!("sending a {} request", method.as_str());
        Self {
            method,
            target,
            query: Vec::new(),
            body: None,
            token: None,
            preconditions,
            shape: ResponseShape::AsIs,
            label,
        }
    }

    pub fn get(target: Target) -> Self {
        Self::new(Method::Get, target)
    }

    pub fn post(target: Target) -> Self {
        Self::new(Method::Post, target)
    }

    pub fn put(target: Target) -> Self {
        Self::new(Method::Put, target)
    }

    pub fn patch(target: Target) -> Self {
        Self::new(Method::Patch, target)
    }

    /// Attach a JSON body serialized from `body`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Attach an already-encoded JSON body.
    pub fn raw_json(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a query parameter. Repeated keys are kept in order.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Use this token instead of the executor's identity.
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Append a precondition, checked after the existing ones.
    pub fn require(mut self, precondition: Precondition) -> Self {
        self.preconditions.push(precondition);
        self
    }

    /// Replace the precondition list.
    pub fn preconditions_exact(mut self, preconditions: Vec<Precondition>) -> Self {
        self.preconditions = preconditions;
        self
    }

    /// Declare how the response body is reshaped before decoding.
    pub fn shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }

    /// Human-readable description of the operation, used in outcome messages
    /// and logs (e.g. `"creating an offer"`). Reads after "while"; the
    /// default is `"sending a <METHOD> request"`.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn token_override(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn preconditions(&self) -> &[Precondition] {
        &self.preconditions
    }

    pub fn response_shape(&self) -> &ResponseShape {
        &self.shape
    }

    pub fn operation(&self) -> &str {
        &self.label
    }
}

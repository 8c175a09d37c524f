//! The main Bgsdk client.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::types::{AccessToken, CallDescription, Environment, Outcome};

use super::endpoints::{Endpoints, Settings};
use super::executor::RequestExecutor;
use super::transport::{DEFAULT_TIMEOUT, ReqwestTransport, Transport};

/// The main client for the blockchain game API.
///
/// A thin shell over a [`RequestExecutor`]: it owns the injected settings,
/// identity and transport, and exposes a few typed calls (wallets, NFTs,
/// market offers, minting). Anything else goes through [`Bgsdk::call`] with a
/// hand-built [`CallDescription`].
///
/// Cloning is cheap and clones share the transport's connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use bgsdk_kit::*;
///
/// # async fn example() -> Result<(), bgsdk_kit::Error> {
/// let client = Bgsdk::production()
///     .identity(AccessToken::bearer("eyJhbGciOi..."))
///     .build()?;
///
/// let outcome = client.wallets().await;
/// if let Some(list) = outcome.payload() {
///     for wallet in &list.result {
///         println!("{} {}", wallet.id, wallet.address);
///     }
/// } else {
///     eprintln!("{}", outcome.message().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Bgsdk {
    executor: RequestExecutor,
}

impl Bgsdk {
    /// Create a builder for the staging environment.
    pub fn staging() -> BgsdkBuilder {
        BgsdkBuilder::new(Settings::new(Environment::Staging))
    }

    /// Create a builder for the production environment.
    pub fn production() -> BgsdkBuilder {
        BgsdkBuilder::new(Settings::new(Environment::Production))
    }

    /// Create a builder with every domain pointed at `base_url`.
    ///
    /// Useful for local mock servers and proxies.
    pub fn custom(base_url: impl Into<String>) -> BgsdkBuilder {
        BgsdkBuilder::new(Settings {
            endpoints: Endpoints::all(base_url),
            ..Settings::default()
        })
    }

    /// Create a configured client from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `BGSDK_ENVIRONMENT` (optional): `"staging"`, `"production"`, or a base URL
    ///   used for every domain. Defaults to `"staging"`.
    /// - `BGSDK_APP_ID` (optional): app id for contract and minting calls.
    /// - `BGSDK_ACCESS_TOKEN` (optional): access token used as the identity.
    /// - `BGSDK_TOKEN_TYPE` (optional): token scheme, defaults to `"Bearer"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if:
    /// - `BGSDK_ENVIRONMENT` is neither a known environment nor a URL
    /// - `BGSDK_TOKEN_TYPE` is set without `BGSDK_ACCESS_TOKEN`
    /// - the HTTP client cannot be built
    pub fn from_env() -> Result<Bgsdk, Error> {
        let environment = std::env::var("BGSDK_ENVIRONMENT").ok();
        let app_id = std::env::var("BGSDK_APP_ID").ok();
        let token_type = std::env::var("BGSDK_TOKEN_TYPE").ok();
        let access_token = std::env::var("BGSDK_ACCESS_TOKEN").ok();

        let mut builder = match environment.as_deref() {
            None => Bgsdk::staging(),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Bgsdk::custom(url)
            }
            Some(name) => match name.parse::<Environment>()? {
                Environment::Staging => Bgsdk::staging(),
                Environment::Production => Bgsdk::production(),
            },
        };

        if let Some(app_id) = app_id {
            builder = builder.app_id(app_id);
        }

        match (token_type, access_token) {
            (Some(token_type), Some(token)) => {
                builder = builder.identity(AccessToken::new(token_type, token));
            }
            (None, Some(token)) => {
                builder = builder.identity(AccessToken::bearer(token));
            }
            (Some(_), None) => {
                return Err(Error::Config(
                    "BGSDK_TOKEN_TYPE is set but BGSDK_ACCESS_TOKEN is missing".into(),
                ));
            }
            (None, None) => {}
        }

        builder.build()
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// The injected settings, or `None` for an unconfigured client.
    pub fn settings(&self) -> Option<&Settings> {
        self.executor.settings()
    }

    pub fn environment(&self) -> Option<Environment> {
        self.settings().map(|s| s.environment)
    }

    pub fn identity(&self) -> Option<&AccessToken> {
        self.executor.identity()
    }

    /// Execute any call and decode a 2xx body as JSON into `T`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bgsdk_kit::*;
    ///
    /// # async fn example(client: Bgsdk) {
    /// let call = CallDescription::get(Target::route(Domain::Api, "/api/wallets/0xabc/balance"))
    ///     .label("fetching a balance");
    /// let outcome: Outcome<serde_json::Value> = client.call(call).await;
    /// # }
    /// ```
    pub async fn call<T: DeserializeOwned>(&self, call: CallDescription) -> Outcome<T> {
        self.executor.execute(call).await
    }

    /// Attach `body` as JSON and execute.
    ///
    /// A body that cannot be serialized ends the call as a
    /// `"serializable-body"` precondition failure; nothing is sent.
    pub(crate) async fn send_json<T, B>(&self, call: CallDescription, body: &B) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match call.json(body) {
            Ok(call) => self.executor.execute(call).await,
            Err(err) => Outcome::PreconditionFailure {
                precondition: "serializable-body".to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl std::fmt::Debug for Bgsdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bgsdk")
            .field("environment", &self.environment())
            .field("app_id", &self.settings().and_then(|s| s.app_id.as_deref()))
            .field("identity", &self.identity())
            .finish()
    }
}

/// Builder for creating a [`Bgsdk`] client.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use bgsdk_kit::*;
///
/// # fn example() -> Result<(), bgsdk_kit::Error> {
/// let client = Bgsdk::staging()
///     .app_id("my-app")
///     .identity(AccessToken::bearer("eyJhbGciOi..."))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct BgsdkBuilder {
    settings: Option<Settings>,
    app_id: Option<String>,
    identity: Option<AccessToken>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl BgsdkBuilder {
    fn new(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            app_id: None,
            identity: None,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Set the access token sent with every call.
    pub fn identity(mut self, token: AccessToken) -> Self {
        self.identity = Some(token);
        self
    }

    /// Set the app id used by contract and minting calls.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Replace the endpoint table.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        if let Some(settings) = self.settings.as_mut() {
            settings.endpoints = endpoints;
        }
        self
    }

    /// Per-request timeout of the default transport. Ignored when a custom
    /// transport is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of reqwest.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Drop the client settings. Every routed call then fails its
    /// `client-configured` precondition; absolute-URL calls still work.
    pub fn unconfigured(mut self) -> Self {
        self.settings = None;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the default HTTP transport cannot be built.
    pub fn build(self) -> Result<Bgsdk, Error> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(self.timeout)
                    .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?,
            ),
        };

        let settings = self.settings.map(|mut settings| {
            if self.app_id.is_some() {
                settings.app_id = self.app_id;
            }
            settings
        });

        tracing::debug!(
            environment = ?settings.as_ref().map(|s| s.environment),
            authenticated = self.identity.is_some(),
            "building client"
        );

        Ok(Bgsdk {
            executor: RequestExecutor::new(transport, settings, self.identity),
        })
    }
}

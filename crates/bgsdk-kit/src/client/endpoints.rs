//! Endpoint configuration and URL composition.

use crate::types::{Domain, Environment, Target};

/// A base URL with one value per [`Environment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainTarget {
    pub staging: String,
    pub production: String,
}

impl DomainTarget {
    pub fn new(staging: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            staging: staging.into(),
            production: production.into(),
        }
    }

    /// The same URL for both environments.
    pub fn single(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            staging: url.clone(),
            production: url,
        }
    }

    /// The base URL for `environment`, without a trailing slash.
    pub fn get(&self, environment: Environment) -> &str {
        let url = match environment {
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        };
        url.trim_end_matches('/')
    }
}

/// Base URLs of every upstream domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub authentication: DomainTarget,
    pub wallet: DomainTarget,
    pub api: DomainTarget,
    pub connect: DomainTarget,
    pub business: DomainTarget,
    pub market: DomainTarget,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authentication: DomainTarget::new(
                "https://login-staging.arkane.network",
                "https://login.arkane.network",
            ),
            wallet: DomainTarget::new(
                "https://staging.arkane.network/",
                "https://app.arkane.network",
            ),
            api: DomainTarget::new(
                "https://api-staging.arkane.network",
                "https://api.arkane.network",
            ),
            connect: DomainTarget::new(
                "https://connect-staging.arkane.network/auth/exchange",
                "https://connect.arkane.network/auth/exchange",
            ),
            business: DomainTarget::new(
                "https://business-staging.arkane.network",
                "https://business.arkane.network",
            ),
            market: DomainTarget::new(
                "https://api-staging.venly.market",
                "https://api.venly.market",
            ),
        }
    }
}

impl Endpoints {
    /// Point every domain at one base URL (local mocks, proxies).
    pub fn all(base_url: impl Into<String>) -> Self {
        let target = DomainTarget::single(base_url);
        Self {
            authentication: target.clone(),
            wallet: target.clone(),
            api: target.clone(),
            connect: target.clone(),
            business: target.clone(),
            market: target,
        }
    }

    pub fn domain(&self, domain: Domain) -> &DomainTarget {
        match domain {
            Domain::Authentication => &self.authentication,
            Domain::Wallet => &self.wallet,
            Domain::Api => &self.api,
            Domain::Connect => &self.connect,
            Domain::Business => &self.business,
            Domain::Market => &self.market,
        }
    }
}

/// Client settings: which environment, which endpoints, which app.
///
/// Passed into the executor once at construction and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Settings {
    pub environment: Environment,
    pub endpoints: Endpoints,
    pub app_id: Option<String>,
}

impl Settings {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Base URL of `domain` in the active environment.
    pub fn base(&self, domain: Domain) -> &str {
        self.endpoints.domain(domain).get(self.environment)
    }

    /// OpenID Connect token endpoint.
    pub fn authentication_uri(&self) -> String {
        format!(
            "{}/auth/realms/Arkane/protocol/openid-connect/token",
            self.base(Domain::Authentication)
        )
    }

    pub fn connect_uri(&self) -> &str {
        self.base(Domain::Connect)
    }

    pub fn wallet_uri(&self) -> String {
        format!("{}/api/wallets", self.base(Domain::Api))
    }

    pub fn apps_uri(&self) -> String {
        format!("{}/api/apps", self.base(Domain::Business))
    }

    /// Contract collection of `app_id`.
    pub fn contract_uri(&self, app_id: &str) -> String {
        format!("{}/{}/contracts", self.apps_uri(), app_id)
    }

    /// Contract collection of the configured app, if one is set.
    pub fn app_contract_uri(&self) -> Option<String> {
        self.app_id.as_deref().map(|app| self.contract_uri(app))
    }

    pub fn token_types_uri(&self, contract_id: &str) -> Option<String> {
        self.app_contract_uri()
            .map(|base| format!("{base}/{contract_id}/token-types"))
    }

    pub fn mint_uri(&self, contract_id: &str) -> Option<String> {
        self.app_contract_uri()
            .map(|base| format!("{base}/{contract_id}/tokens"))
    }

    pub fn offers_uri(&self) -> String {
        format!("{}/offers", self.base(Domain::Market))
    }

    pub fn signatures_uri(&self) -> String {
        format!("{}/api/signatures", self.base(Domain::Api))
    }

    /// Resolve a call target to a URL. `None` when the target needs an app id
    /// and none is configured.
    pub fn resolve(&self, target: &Target) -> Option<String> {
        match target {
            Target::Url(url) => Some(url.clone()),
            Target::Route { domain, path } => Some(format!("{}{}", self.base(*domain), path)),
            Target::AppContracts { path } => self.app_contract_uri().map(|base| base + path),
        }
    }
}

//! Deployment environment selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The upstream deployment the client talks to.
///
/// Every configured domain has one base URL per environment; this flag
/// picks which one is used when composing request URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Staging deployment (sandbox chains, test data).
    #[default]
    Staging,
    /// Production deployment.
    Production,
}

impl Environment {
    /// Returns true if this is the staging deployment.
    pub fn is_staging(&self) -> bool {
        matches!(self, Environment::Staging)
    }

    /// Returns true if this is the production deployment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns the environment identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::Config(format!(
                "unknown environment '{other}', expected 'staging' or 'production'"
            ))),
        }
    }
}

//! Etsy API environments.
//!
//! An [`Environment`] bundles the three endpoints the SDK talks to: the
//! browser-facing authorization page, the OAuth token endpoint, and the base
//! URL for data calls. Data calls and token calls live on different hosts.

use serde::{Deserialize, Serialize};

use crate::config::EndpointUrl;
use crate::error::ConfigError;

/// Environment variable used to select a named environment.
pub const ENVIRONMENT_VAR: &str = "ETSY_ENV";

const PRODUCTION_AUTHORIZATION_URL: &str = "https://www.etsy.com/oauth/connect";
const PRODUCTION_TOKEN_URL: &str = "https://api.etsy.com/v3/public/oauth/token";
const PRODUCTION_REQUEST_URL: &str = "https://openapi.etsy.com/v3/application";

/// The set of endpoints used by the SDK.
///
/// # Example
///
/// ```rust
/// use etsy_api::Environment;
///
/// let env = Environment::production();
/// assert_eq!(env.request_url().as_ref(), "https://openapi.etsy.com/v3/application");
/// assert_eq!(env.token_url().as_ref(), "https://api.etsy.com/v3/public/oauth/token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    name: String,
    authorization_url: EndpointUrl,
    token_url: EndpointUrl,
    request_url: EndpointUrl,
}

impl Environment {
    /// The production Etsy environment.
    #[must_use]
    pub fn production() -> Self {
        Self {
            name: "PROD".to_string(),
            authorization_url: Self::fixed(PRODUCTION_AUTHORIZATION_URL),
            token_url: Self::fixed(PRODUCTION_TOKEN_URL),
            request_url: Self::fixed(PRODUCTION_REQUEST_URL),
        }
    }

    /// Builds an environment from explicit endpoints, e.g. a local mock server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if any endpoint is not an absolute
    /// `http`/`https` URL.
    pub fn custom(
        name: impl Into<String>,
        authorization_url: &str,
        token_url: &str,
        request_url: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            authorization_url: EndpointUrl::new(authorization_url)?,
            token_url: EndpointUrl::new(token_url)?,
            request_url: EndpointUrl::new(request_url)?,
        })
    }

    /// Resolves the environment named by the `ETSY_ENV` variable.
    ///
    /// `PROD` is the only named environment. An unset variable selects
    /// production; an unknown name is logged and also falls back to production.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .map_or_else(Self::production, |name| Self::named(&name))
    }

    /// Resolves a named environment, falling back to production.
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "PROD" | "" => Self::production(),
            other => {
                tracing::warn!(
                    "Unknown Etsy environment '{}', falling back to PROD",
                    other
                );
                Self::production()
            }
        }
    }

    /// Returns the environment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the browser-facing OAuth authorization URL.
    #[must_use]
    pub const fn authorization_url(&self) -> &EndpointUrl {
        &self.authorization_url
    }

    /// Returns the OAuth token endpoint (code exchange and refresh).
    #[must_use]
    pub const fn token_url(&self) -> &EndpointUrl {
        &self.token_url
    }

    /// Returns the base URL for data calls.
    #[must_use]
    pub const fn request_url(&self) -> &EndpointUrl {
        &self.request_url
    }

    // Built-in endpoints only; covered by `test_production_endpoints`.
    fn fixed(url: &str) -> EndpointUrl {
        EndpointUrl::new(url).unwrap_or_else(|_| unreachable!("invalid built-in URL {url}"))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::production()
    }
}

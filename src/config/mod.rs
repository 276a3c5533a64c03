//! Configuration types for the Etsy API SDK.
//!
//! # Overview
//!
//! - [`EtsyConfig`]: the settings shared by the OAuth bootstrap and the client
//! - [`EtsyConfigBuilder`]: builder for [`EtsyConfig`]
//! - [`ApiKey`]: a validated app keystring
//! - [`EndpointUrl`]: a validated absolute URL
//! - [`RedirectUri`]: a validated OAuth redirect URI
//! - [`Environment`]: the authorization, token and data endpoints
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, Environment, EtsyConfig};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("my-keystring").unwrap())
//!     .environment(Environment::production())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_key().as_ref(), "my-keystring");
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, ENVIRONMENT_VAR};
pub use newtypes::{ApiKey, EndpointUrl, RedirectUri};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Etsy API SDK.
///
/// `EtsyConfig` is `Clone`, `Send`, and `Sync`; one instance can back any
/// number of clients.
#[derive(Clone, Debug)]
pub struct EtsyConfig {
    api_key: ApiKey,
    environment: Environment,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl EtsyConfig {
    /// Creates a new builder for constructing an `EtsyConfig`.
    #[must_use]
    pub fn builder() -> EtsyConfigBuilder {
        EtsyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the environment endpoints.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify EtsyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyConfig>();
};

/// Builder for [`EtsyConfig`].
///
/// Only `api_key` is required.
///
/// # Defaults
///
/// - `environment`: [`Environment::from_env`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no transport timeout)
#[derive(Debug, Default)]
pub struct EtsyConfigBuilder {
    api_key: Option<ApiKey>,
    environment: Option<Environment>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl EtsyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the environment endpoints.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a transport-level timeout applied to every HTTP call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`EtsyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<EtsyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(EtsyConfig {
            api_key,
            environment: self.environment.unwrap_or_else(Environment::from_env),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

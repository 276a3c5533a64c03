//! Configuration error types for the Etsy API SDK.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or URLs are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK or constructing a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key (keystring) cannot be empty.
    #[error("API key cannot be empty. Please provide the keystring of your Etsy app.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Run the OAuth flow to obtain one.")]
    EmptyAccessToken,

    /// Refresh token cannot be empty.
    #[error("Refresh token cannot be empty. Run the OAuth flow to obtain one.")]
    EmptyRefreshToken,

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute URL with an http or https scheme.")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// OAuth scopes could not be parsed.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// Why the scopes were rejected.
        reason: String,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the transport.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("keystring"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyRefreshToken;
        let _: &dyn std::error::Error = &error;
    }
}

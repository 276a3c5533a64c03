//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::StateMismatch`]: the callback `state` does not match
//! - [`OAuthError::MissingCode`]: the callback carries no authorization code
//! - [`OAuthError::AuthorizationDenied`]: the user or Etsy refused the grant
//! - [`OAuthError::TokenExchangeFailed`]: the token endpoint rejected the code
//!
//! # Example
//!
//! ```rust
//! use etsy_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur during the authorization-code flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// OAuth state parameter mismatch.
    ///
    /// The `state` in the callback is not the one generated by
    /// `begin_auth()`; the callback must be discarded.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// The callback carries no authorization code.
    #[error("Authorization callback is missing the 'code' parameter")]
    MissingCode,

    /// The authorization server reported an error in the callback.
    #[error("Authorization denied: {error}")]
    AuthorizationDenied {
        /// The `error` value from the callback.
        error: String,
        /// The `error_description` value from the callback, if any.
        description: Option<String>,
    },

    /// Token exchange request failed.
    ///
    /// Status `0` means the request never produced a response.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

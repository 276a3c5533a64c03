//! Error types for Etsy API calls.
//!
//! # Error Handling
//!
//! - [`RequestError`]: the API answered with a status in the error set, or a
//!   token refresh was rejected (always status 401)
//! - [`InvalidRequestError`]: the call was malformed and was never sent
//! - [`EtsyError`]: unified error type returned by the client
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{EtsyError, HttpMethod, QueryParams};
//!
//! match client.get("/shops/123", &QueryParams::new()).await {
//!     Ok(response) => println!("Shop: {}", response.message),
//!     Err(EtsyError::Request(e)) => {
//!         println!("API error {}: {}", e.status_code, e.error);
//!     }
//!     Err(EtsyError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(EtsyError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::RateLimitSnapshot;

/// Default value of [`RequestError::kind`].
pub const DEFAULT_ERROR_KIND: &str = "ERROR";

/// Error returned when the Etsy API reports a failure.
///
/// Rate-limit headers present on the failing response are kept in
/// `rate_limits`.
///
/// # Example
///
/// ```rust
/// use etsy_api::RequestError;
///
/// let error = RequestError::new(404, "Not Found");
/// assert_eq!(error.status_code, 404);
/// assert_eq!(error.kind, "ERROR");
/// assert_eq!(error.to_string(), "Etsy API error 404: Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Etsy API error {status_code}: {error}")]
pub struct RequestError {
    /// The HTTP status code.
    pub status_code: u16,
    /// The `error` value of the response body, or the status reason.
    pub error: String,
    /// The `error_description` value of the response body, if any.
    pub error_description: Option<String>,
    /// Rate-limit telemetry from the response headers.
    pub rate_limits: Option<RateLimitSnapshot>,
    /// Error category.
    pub kind: String,
}

impl RequestError {
    /// Creates an error with no description or rate limits.
    #[must_use]
    pub fn new(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            error: error.into(),
            error_description: None,
            rate_limits: None,
            kind: DEFAULT_ERROR_KIND.to_string(),
        }
    }

    /// Attaches an error description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.error_description = description;
        self
    }

    /// Attaches rate-limit telemetry.
    #[must_use]
    pub const fn with_rate_limits(mut self, rate_limits: Option<RateLimitSnapshot>) -> Self {
        self.rate_limits = rate_limits;
        self
    }
}

/// Error returned when a call is rejected before it is sent.
///
/// # Example
///
/// ```rust
/// use etsy_api::InvalidRequestError;
///
/// let error = InvalidRequestError::MissingPayload {
///     method: "post".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use post without a payload.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST, PUT or PATCH call was made without a payload.
    #[error("Cannot use {method} without a payload.")]
    MissingPayload {
        /// The HTTP method that requires a payload.
        method: String,
    },

    /// The payload kind cannot be sent with this method.
    #[error("Cannot send a {payload} payload with {method}.")]
    UnsupportedPayload {
        /// The HTTP method.
        method: String,
        /// The payload kind.
        payload: String,
    },

    /// A file part of an upload cannot be encoded.
    #[error("Invalid file part '{field}': {reason}")]
    InvalidFilePart {
        /// The form field holding the part.
        field: String,
        /// What is wrong with the part.
        reason: String,
    },
}

/// Unified error type for Etsy API calls.
#[derive(Debug, Error)]
pub enum EtsyError {
    /// The API reported a failure.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The call was rejected before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl EtsyError {
    /// Returns the HTTP status code for API failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => Some(e.status_code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

// Verify EtsyError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyError>();
};

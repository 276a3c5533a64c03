//! Query parameters of the OAuth redirect back to the app.
//!
//! Etsy redirects the seller to the registered URI with either
//! `code` + `state` or `error` + `error_description` (+ `state`).

use serde::Deserialize;

use crate::auth::oauth::OAuthError;

/// The parameters Etsy appends to the redirect URI.
///
/// Implements `Deserialize`, so web frameworks can extract it from the
/// request query directly.
///
/// # Example
///
/// ```rust
/// use etsy_api::auth::oauth::AuthCallback;
///
/// let callback = AuthCallback::from_query("code=abc&state=xyz");
/// assert_eq!(callback.code().unwrap(), "abc");
/// assert_eq!(callback.state.as_deref(), Some("xyz"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthCallback {
    /// The authorization code.
    pub code: Option<String>,
    /// The echoed state parameter.
    pub state: Option<String>,
    /// The error reported by the authorization server.
    pub error: Option<String>,
    /// The human-readable error description.
    pub error_description: Option<String>,
}

impl AuthCallback {
    /// Parses a raw query string (with or without a leading `?`).
    ///
    /// Unknown parameters are ignored; empty values count as absent.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut callback = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            if value.is_empty() {
                continue;
            }
            match key {
                "code" => callback.code = Some(value),
                "state" => callback.state = Some(value),
                "error" => callback.error = Some(value),
                "error_description" => callback.error_description = Some(value),
                _ => {}
            }
        }
        callback
    }

    /// Returns the authorization code.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::AuthorizationDenied`] if the callback reports an
    /// error, and [`OAuthError::MissingCode`] if it carries no code.
    pub fn code(&self) -> Result<&str, OAuthError> {
        if let Some(error) = &self.error {
            return Err(OAuthError::AuthorizationDenied {
                error: error.clone(),
                description: self.error_description.clone(),
            });
        }
        self.code.as_deref().ok_or(OAuthError::MissingCode)
    }
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value).map_or(value.clone(), |decoded| decoded.into_owned())
}

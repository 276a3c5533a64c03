//! OAuth authorization URL generation.
//!
//! [`begin_auth`] is the first step of the authorization-code flow. It
//! produces the URL to send the seller to, plus the state and PKCE verifier
//! the app must keep until the callback arrives.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, AuthScopes, EtsyConfig, RedirectUri};
//! use etsy_api::auth::oauth::begin_auth;
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("my-keystring").unwrap())
//!     .build()
//!     .unwrap();
//! let redirect_uri = RedirectUri::new("https://myapp.example.com/callback").unwrap();
//! let scopes: AuthScopes = "listings_r shops_r".parse().unwrap();
//!
//! let result = begin_auth(&config, &redirect_uri, &scopes, None);
//!
//! // Keep result.state and result.code_verifier in the seller's session,
//! // then redirect the seller to result.auth_url.
//! assert!(result.auth_url.contains("code_challenge_method=S256"));
//! ```

use crate::auth::oauth::pkce::CodeVerifier;
use crate::auth::oauth::state::StateParam;
use crate::auth::AuthScopes;
use crate::config::{EtsyConfig, RedirectUri};

/// PKCE challenge method sent with every authorization request.
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// Result of initiating OAuth authorization.
///
/// `state` and `code_verifier` must be stored by the application and handed
/// to [`complete_auth`](crate::auth::oauth::complete_auth) when the callback
/// is received.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The full authorization URL to redirect the seller to.
    pub auth_url: String,

    /// The state parameter generated for this authorization request.
    pub state: StateParam,

    /// The PKCE verifier whose challenge is embedded in `auth_url`.
    pub code_verifier: CodeVerifier,
}

/// Initiates the OAuth authorization code flow.
///
/// A fresh [`StateParam`] is generated unless `state` is given. A fresh
/// [`CodeVerifier`] is always generated.
///
/// The URL is the environment's authorization URL followed by
/// `response_type=code`, `client_id`, `redirect_uri`, `scope` (space-joined),
/// `state`, `code_challenge` and `code_challenge_method=S256`, all URL-encoded.
#[must_use]
pub fn begin_auth(
    config: &EtsyConfig,
    redirect_uri: &RedirectUri,
    scopes: &AuthScopes,
    state: Option<StateParam>,
) -> BeginAuthResult {
    let state = state.unwrap_or_default();
    let code_verifier = CodeVerifier::new();

    let params = [
        ("response_type", "code".to_string()),
        ("client_id", config.api_key().as_ref().to_string()),
        ("redirect_uri", redirect_uri.as_ref().to_string()),
        ("scope", scopes.to_string()),
        ("state", state.to_string()),
        ("code_challenge", code_verifier.challenge()),
        ("code_challenge_method", CODE_CHALLENGE_METHOD.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!(
        "{}?{}",
        config.environment().authorization_url(),
        query_string
    );

    BeginAuthResult {
        auth_url,
        state,
        code_verifier,
    }
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Environment};

    fn create_test_config() -> EtsyConfig {
        EtsyConfig::builder()
            .api_key(ApiKey::new("test-keystring").unwrap())
            .environment(Environment::production())
            .build()
            .unwrap()
    }

    fn redirect_uri() -> RedirectUri {
        RedirectUri::new("https://myapp.example.com/auth/callback").unwrap()
    }

    fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_begin_auth_url_structure() {
        let scopes: AuthScopes = "listings_r".parse().unwrap();
        let result = begin_auth(&create_test_config(), &redirect_uri(), &scopes, None);

        assert!(result
            .auth_url
            .starts_with("https://www.etsy.com/oauth/connect?response_type=code&"));
        assert_eq!(query_value(&result.auth_url, "client_id"), Some("test-keystring"));
        assert_eq!(
            query_value(&result.auth_url, "redirect_uri"),
            Some("https%3A%2F%2Fmyapp.example.com%2Fauth%2Fcallback")
        );
        assert_eq!(query_value(&result.auth_url, "code_challenge_method"), Some("S256"));
    }

    #[test]
    fn test_begin_auth_space_joins_scopes() {
        let scopes: AuthScopes = "shops_r,listings_w".parse().unwrap();
        let result = begin_auth(&create_test_config(), &redirect_uri(), &scopes, None);

        assert_eq!(
            query_value(&result.auth_url, "scope"),
            Some("listings_w%20shops_r")
        );
    }

    #[test]
    fn test_begin_auth_challenge_matches_verifier() {
        let scopes: AuthScopes = "listings_r".parse().unwrap();
        let result = begin_auth(&create_test_config(), &redirect_uri(), &scopes, None);

        let challenge = result.code_verifier.challenge();
        assert_eq!(
            query_value(&result.auth_url, "code_challenge"),
            Some(challenge.as_str())
        );
    }

    #[test]
    fn test_begin_auth_keeps_given_state() {
        let scopes: AuthScopes = "listings_r".parse().unwrap();
        let state = StateParam::from_raw("my-state");
        let result = begin_auth(&create_test_config(), &redirect_uri(), &scopes, Some(state));

        assert_eq!(result.state.as_ref(), "my-state");
        assert_eq!(query_value(&result.auth_url, "state"), Some("my-state"));
    }

    #[test]
    fn test_begin_auth_generates_fresh_values() {
        let scopes: AuthScopes = "listings_r".parse().unwrap();
        let first = begin_auth(&create_test_config(), &redirect_uri(), &scopes, None);
        let second = begin_auth(&create_test_config(), &redirect_uri(), &scopes, None);

        assert_ne!(first.state, second.state);
        assert_ne!(first.code_verifier, second.code_verifier);
    }
}

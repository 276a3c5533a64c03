//! Authorization-code exchange.
//!
//! The final step of the bootstrap: the code from the callback and the PKCE
//! verifier from [`begin_auth`](crate::auth::oauth::begin_auth) are posted
//! to the token endpoint, and the resulting [`TokenSet`] is what an
//! [`EtsyClient`](crate::EtsyClient) is built from.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::auth::oauth::{complete_auth, AuthCallback};
//!
//! // `pending` is the BeginAuthResult stored when the flow started
//! let callback = AuthCallback::from_query(request_query);
//! let tokens = complete_auth(&config, &redirect_uri, &pending, &callback).await?;
//!
//! let client = EtsyClient::builder()
//!     .config(config)
//!     .tokens(tokens)
//!     .build()?;
//! ```

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::auth::oauth::{validate_state, AuthCallback, BeginAuthResult, CodeVerifier, OAuthError};
use crate::auth::TokenSet;
use crate::clients::transport;
use crate::config::{EtsyConfig, RedirectUri};

/// Grant type for the authorization-code exchange.
const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

/// Form body for the code exchange.
#[derive(Debug, Serialize)]
struct CodeExchangeRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
    code_verifier: &'a str,
}

/// Exchanges an authorization code for a token set.
///
/// The redirect URI must be the one used in the authorization URL.
///
/// # Errors
///
/// Returns [`OAuthError::TokenExchangeFailed`] if the endpoint rejects the
/// code or answers without a complete token set. Status `0` means the
/// request never produced a response.
pub async fn exchange_code(
    config: &EtsyConfig,
    redirect_uri: &RedirectUri,
    code: &str,
    code_verifier: &CodeVerifier,
) -> Result<TokenSet, OAuthError> {
    let http = transport(config).map_err(|e| OAuthError::TokenExchangeFailed {
        status: 0,
        message: e.to_string(),
    })?;

    let request_body = CodeExchangeRequest {
        grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
        client_id: config.api_key().as_ref(),
        redirect_uri: redirect_uri.as_ref(),
        code,
        code_verifier: code_verifier.as_ref(),
    };

    let response = http
        .post(config.environment().token_url().as_ref())
        .header("Accept", "application/json")
        .header("x-api-key", config.api_key().as_ref())
        .form(&request_body)
        .send()
        .await
        .map_err(|e| OAuthError::TokenExchangeFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| OAuthError::TokenExchangeFailed {
            status,
            message: format!("Network error: {e}"),
        })?;

    if !(200..300).contains(&status) {
        return Err(OAuthError::TokenExchangeFailed {
            status,
            message: body,
        });
    }

    let parsed: Value = serde_json::from_str(&body).map_err(|e| OAuthError::TokenExchangeFailed {
        status,
        message: format!("Failed to parse token response: {e}"),
    })?;

    let tokens = TokenSet::from_token_response(&parsed, Utc::now()).ok_or_else(|| {
        OAuthError::TokenExchangeFailed {
            status,
            message: format!("Incomplete token response: {body}"),
        }
    })?;

    tracing::info!("Authorization code exchanged for user {}", tokens.user_id());
    Ok(tokens)
}

/// Validates a callback against the pending authorization and exchanges its
/// code.
///
/// # Errors
///
/// Returns [`OAuthError::AuthorizationDenied`] or [`OAuthError::MissingCode`]
/// for an unusable callback, [`OAuthError::StateMismatch`] if the echoed
/// state differs, and any error of [`exchange_code`].
pub async fn complete_auth(
    config: &EtsyConfig,
    redirect_uri: &RedirectUri,
    pending: &BeginAuthResult,
    callback: &AuthCallback,
) -> Result<TokenSet, OAuthError> {
    let code = callback.code()?;
    validate_state(&pending.state, callback.state.as_deref().unwrap_or_default())?;
    exchange_code(config, redirect_uri, code, &pending.code_verifier).await
}

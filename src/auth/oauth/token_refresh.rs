//! Refresh-token grant against the Etsy token endpoint.
//!
//! The grant is posted as JSON with `grant_type=refresh_token`, the app's
//! keystring as `client_id`, and the current refresh token. A usable answer
//! carries `access_token`, `refresh_token` and `expires_in`; anything else is
//! reported as a [`RequestError`] with status 401.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenSet;
use crate::clients::{collect_headers, EtsyError, RateLimitSnapshot, RequestError};
use crate::config::EtsyConfig;

/// Grant type for refresh token requests.
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Status reported for every rejected refresh.
pub const REFRESH_FAILURE_STATUS: u16 = 401;

/// Error text used when the token endpoint gives no `error` value.
pub const REFRESH_FAILURE_FALLBACK: &str = "Something went wrong!";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    refresh_token: &'a str,
}

/// Exchanges `refresh_token` for a new token set.
///
/// The new expiry is computed from `expires_in` relative to the moment the
/// response arrived.
///
/// # Errors
///
/// Returns [`EtsyError::Request`] with status 401 if the endpoint answers
/// with anything other than a complete token set, and
/// [`EtsyError::Network`] if the endpoint cannot be reached or its body
/// cannot be read.
pub(crate) async fn refresh_access_token(
    http: &reqwest::Client,
    config: &EtsyConfig,
    refresh_token: &str,
) -> Result<TokenSet, EtsyError> {
    let request_body = TokenRefreshRequest {
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
        client_id: config.api_key().as_ref(),
        refresh_token,
    };

    let response = http
        .post(config.environment().token_url().as_ref())
        .header("Accept", "application/json")
        .header("x-api-key", config.api_key().as_ref())
        .json(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let rate_limits = RateLimitSnapshot::from_headers(&collect_headers(response.headers()));
    let body = response.text().await?;
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    match TokenSet::from_token_response(&body, Utc::now()) {
        Some(tokens) => Ok(tokens),
        None => {
            let error = rejection(&body).with_rate_limits(rate_limits);
            tracing::warn!(
                "Token refresh rejected (HTTP {}): {}",
                status,
                error.error
            );
            Err(error.into())
        }
    }
}

fn rejection(body: &Value) -> RequestError {
    let text = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let error = text("error").unwrap_or_else(|| REFRESH_FAILURE_FALLBACK.to_string());
    RequestError::new(REFRESH_FAILURE_STATUS, error).with_description(text("error_description"))
}

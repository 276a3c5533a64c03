//! Response classification for Etsy API calls.
//!
//! Every completed HTTP exchange becomes exactly one of two outcomes: a
//! [`ResponseEnvelope`] or a [`RequestError`]. The split is by membership in
//! [`ERROR_CODES`]; every other status, including unusual 2xx and 3xx
//! values, is a success.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::errors::RequestError;

/// Statuses treated as failures.
pub const ERROR_CODES: [u16; 7] = [400, 401, 403, 404, 409, 500, 503];

/// Message used for successful responses with no content.
pub const EMPTY_SUCCESS_MESSAGE: &str = "OK";

/// Rate-limit telemetry parsed from response headers.
///
/// Each field comes from its own header:
///
/// - `limit_per_second`: `x-limit-per-second`
/// - `remaining_this_second`: `x-remaining-this-second`
/// - `limit_per_day`: `x-limit-per-day`
/// - `remaining_today`: `x-remaining-today`
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use etsy_api::RateLimitSnapshot;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-limit-per-day".to_string(), vec!["10000".to_string()]);
/// headers.insert("x-remaining-today".to_string(), vec!["9990".to_string()]);
///
/// let limits = RateLimitSnapshot::from_headers(&headers).unwrap();
/// assert_eq!(limits.limit_per_day, Some(10_000));
/// assert_eq!(limits.limit_per_second, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSnapshot {
    /// Requests allowed per second.
    pub limit_per_second: Option<u32>,
    /// Requests left in the current second.
    pub remaining_this_second: Option<u32>,
    /// Requests allowed per day.
    pub limit_per_day: Option<u32>,
    /// Requests left today.
    pub remaining_today: Option<u32>,
}

impl RateLimitSnapshot {
    /// Reads the rate-limit headers.
    ///
    /// Header names must be lowercase. Returns `None` if none of the four
    /// headers is present with a numeric value.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse::<u32>().ok())
        };

        let snapshot = Self {
            limit_per_second: read("x-limit-per-second"),
            remaining_this_second: read("x-remaining-this-second"),
            limit_per_day: read("x-limit-per-day"),
            remaining_today: read("x-remaining-today"),
        };

        if snapshot == Self::default() {
            None
        } else {
            Some(snapshot)
        }
    }
}

/// A successful API response.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
    /// The HTTP status code.
    pub status_code: u16,
    /// The decoded body, or `"OK"` when the body was empty.
    pub message: Value,
    /// Rate-limit telemetry from the response headers.
    pub rate_limits: Option<RateLimitSnapshot>,
    /// Response headers (lowercase keys).
    pub headers: HashMap<String, Vec<String>>,
}

impl ResponseEnvelope {
    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}

/// Returns `true` if `status` is in [`ERROR_CODES`].
#[must_use]
pub fn is_error_status(status: u16) -> bool {
    ERROR_CODES.contains(&status)
}

/// Returns the standard reason phrase for an error status.
#[must_use]
pub const fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown Error",
    }
}

/// Decodes a response body.
///
/// An empty body decodes to `null`; text that is not JSON is kept as a JSON
/// string.
#[must_use]
pub fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn is_empty_message(message: &Value) -> bool {
    match message {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(|value| match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

/// Classifies a completed response.
///
/// Header names must be lowercase.
///
/// # Errors
///
/// Returns [`RequestError`] if `status` is in [`ERROR_CODES`]. Its `error`
/// is the body's `error` value, or the status reason phrase when the body
/// has none.
pub fn classify(
    status: u16,
    headers: HashMap<String, Vec<String>>,
    body: &str,
) -> Result<ResponseEnvelope, RequestError> {
    let rate_limits = RateLimitSnapshot::from_headers(&headers);
    let decoded = decode_body(body);

    if is_error_status(status) {
        let error = text_field(&decoded, "error").unwrap_or_else(|| default_reason(status).to_string());
        return Err(RequestError::new(status, error)
            .with_description(text_field(&decoded, "error_description"))
            .with_rate_limits(rate_limits));
    }

    let message = if is_empty_message(&decoded) {
        Value::String(EMPTY_SUCCESS_MESSAGE.to_string())
    } else {
        decoded
    };

    Ok(ResponseEnvelope {
        status_code: status,
        message,
        rate_limits,
        headers,
    })
}

/// Collects reqwest headers into lowercase keys with every value kept.
#[must_use]
pub fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

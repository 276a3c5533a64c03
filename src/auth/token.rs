//! Token state for an authenticated client.
//!
//! A [`TokenSet`] is the access token, the refresh token and the instant the
//! access token stops being usable. All instants are UTC; local or naive
//! times are normalized on the way in through [`IntoUtc`].
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use etsy_api::TokenSet;
//!
//! let tokens = TokenSet::new("12345678.abc", "12345678.def", Utc::now() + Duration::hours(1));
//! assert_eq!(tokens.user_id(), "12345678");
//! assert!(!tokens.is_stale());
//! ```

use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conversion of a timestamp into UTC.
///
/// Naive timestamps are taken to be UTC already; zoned timestamps are
/// converted.
pub trait IntoUtc {
    /// Returns the instant in UTC.
    fn into_utc(self) -> DateTime<Utc>;
}

impl IntoUtc for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl<Tz: TimeZone> IntoUtc for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Normalizes a timestamp to UTC.
#[must_use]
pub fn ensure_utc(instant: impl IntoUtc) -> DateTime<Utc> {
    instant.into_utc()
}

/// Returns the user id embedded in an Etsy access token.
///
/// Etsy access tokens are prefixed with the numeric user id followed by a
/// `.`; a token without a `.` is returned whole.
#[must_use]
pub fn user_id_from_token(access_token: &str) -> &str {
    access_token
        .split_once('.')
        .map_or(access_token, |(user_id, _)| user_id)
}

/// An access token, its refresh token, and the access token's expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer token for data calls.
    pub access_token: String,
    /// Token used to obtain a new access token.
    pub refresh_token: String,
    /// Instant at which the access token stops being usable.
    pub expiry: DateTime<Utc>,
}

impl TokenSet {
    /// Creates a token set, normalizing `expiry` to UTC.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expiry: impl IntoUtc,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expiry: expiry.into_utc(),
        }
    }

    /// Creates a token set that expires `expires_in` seconds after `issued_at`.
    ///
    /// Returns `None` if the expiry falls outside chrono's date range.
    #[must_use]
    pub fn from_expires_in(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
        issued_at: DateTime<Utc>,
    ) -> Option<Self> {
        let expiry = issued_at.checked_add_signed(Duration::try_seconds(expires_in)?)?;
        Some(Self::new(access_token, refresh_token, expiry))
    }

    /// Reads a token endpoint response body.
    ///
    /// Returns `None` unless the body carries `access_token`,
    /// `refresh_token` and `expires_in` (seconds, as a number or numeric
    /// string) whose expiry can be represented.
    #[must_use]
    pub fn from_token_response(body: &Value, issued_at: DateTime<Utc>) -> Option<Self> {
        let access_token = body.get("access_token")?.as_str()?;
        let refresh_token = body.get("refresh_token")?.as_str()?;
        let expires_in = body.get("expires_in").and_then(|value| {
            value
                .as_i64()
                .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        })?;
        if access_token.is_empty() || refresh_token.is_empty() {
            return None;
        }
        Self::from_expires_in(access_token, refresh_token, expires_in, issued_at)
    }

    /// Returns the user id prefix of the access token.
    #[must_use]
    pub fn user_id(&self) -> &str {
        user_id_from_token(&self.access_token)
    }

    /// Returns `true` if the access token is unusable at `now`.
    ///
    /// A token is stale from its expiry instant onwards.
    #[must_use]
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }

    /// Returns `true` if the access token is unusable now.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("user_id", &self.user_id())
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .finish()
    }
}

// Verify TokenSet is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenSet>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_naive_time_is_taken_as_utc() {
        let utc = ensure_utc(noon());
        assert_eq!(utc.naive_utc(), noon());
    }

    #[test]
    fn test_zoned_time_is_converted() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.from_local_datetime(&noon()).unwrap();
        let utc = ensure_utc(local);
        assert_eq!(utc.naive_utc(), noon() - Duration::hours(2));
    }

    #[test]
    fn test_user_id_is_prefix_before_first_dot() {
        assert_eq!(user_id_from_token("12345678.abc.def"), "12345678");
        assert_eq!(user_id_from_token("nodots"), "nodots");
        assert_eq!(user_id_from_token(".abc"), "");
    }

    #[test]
    fn test_staleness_boundary() {
        let expiry = ensure_utc(noon());
        let tokens = TokenSet::new("1.a", "1.r", expiry);

        assert!(!tokens.is_stale_at(expiry - Duration::seconds(1)));
        assert!(tokens.is_stale_at(expiry));
        assert!(tokens.is_stale_at(expiry + Duration::seconds(1)));
    }

    #[test]
    fn test_from_expires_in() {
        let issued = ensure_utc(noon());
        let tokens = TokenSet::from_expires_in("1.a", "1.r", 3600, issued).unwrap();
        assert_eq!(tokens.expiry, issued + Duration::hours(1));
    }

    #[test]
    fn test_from_expires_in_out_of_range() {
        let issued = ensure_utc(noon());
        for expires_in in [i64::MAX, i64::MIN, 10_000_000_000_000, -10_000_000_000_000] {
            assert!(TokenSet::from_expires_in("1.a", "1.r", expires_in, issued).is_none());
        }
    }

    #[test]
    fn test_from_token_response_rejects_unrepresentable_expiry() {
        let issued = ensure_utc(noon());
        for expires_in in [
            serde_json::json!(i64::MAX),
            serde_json::json!(10_000_000_000_000_i64),
            serde_json::json!("9223372036854775807"),
        ] {
            let body = serde_json::json!({
                "access_token": "42.new",
                "refresh_token": "42.next",
                "expires_in": expires_in,
            });
            assert!(TokenSet::from_token_response(&body, issued).is_none());
        }
    }

    #[test]
    fn test_from_token_response() {
        let issued = ensure_utc(noon());
        let body = serde_json::json!({
            "access_token": "42.new",
            "refresh_token": "42.next",
            "expires_in": 3600,
            "token_type": "Bearer",
        });
        let tokens = TokenSet::from_token_response(&body, issued).unwrap();
        assert_eq!(tokens.access_token, "42.new");
        assert_eq!(tokens.refresh_token, "42.next");
        assert_eq!(tokens.expiry, issued + Duration::seconds(3600));

        let textual = serde_json::json!({
            "access_token": "42.new",
            "refresh_token": "42.next",
            "expires_in": "60",
        });
        assert!(TokenSet::from_token_response(&textual, issued).is_some());
    }

    #[test]
    fn test_from_token_response_requires_all_fields() {
        let issued = ensure_utc(noon());
        for body in [
            serde_json::json!({"error": "invalid_grant"}),
            serde_json::json!({"access_token": "42.a", "expires_in": 3600}),
            serde_json::json!({"access_token": "42.a", "refresh_token": "42.r"}),
            serde_json::json!({"access_token": "", "refresh_token": "42.r", "expires_in": 1}),
            serde_json::Value::Null,
        ] {
            assert!(TokenSet::from_token_response(&body, issued).is_none());
        }
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let tokens = TokenSet::new("42.secret-access", "42.secret-refresh", noon());
        let debug = format!("{tokens:?}");
        assert!(debug.contains("42"));
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
    }

    #[test]
    fn test_serde_round_trip() {
        let tokens = TokenSet::new("42.a", "42.r", noon());
        let json = serde_json::to_string(&tokens).unwrap();
        let back: TokenSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}

//! State parameter handling for OAuth CSRF protection.
//!
//! The state is a random nonce placed in the authorization URL and echoed
//! back in the callback. [`validate_state`] compares the two in constant
//! time.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::auth::oauth::{validate_state, StateParam};
//!
//! let state = StateParam::new();
//! assert!(validate_state(&state, state.as_ref()).is_ok());
//! assert!(validate_state(&state, "forged").is_err());
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::auth::oauth::OAuthError;

/// Number of random bytes behind a generated state.
const STATE_BYTES: usize = 16;

/// OAuth state parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// Generates a state from 16 cryptographically random bytes.
    ///
    /// The result is 22 URL-safe characters.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0_u8; STATE_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wraps a caller-chosen state value.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Checks the state echoed in a callback against the one that was issued.
///
/// # Errors
///
/// Returns [`OAuthError::StateMismatch`] if the values differ.
pub fn validate_state(expected: &StateParam, received: &str) -> Result<(), OAuthError> {
    let matches: bool = expected.0.as_bytes().ct_eq(received.as_bytes()).into();
    if matches {
        Ok(())
    } else {
        Err(OAuthError::StateMismatch {
            expected: expected.0.clone(),
            received: received.to_string(),
        })
    }
}

//! PKCE (RFC 7636) code verifier and S256 challenge.
//!
//! Etsy requires PKCE on every authorization-code grant. The verifier is
//! kept by the app; only its SHA-256 challenge goes into the authorization
//! URL.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::auth::oauth::{code_challenge, CodeVerifier};
//!
//! let verifier = CodeVerifier::new();
//! assert_eq!(verifier.as_ref().len(), 43);
//! assert_eq!(verifier.challenge(), code_challenge(verifier.as_ref()));
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of random bytes behind a generated verifier.
const VERIFIER_BYTES: usize = 32;

/// Computes the S256 challenge of a verifier.
///
/// The challenge is the unpadded URL-safe base64 encoding of the SHA-256
/// digest of the verifier's UTF-8 bytes.
#[must_use]
pub fn code_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

/// A PKCE code verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeVerifier(String);

impl CodeVerifier {
    /// Generates a verifier from 32 cryptographically random bytes.
    ///
    /// The result is 43 URL-safe characters.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0_u8; VERIFIER_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wraps a verifier that was generated and stored earlier.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the S256 challenge for this verifier.
    #[must_use]
    pub fn challenge(&self) -> String {
        code_challenge(&self.0)
    }
}

impl Default for CodeVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for CodeVerifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CodeVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CodeVerifier([REDACTED])")
    }
}

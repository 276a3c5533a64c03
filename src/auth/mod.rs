//! Authentication types for the Etsy API SDK.
//!
//! # Overview
//!
//! - [`TokenSet`]: the access token, refresh token and expiry a client runs on
//! - [`IntoUtc`] / [`ensure_utc`]: normalization of caller-supplied instants
//! - [`AuthScopes`]: the set of Etsy permission scopes requested at sign-in
//! - [`oauth`]: the authorization-code + PKCE flow that produces a [`TokenSet`]
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use etsy_api::{AuthScopes, TokenSet};
//!
//! let scopes: AuthScopes = "listings_r,listings_w".parse().unwrap();
//! assert!(scopes.contains("listings_w"));
//!
//! let tokens = TokenSet::new("987654.access", "987654.refresh", Utc::now() - Duration::hours(1));
//! assert!(tokens.is_stale());
//! ```

pub mod oauth;
mod scopes;
mod token;

pub use scopes::AuthScopes;
pub use token::{ensure_utc, user_id_from_token, IntoUtc, TokenSet};

//! OAuth 2.0 authorization-code flow with PKCE for Etsy apps.
//!
//! Etsy issues tokens only through the authorization-code grant with a
//! PKCE S256 challenge. The flow has three steps:
//!
//! 1. **Authorization Initiation** ([`begin_auth`]): build the URL to send
//!    the seller to, together with a state and a code verifier to keep.
//! 2. **Callback** ([`AuthCallback`]): read the `code` and `state` Etsy
//!    appends to the redirect URI, and check the state with
//!    [`validate_state`].
//! 3. **Code Exchange** ([`exchange_code`], or [`complete_auth`] for steps 2
//!    and 3 together): trade the code for a [`TokenSet`](crate::TokenSet).
//!
//! Refreshing an expired token is handled by
//! [`EtsyClient`](crate::EtsyClient) itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{ApiKey, AuthScopes, EtsyClient, EtsyConfig, RedirectUri};
//! use etsy_api::auth::oauth::{begin_auth, complete_auth, AuthCallback};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("your-keystring")?)
//!     .build()?;
//! let redirect_uri = RedirectUri::new("https://your-app.com/callback")?;
//! let scopes: AuthScopes = "listings_r listings_w shops_r".parse()?;
//!
//! let pending = begin_auth(&config, &redirect_uri, &scopes, None);
//! // Store `pending`, redirect the seller to pending.auth_url ...
//!
//! // ... then in the callback handler:
//! let callback = AuthCallback::from_query(query_string);
//! let tokens = complete_auth(&config, &redirect_uri, &pending, &callback).await?;
//!
//! let client = EtsyClient::builder().config(config).tokens(tokens).build()?;
//! ```

mod begin_auth;
mod callback;
mod error;
mod pkce;
mod state;
mod token_exchange;
pub(crate) mod token_refresh;

pub use begin_auth::{begin_auth, BeginAuthResult, CODE_CHALLENGE_METHOD};
pub use callback::AuthCallback;
pub use error::OAuthError;
pub use pkce::{code_challenge, CodeVerifier};
pub use state::{validate_state, StateParam};
pub use token_exchange::{complete_auth, exchange_code};
pub use token_refresh::{REFRESH_FAILURE_FALLBACK, REFRESH_FAILURE_STATUS};

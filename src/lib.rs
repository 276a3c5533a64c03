//! # Etsy API Rust SDK
//!
//! A Rust SDK for the Etsy Open API v3, providing type-safe configuration,
//! OAuth 2.0 (PKCE) authentication, automatic access-token refresh, and typed
//! request bodies for the listing, shop, receipt and shipping endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`EtsyConfig`] and [`EtsyConfigBuilder`]
//! - Validated newtypes for the API key and endpoint URLs
//! - The OAuth 2.0 authorization code flow with PKCE via [`auth::oauth`]
//! - An async [`EtsyClient`] that refreshes a stale access token before the
//!   call that needs it
//! - Uniform response classification into a [`ResponseEnvelope`] or an
//!   [`EtsyError`], with Etsy's rate limits attached to both
//! - Typed request bodies and vocabulary enums in [`models`]
//! - Thin endpoint wrappers in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use etsy_api::{ApiKey, Environment, EtsyConfig};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("your-keystring").unwrap())
//!     .environment(Environment::production())
//!     .user_agent_prefix("MyShopTool/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use etsy_api::{AuthScopes, RedirectUri};
//! use etsy_api::auth::oauth::{begin_auth, complete_auth, AuthCallback};
//!
//! let redirect_uri = RedirectUri::new("https://my-app.example/callback")?;
//! let scopes: AuthScopes = "listings_r listings_w shops_r".parse()?;
//!
//! // Step 1: send the seller to the consent page
//! let pending = begin_auth(&config, &redirect_uri, &scopes, None);
//! // Redirect to pending.auth_url, keep `pending` in the session
//!
//! // Step 2: exchange the callback's code for tokens
//! let callback = AuthCallback::from_query(query_string);
//! let tokens = complete_auth(&config, &redirect_uri, &pending, &callback).await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use etsy_api::EtsyClient;
//! use etsy_api::resources::{ListingResource, ListingsByShopParams};
//!
//! let client = EtsyClient::builder()
//!     .config(config)
//!     .tokens(tokens)
//!     .on_refresh(|access, refresh, expiry| {
//!         store_tokens(access, refresh, expiry);
//!     })
//!     .build()?;
//!
//! let listings = ListingResource::new(&client);
//! let response = listings
//!     .get_listings_by_shop(42, &ListingsByShopParams::default())
//!     .await?;
//!
//! println!("{}", response.message);
//! if let Some(limits) = response.rate_limits {
//!     println!("{:?} calls left today", limits.remaining_today);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and request builders validate on
//!   construction, before any network I/O
//! - **Thread-safe**: All public types are `Send + Sync`; one client can be
//!   shared across tasks
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{ensure_utc, AuthScopes, IntoUtc, TokenSet};
pub use config::{
    ApiKey, EndpointUrl, Environment, EtsyConfig, EtsyConfigBuilder, RedirectUri,
    ENVIRONMENT_VAR,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    EtsyClient, EtsyClientBuilder, EtsyError, HttpMethod, InvalidRequestError, Payload,
    QueryParams, RateLimitSnapshot, RequestError, ResponseEnvelope,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_auth, complete_auth, exchange_code, AuthCallback, BeginAuthResult, OAuthError,
    StateParam,
};

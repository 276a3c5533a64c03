//! HTTP client layer for the Etsy Open API v3.
//!
//! # Overview
//!
//! - [`EtsyClient`]: the authenticated client; owns the token state and
//!   dispatches every data call
//! - [`HttpMethod`], [`Payload`], [`QueryParams`]: what a call is made of
//! - [`ResponseEnvelope`], [`RateLimitSnapshot`]: what a successful call
//!   returns
//! - [`EtsyError`], [`RequestError`], [`InvalidRequestError`]: what a failed
//!   call returns
//!
//! # Classification
//!
//! A response whose status is in [`ERROR_CODES`] (400, 401, 403, 404, 409,
//! 500, 503) is a [`RequestError`]; every other status is a success.
//! Nothing is retried automatically, apart from the single token refresh
//! that precedes a call made with a stale token.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{EtsyError, HttpMethod, Payload, QueryParams};
//! use etsy_api::models::UpdateShopRequest;
//!
//! let update = UpdateShopRequest::builder()
//!     .announcement("Closed for the holidays")
//!     .build()?;
//!
//! match client.put("/shops/42", Payload::json(&update)).await {
//!     Ok(response) => println!("Updated: {}", response.message),
//!     Err(EtsyError::Request(e)) => println!("Etsy said {}: {}", e.status_code, e.error),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{EtsyError, InvalidRequestError, RequestError, DEFAULT_ERROR_KIND};
pub use http_client::{user_agent, EtsyClient, EtsyClientBuilder, RefreshCallback, SDK_VERSION};
pub use http_request::{verify, HttpMethod, Payload, QueryParams};
pub use http_response::{
    classify, collect_headers, decode_body, default_reason, is_error_status, RateLimitSnapshot,
    ResponseEnvelope, EMPTY_SUCCESS_MESSAGE, ERROR_CODES,
};

pub(crate) use http_client::transport;

//! The authenticated Etsy client and its request dispatcher.
//!
//! [`EtsyClient`] owns the token state and is the only path to the network
//! for data calls. Every call goes through [`EtsyClient::make_request`],
//! which checks the payload, refreshes a stale token, shapes the body for
//! the method, and classifies the response.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::oauth::token_refresh;
use crate::auth::{IntoUtc, TokenSet};
use crate::clients::errors::{EtsyError, InvalidRequestError};
use crate::clients::http_request::{verify, HttpMethod, Payload, QueryParams};
use crate::clients::http_response::{classify, collect_headers, ResponseEnvelope};
use crate::config::EtsyConfig;
use crate::error::ConfigError;
use crate::models::{FilePart, FileRequest};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Callback invoked with `(access_token, refresh_token, expiry)` after every
/// successful token refresh.
pub type RefreshCallback = Arc<dyn Fn(&str, &str, DateTime<Utc>) + Send + Sync>;

/// Returns the `User-Agent` sent with every call.
#[must_use]
pub fn user_agent(config: &EtsyConfig) -> String {
    let prefix = config
        .user_agent_prefix()
        .map_or(String::new(), |prefix| format!("{prefix} | "));
    format!("{prefix}Etsy API Rust Library v{SDK_VERSION}")
}

/// Builds the HTTP transport for `config`.
///
/// # Errors
///
/// Returns [`ConfigError::HttpClient`] if the transport cannot be created.
pub(crate) fn transport(config: &EtsyConfig) -> Result<reqwest::Client, ConfigError> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(user_agent(config));
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ConfigError::HttpClient {
        reason: e.to_string(),
    })
}

/// Authenticated client for the Etsy Open API v3.
///
/// The client keeps the current [`TokenSet`] behind an async mutex. Before
/// each call the expiry is checked; a stale token is refreshed first, and
/// the refreshed triple is handed to the optional refresh callback. Two
/// tasks racing on a stale token trigger a single refresh.
///
/// # Thread Safety
///
/// `EtsyClient` is `Send + Sync`; share it across tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use etsy_api::{ApiKey, EtsyClient, EtsyConfig, QueryParams};
///
/// let config = EtsyConfig::builder()
///     .api_key(ApiKey::new("my-keystring")?)
///     .build()?;
///
/// let client = EtsyClient::builder()
///     .config(config)
///     .access_token("12345678.access")
///     .refresh_token("12345678.refresh")
///     .expiry(Utc::now() + Duration::hours(1))
///     .on_refresh(|access, refresh, expiry| {
///         save_tokens(access, refresh, expiry);
///     })
///     .build()?;
///
/// let response = client.get("/shops/42", &QueryParams::new()).await?;
/// println!("{}", response.message);
/// ```
pub struct EtsyClient {
    http: reqwest::Client,
    config: EtsyConfig,
    tokens: Mutex<TokenSet>,
    user_id: String,
    on_refresh: Option<RefreshCallback>,
}

// Verify EtsyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyClient>();
};

impl EtsyClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> EtsyClientBuilder {
        EtsyClientBuilder::new()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EtsyConfig {
        &self.config
    }

    /// Returns the user id derived from the access token at construction.
    ///
    /// The value does not change when the token is refreshed.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns a copy of the current token set.
    pub async fn tokens(&self) -> TokenSet {
        self.tokens.lock().await.clone()
    }

    /// Refreshes the access token now, regardless of its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError::Request`] with status 401 if the token endpoint
    /// rejects the refresh; the current tokens are kept.
    pub async fn refresh_access_token(&self) -> Result<TokenSet, EtsyError> {
        let mut tokens = self.tokens.lock().await;
        self.refresh_locked(&mut tokens).await
    }

    /// Sends a call to the Etsy API.
    ///
    /// `path` is appended to the environment's request URL. `query` is
    /// applied to GET calls only. POST, PUT and PATCH need a payload; GET
    /// and DELETE ignore one.
    ///
    /// # Errors
    ///
    /// - [`EtsyError::InvalidRequest`] if the payload does not suit the
    ///   method or a file part cannot be encoded; nothing is sent and no
    ///   refresh happens
    /// - [`EtsyError::Request`] if the API answers with an error status, or
    ///   a needed refresh is rejected
    /// - [`EtsyError::Network`] if the call cannot be completed or the
    ///   response body cannot be read
    pub async fn make_request(
        &self,
        path: &str,
        method: HttpMethod,
        payload: Option<Payload<'_>>,
        query: &QueryParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        verify(method, payload.as_ref())?;
        let body = Self::shape_body(method, payload)?;

        let access_token = self.current_access_token().await?;
        let url = self.config.environment().request_url().join(path);

        tracing::debug!("Sending {} request to {}", method, path);

        let builder = match method {
            HttpMethod::Get => self.http.get(query.apply_to(&url)),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Patch => self.http.patch(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder
            .bearer_auth(&access_token)
            .header("x-api-key", self.config.api_key().as_ref())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text().await?;

        Ok(classify(status, headers, &body)?)
    }

    /// Sends a GET call.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<ResponseEnvelope, EtsyError> {
        self.make_request(path, HttpMethod::Get, None, query).await
    }

    /// Sends a POST call.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn post(&self, path: &str, payload: Payload<'_>) -> Result<ResponseEnvelope, EtsyError> {
        self.make_request(path, HttpMethod::Post, Some(payload), &QueryParams::new())
            .await
    }

    /// Sends a PUT call.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn put(&self, path: &str, payload: Payload<'_>) -> Result<ResponseEnvelope, EtsyError> {
        self.make_request(path, HttpMethod::Put, Some(payload), &QueryParams::new())
            .await
    }

    /// Sends a PATCH call.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn patch(&self, path: &str, payload: Payload<'_>) -> Result<ResponseEnvelope, EtsyError> {
        self.make_request(path, HttpMethod::Patch, Some(payload), &QueryParams::new())
            .await
    }

    /// Sends a DELETE call.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete(&self, path: &str) -> Result<ResponseEnvelope, EtsyError> {
        self.make_request(path, HttpMethod::Delete, None, &QueryParams::new())
            .await
    }

    /// Returns a usable access token, refreshing first if the current one
    /// is stale.
    async fn current_access_token(&self) -> Result<String, EtsyError> {
        let mut tokens = self.tokens.lock().await;
        if tokens.is_stale() {
            self.refresh_locked(&mut tokens).await?;
        }
        Ok(tokens.access_token.clone())
    }

    /// Runs the refresh grant and stores the result. The caller holds the
    /// token lock.
    async fn refresh_locked(&self, tokens: &mut TokenSet) -> Result<TokenSet, EtsyError> {
        let fresh =
            token_refresh::refresh_access_token(&self.http, &self.config, &tokens.refresh_token)
                .await?;
        *tokens = fresh.clone();

        tracing::info!(
            "Refreshed access token for user {}, valid until {}",
            self.user_id,
            fresh.expiry
        );

        if let Some(callback) = &self.on_refresh {
            callback(&fresh.access_token, &fresh.refresh_token, fresh.expiry);
        }
        Ok(fresh)
    }

    /// Turns a verified payload into the body for `method`. GET and DELETE
    /// never carry a body.
    fn shape_body(
        method: HttpMethod,
        payload: Option<Payload<'_>>,
    ) -> Result<RequestBody, InvalidRequestError> {
        let body = match payload {
            Some(payload) if !method.requires_payload() => {
                tracing::debug!("Ignoring {} payload on {} request", payload.kind(), method);
                RequestBody::Empty
            }
            Some(Payload::Json(request)) => RequestBody::Json(Value::Object(request.to_wire())),
            Some(Payload::File(upload)) => RequestBody::Multipart(multipart_form(upload)?),
            None => RequestBody::Empty,
        };
        Ok(body)
    }
}

/// Body of an outgoing call.
enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl fmt::Debug for EtsyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtsyClient")
            .field("config", &self.config)
            .field("user_id", &self.user_id)
            .field("on_refresh", &self.on_refresh.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the multipart body of an upload.
///
/// Raw parts are named after their field, as browsers do for unnamed blobs.
fn multipart_form(upload: &FileRequest) -> Result<Form, InvalidRequestError> {
    let mut form = Form::new();
    for (name, value) in upload.form_fields() {
        form = form.text(name.to_string(), value.to_string());
    }
    for (name, part) in upload.file() {
        let part = match part {
            FilePart::Bytes(bytes) => Part::bytes(bytes.clone()).file_name(name.clone()),
            FilePart::Named {
                filename,
                bytes,
                content_type,
            } => Part::bytes(bytes.clone())
                .file_name(filename.clone())
                .mime_str(content_type)
                .map_err(|e| InvalidRequestError::InvalidFilePart {
                    field: name.clone(),
                    reason: e.to_string(),
                })?,
        };
        form = form.part(name.clone(), part);
    }
    Ok(form)
}

/// Builder for [`EtsyClient`].
///
/// `config`, `access_token`, `refresh_token` and `expiry` are required
/// (the last three can be set together with [`tokens`](Self::tokens)).
#[derive(Default)]
pub struct EtsyClientBuilder {
    config: Option<EtsyConfig>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    expiry: Option<DateTime<Utc>>,
    on_refresh: Option<RefreshCallback>,
}

impl EtsyClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration (required).
    #[must_use]
    pub fn config(mut self, config: EtsyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the refresh token (required).
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Sets the access token expiry (required).
    ///
    /// Naive timestamps are taken as UTC; zoned ones are converted.
    #[must_use]
    pub fn expiry(mut self, expiry: impl IntoUtc) -> Self {
        self.expiry = Some(expiry.into_utc());
        self
    }

    /// Sets access token, refresh token and expiry from a [`TokenSet`].
    #[must_use]
    pub fn tokens(self, tokens: TokenSet) -> Self {
        self.access_token(tokens.access_token)
            .refresh_token(tokens.refresh_token)
            .expiry(tokens.expiry)
    }

    /// Registers the refresh callback, replacing any earlier one.
    #[must_use]
    pub fn on_refresh<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &str, DateTime<Utc>) + Send + Sync + 'static,
    {
        self.on_refresh = Some(Arc::new(callback));
        self
    }

    /// Builds the [`EtsyClient`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if a required field is unset
    /// - [`ConfigError::EmptyAccessToken`] / [`ConfigError::EmptyRefreshToken`]
    ///   for empty tokens
    /// - [`ConfigError::HttpClient`] if the transport cannot be created
    pub fn build(self) -> Result<EtsyClient, ConfigError> {
        let config = self
            .config
            .ok_or(ConfigError::MissingRequiredField { field: "config" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let refresh_token = self
            .refresh_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "refresh_token",
            })?;
        let expiry = self
            .expiry
            .ok_or(ConfigError::MissingRequiredField { field: "expiry" })?;

        if access_token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        if refresh_token.trim().is_empty() {
            return Err(ConfigError::EmptyRefreshToken);
        }

        let tokens = TokenSet::new(access_token, refresh_token, expiry);
        let user_id = tokens.user_id().to_string();

        Ok(EtsyClient {
            http: transport(&config)?,
            config,
            tokens: Mutex::new(tokens),
            user_id,
            on_refresh: self.on_refresh,
        })
    }
}

impl fmt::Debug for EtsyClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtsyClientBuilder")
            .field("config", &self.config)
            .field("expiry", &self.expiry)
            .field("on_refresh", &self.on_refresh.is_some())
            .finish_non_exhaustive()
    }
}

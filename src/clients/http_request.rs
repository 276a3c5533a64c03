//! Request-side types for the dispatcher: methods, payloads and query
//! parameters.

use std::fmt;

use crate::clients::errors::InvalidRequestError;
use crate::models::{FileRequest, RequestContract};

/// HTTP methods supported by the Etsy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that must carry a payload.
    #[must_use]
    pub const fn requires_payload(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The body of a call.
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    /// A request contract, sent as JSON.
    Json(&'a dyn RequestContract),
    /// An upload, sent as multipart form data.
    File(&'a FileRequest),
}

impl<'a> Payload<'a> {
    /// Wraps a request contract.
    #[must_use]
    pub fn json<T: RequestContract>(request: &'a T) -> Self {
        Self::Json(request)
    }

    /// Wraps an upload.
    #[must_use]
    pub fn file<T: AsRef<FileRequest>>(upload: &'a T) -> Self {
        Self::File(upload.as_ref())
    }

    /// Returns the payload kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::File(_) => "file",
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(request) => write!(f, "Json({})", request.contract_name()),
            Self::File(upload) => f.debug_tuple("File").field(upload).finish(),
        }
    }
}

/// Checks that `payload` can be sent with `method`.
///
/// GET and DELETE accept anything (the payload is ignored). POST accepts
/// either kind. PUT and PATCH accept only JSON.
///
/// # Errors
///
/// Returns [`InvalidRequestError::MissingPayload`] or
/// [`InvalidRequestError::UnsupportedPayload`].
pub fn verify(method: HttpMethod, payload: Option<&Payload<'_>>) -> Result<(), InvalidRequestError> {
    match (method, payload) {
        (HttpMethod::Get | HttpMethod::Delete, _)
        | (HttpMethod::Post, Some(_))
        | (HttpMethod::Put | HttpMethod::Patch, Some(Payload::Json(_))) => Ok(()),
        (_, None) => Err(InvalidRequestError::MissingPayload {
            method: method.to_string(),
        }),
        (_, Some(payload)) => Err(InvalidRequestError::UnsupportedPayload {
            method: method.to_string(),
            payload: payload.kind().to_string(),
        }),
    }
}

/// Query parameters for a GET call.
///
/// Parameters keep their insertion order. A parameter added with no value
/// is recorded but never sent.
///
/// # Example
///
/// ```rust
/// use etsy_api::QueryParams;
///
/// let query = QueryParams::new()
///     .param("limit", 25)
///     .opt_param("offset", None::<u32>)
///     .param("keywords", "blue mug");
///
/// assert_eq!(query.to_query_string(), "limit=25&keywords=blue%20mug");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter with a value.
    #[must_use]
    pub fn param(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.opt_param(key, Some(value))
    }

    /// Adds a parameter that may be absent.
    #[must_use]
    pub fn opt_param<T: ToString>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
        self.params
            .push((key.into(), value.as_ref().map(ToString::to_string)));
        self
    }

    /// Returns `true` if no parameter carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Iterates the parameters that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
    }

    /// Encodes the present parameters as `k=v&k=v`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.present()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the query string to `url`; returns `url` unchanged if no
    /// parameter carries a value.
    #[must_use]
    pub fn apply_to(&self, url: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            url.to_string()
        } else {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}{query}")
        }
    }
}

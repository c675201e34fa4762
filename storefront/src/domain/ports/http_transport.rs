//! Driven port for sending one HTTP request to the backend origin.
//!
//! The gateway owns auth, status classification and payload decoding; a
//! transport only moves bytes and reports whether a response arrived.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP verbs used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case method token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request handed to a transport after all decorators ran.
///
/// ## Invariants
/// - Header names are stored lower-cased so lookups are case-insensitive.
/// - `path` is relative to the configured origin and starts with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    method: HttpMethod,
    path: String,
    headers: BTreeMap<String, String>,
    body: Option<Value>,
}

impl OutboundRequest {
    /// Start a request without headers or body.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::ports::{HttpMethod, OutboundRequest};
    ///
    /// let mut request = OutboundRequest::new(HttpMethod::Get, "api/products");
    /// request.set_header("Content-Type", "application/json");
    /// assert_eq!(request.path(), "/api/products");
    /// assert_eq!(request.header("content-type"), Some("application/json"));
    /// ```
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let raw = path.into();
        let path = if raw.starts_with('/') {
            raw
        } else {
            format!("/{raw}")
        };
        Self {
            method,
            path,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Insert or replace a header.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// HTTP verb.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Origin-relative path.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// All headers, lower-cased names in sorted order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Raw response as received from the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from a status and body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors surfaced by transport adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No response was received (DNS, connect, reset, timeout).
    #[error("no response received: {message}")]
    NoResponse {
        /// Adapter diagnostic.
        message: String,
    },
    /// The request could not be constructed locally.
    #[error("request could not be built: {message}")]
    InvalidRequest {
        /// Adapter diagnostic.
        message: String,
    },
}

impl TransportError {
    /// Helper for failures where nothing came back.
    pub fn no_response(message: impl Into<String>) -> Self {
        Self::NoResponse {
            message: message.into(),
        }
    }

    /// Helper for local request construction failures.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Port for exchanging one request/response pair with the origin.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return whatever the origin answered, including
    /// non-2xx statuses.
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError>;
}

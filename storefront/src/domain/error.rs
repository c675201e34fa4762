//! Closed error taxonomy raised by the HTTP gateway.
//!
//! Callers pattern-match on [`ApiError`] instead of probing error shape. The
//! gateway never swallows one of these; the only unsolicited action it takes
//! is the forced logout on `401`, which happens in addition to returning
//! [`ApiError::Http`].

use thiserror::Error;

/// Fixed message reported when no response reached the client.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Default message reported when a request could not be constructed.
pub const CONFIG_ERROR_MESSAGE: &str = "Request configuration error.";

/// Failure categories surfaced by every gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was sent (or attempted) but no response arrived: DNS,
    /// connect, reset or timeout.
    #[error("{message}")]
    Network {
        /// Human-readable description, normally [`NETWORK_ERROR_MESSAGE`].
        message: String,
    },
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Server supplied `message`, or a synthesized status line.
        message: String,
    },
    /// The request could not be built from local configuration.
    #[error("{message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
    /// A successful response carried a body that does not match the
    /// requested payload type.
    #[error("invalid response payload: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

impl ApiError {
    /// Network failure carrying the fixed user-facing message.
    pub fn network() -> Self {
        Self::Network {
            message: NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }

    /// HTTP failure for `status` with an explicit message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// HTTP failure whose message is synthesized from the status code.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::ApiError;
    ///
    /// let err = ApiError::http_status(503);
    /// assert_eq!(err.to_string(), "HTTP error! status: 503");
    /// ```
    pub fn http_status(status: u16) -> Self {
        Self::http(status, format!("HTTP error! status: {status}"))
    }

    /// Configuration failure with the default message.
    pub fn config() -> Self {
        Self::config_with(CONFIG_ERROR_MESSAGE)
    }

    /// Configuration failure with a specific message.
    pub fn config_with(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Payload decoding failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status attached to the error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network { .. } | Self::Config { .. } | Self::Decode { .. } => None,
        }
    }

    /// Whether the backend rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Stable label used in structured logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Http { .. } => "http",
            Self::Config { .. } => "config",
            Self::Decode { .. } => "decode",
        }
    }
}

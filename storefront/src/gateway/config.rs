//! Validated gateway endpoint settings.

use std::time::Duration;

use url::Url;

use crate::domain::ApiError;

/// Backend origin used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout applied to every call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Base origin and timeout shared by every request.
///
/// ## Invariants
/// - `base_url` is an absolute `http` or `https` URL that can carry paths.
/// - `timeout` is non-zero.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use storefront::gateway::GatewayConfig;
///
/// let config = GatewayConfig::new("http://api.example.com:8080/", Duration::from_secs(3))
///     .expect("valid origin");
/// assert_eq!(config.origin(), "http://api.example.com:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: Url,
    timeout: Duration,
}

impl GatewayConfig {
    /// Validate `base_url` and `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the URL does not parse, is not
    /// `http`/`https`, or the timeout is zero.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url.trim()).map_err(|error| {
            ApiError::config_with(format!("invalid base URL {base_url:?}: {error}"))
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::config_with(format!(
                "base URL {base_url:?} must be an absolute http(s) URL"
            )));
        }
        if timeout.is_zero() {
            return Err(ApiError::config_with("request timeout must be non-zero"));
        }
        Ok(Self {
            base_url: parsed,
            timeout,
        })
    }

    /// Configuration pointing at [`DEFAULT_BASE_URL`] with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`GatewayConfig::new`].
    pub fn local() -> Result<Self, ApiError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Parsed base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Base URL without a trailing slash, used to resolve asset paths.
    pub fn origin(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for `path`, appended verbatim to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the joined string is not a URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.origin(), path.trim_start_matches('/'));
        Url::parse(&joined)
            .map_err(|error| ApiError::config_with(format!("invalid request URL {joined:?}: {error}")))
    }
}

//! Storefront configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ApiError;
use crate::gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayConfig};

const DEFAULT_SESSION_DIR: &str = ".storefront";

/// Configuration values controlling how the storefront reaches its backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Backend origin, for example `http://localhost:8080`.
    pub api_base_url: Option<String>,
    /// Directory holding the persisted session record.
    pub session_dir: Option<PathBuf>,
    /// Per-request timeout in whole seconds.
    pub request_timeout_secs: Option<u64>,
}

impl StorefrontSettings {
    /// Return the configured backend origin, falling back to the default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Return the configured session directory, falling back to the default.
    pub fn session_dir(&self) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR))
    }

    /// Return the configured request timeout, falling back to ten seconds.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }

    /// Validated gateway settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the origin or timeout is unusable.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ApiError> {
        GatewayConfig::new(self.api_base_url(), self.request_timeout())
    }
}

//! Runtime configuration
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML file, then environment variables.
//!
//! ```toml
//! api_base_url = "https://api.aricon.example"
//! request_timeout_secs = 20
//! log_level = "debug"
//!
//! [endpoints]
//! session = "/api/session-details"
//! ```

use crate::error::{AdminError, AdminResult, ResultExt};
use crate::traits::Validatable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "ARICON_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "ARICON_REQUEST_TIMEOUT_SECS";

/// Environment variable pointing at a TOML config file
pub const ENV_CONFIG_PATH: &str = "ARICON_CONFIG";

/// Environment variable holding the log filter
pub const ENV_LOG: &str = "RUST_LOG";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "aricon.toml";

const MAX_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL every resource path is joined onto
    pub api_base_url: String,

    /// Upper bound on a single request, in seconds
    pub request_timeout_secs: u64,

    /// `tracing` filter directive
    pub log_level: String,

    /// Per-entity endpoint overrides, keyed by entity slug
    pub endpoints: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            endpoints: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text, filling gaps with defaults
    pub fn from_toml_str(text: &str) -> AdminResult<Self> {
        let config: AppConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> AdminResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AdminError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text).with_context(format!("Parsing {}", path.display()))
    }

    /// Resolve the full configuration from file and process environment
    pub fn load() -> AdminResult<Self> {
        let explicit = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(&path)?
        } else if let Some(missing) = explicit {
            return Err(AdminError::ConfigRead {
                path: missing,
                message: "file does not exist".to_string(),
            });
        } else {
            debug!("No config file found, using defaults");
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(e) => warn!(
                    "Invalid {ENV_TIMEOUT} value '{raw}': {e}, keeping {}",
                    self.request_timeout_secs
                ),
            }
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.log_level = filter;
        }
    }

    /// Builder-style base URL override
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder-style endpoint override
    pub fn with_endpoint(mut self, slug: impl Into<String>, path: impl Into<String>) -> Self {
        self.endpoints.insert(slug.into(), path.into());
        self
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Endpoint override for an entity slug, if configured
    pub fn endpoint_override(&self, slug: &str) -> Option<&str> {
        self.endpoints.get(slug).map(String::as_str)
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> AdminResult<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(AdminError::config("api_base_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AdminError::config(format!(
                "api_base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AdminError::config(format!(
                "request_timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }
        for (slug, path) in &self.endpoints {
            if !path.starts_with('/') {
                return Err(AdminError::config(format!(
                    "endpoint for '{slug}' must start with '/'"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Fluent builder for `ClassifyConfig`
//!
//! Every field has a default, so `ClassifyConfig::builder().build()` is always
//! valid; `build()` only rejects values that would make every lookup fail.

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use super::types::{ClassifyConfig, LinkBudget, SiteEndpoints};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL does not parse or is not http(s)
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP timeout must be at least one second")]
    ZeroTimeout,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ClassifyConfigBuilder {
    pub(crate) config: ClassifyConfig,
}

impl ClassifyConfig {
    /// Create a builder for configuring a `ClassifyConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ClassifyConfigBuilder {
        ClassifyConfigBuilder::default()
    }

    /// Continue building from an existing configuration (e.g. one loaded from disk)
    #[must_use]
    pub fn to_builder(&self) -> ClassifyConfigBuilder {
        ClassifyConfigBuilder {
            config: self.clone(),
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults. The result is validated the
    /// same way `ClassifyConfigBuilder::build` validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains invalid values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.to_builder().build()
    }
}

impl ClassifyConfigBuilder {
    #[must_use]
    pub fn endpoints(mut self, endpoints: SiteEndpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    /// Rebase all default endpoints onto another origin
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.config.endpoints.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn link_budget(mut self, budget: LinkBudget) -> Self {
        self.config.link_budget = budget;
        self
    }

    #[must_use]
    pub fn isbn_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.isbn_catalog = path.into();
        self
    }

    #[must_use]
    pub fn title_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.title_catalog = path.into();
        self
    }

    #[must_use]
    pub fn http_timeout_secs(mut self, secs: u64) -> Self {
        self.config.http_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// HTTP timeout is zero.
    pub fn build(self) -> Result<ClassifyConfig, ConfigError> {
        let base = &self.config.endpoints.base_url;
        let parsed = Url::parse(base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.config.http_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(self.config)
    }
}

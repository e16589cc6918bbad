//! Core configuration types for LCC lookups
//!
//! This module contains `ClassifyConfig` together with the two value types it
//! is made of: the remote site's endpoint fragments (`SiteEndpoints`) and the
//! fallback crawl bound (`LinkBudget`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::{
    AUTHOR_SEPARATOR, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_ISBN_CATALOG,
    DEFAULT_LINK_LIMIT, DEFAULT_TITLE_CATALOG, DEFAULT_USER_AGENT, ISBN_SEARCH_PATH,
    RECORD_LINK_MARKER, TITLE_AUTHOR_SUFFIX, TITLE_SEARCH_PATH,
};

/// Main configuration for a lookup session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    pub(crate) endpoints: SiteEndpoints,
    pub(crate) link_budget: LinkBudget,
    pub(crate) isbn_catalog: PathBuf,
    pub(crate) title_catalog: PathBuf,

    /// Timeout in seconds applied to every blocking HTTP request
    ///
    /// There is no retry; a request that times out is reported like any
    /// other connectivity failure.
    ///
    /// Default: 30 seconds
    pub(crate) http_timeout_secs: u64,

    pub(crate) user_agent: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            endpoints: SiteEndpoints::default(),
            link_budget: LinkBudget::default(),
            isbn_catalog: PathBuf::from(DEFAULT_ISBN_CATALOG),
            title_catalog: PathBuf::from(DEFAULT_TITLE_CATALOG),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// URL fragments of the remote classification site
///
/// Search URLs are produced by plain concatenation of these fragments, so the
/// values must already be in the exact form the site expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteEndpoints {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    pub isbn_search_path: String,
    pub title_search_path: String,
    pub author_separator: String,
    pub title_author_suffix: String,
    /// Substring identifying links to individual work records
    pub record_link_marker: String,
}

impl Default for SiteEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            isbn_search_path: ISBN_SEARCH_PATH.to_string(),
            title_search_path: TITLE_SEARCH_PATH.to_string(),
            author_separator: AUTHOR_SEPARATOR.to_string(),
            title_author_suffix: TITLE_AUTHOR_SUFFIX.to_string(),
            record_link_marker: RECORD_LINK_MARKER.to_string(),
        }
    }
}

impl SiteEndpoints {
    /// Default endpoints rebased onto another origin (e.g. a local test server)
    #[must_use]
    pub fn with_base(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn isbn_search_prefix(&self) -> String {
        format!("{}{}", self.base_url, self.isbn_search_path)
    }

    #[must_use]
    pub fn title_search_prefix(&self) -> String {
        format!("{}{}", self.base_url, self.title_search_path)
    }
}

/// Upper bound on the number of candidate record links visited per lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkBudget {
    Limited(usize),
    Unbounded,
}

impl Default for LinkBudget {
    fn default() -> Self {
        Self::Limited(DEFAULT_LINK_LIMIT)
    }
}

impl LinkBudget {
    /// Number of links visited out of `available` candidates
    #[must_use]
    pub fn visits(self, available: usize) -> usize {
        match self {
            Self::Limited(limit) => limit.min(available),
            Self::Unbounded => available,
        }
    }
}

impl fmt::Display for LinkBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(limit) => write!(f, "{limit}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl FromStr for LinkBudget {
    type Err = String;

    /// Accepts a non-negative count, or `unbounded` / `all` / `-1` for no limit
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "unbounded" | "all" | "-1" => Ok(Self::Unbounded),
            other => other
                .parse::<usize>()
                .map(Self::Limited)
                .map_err(|_| format!("invalid link limit '{s}': expected a count or 'unbounded'")),
        }
    }
}

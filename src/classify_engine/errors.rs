//! Error types for page fetching

use thiserror::Error;

/// Why a page could not be fetched
///
/// None of these abort a lookup: the orchestrator downgrades a failed first
/// page to a "not found" record and skips a failed candidate page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// DNS, connect, TLS or timeout failure
    #[error("Unable to access {url}: {reason}")]
    Connectivity { url: String, reason: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response arrived but its body could not be read as text
    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },
}

impl FetchError {
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Connectivity { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

//! Getter methods for `ClassifyConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{ClassifyConfig, LinkBudget, SiteEndpoints};

impl ClassifyConfig {
    #[must_use]
    pub fn endpoints(&self) -> &SiteEndpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn link_budget(&self) -> LinkBudget {
        self.link_budget
    }

    #[must_use]
    pub fn isbn_catalog(&self) -> &Path {
        &self.isbn_catalog
    }

    #[must_use]
    pub fn title_catalog(&self) -> &Path {
        &self.title_catalog
    }

    #[must_use]
    pub fn http_timeout_secs(&self) -> u64 {
        self.http_timeout_secs
    }

    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

//! Page fetching
//!
//! The orchestrator only needs "URL in, HTML text out". `PageFetcher` is that
//! seam; `HttpFetcher` is the blocking reqwest implementation used by the
//! binary, and any `Fn(&str) -> Result<String, FetchError>` works in tests.

use log::debug;
use reqwest::blocking::Client;

use super::errors::FetchError;
use crate::config::ClassifyConfig;

/// Fetches the HTML text at a URL
pub trait PageFetcher {
    /// # Errors
    ///
    /// Returns a `FetchError` when the page cannot be retrieved.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// Blocking HTTP GET fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the configured timeout and user agent
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &ClassifyConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(target: "classify_lcc::fetch", "GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Connectivity {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        debug!(target: "classify_lcc::fetch", "{} bytes from {url}", body.len());
        Ok(body)
    }
}

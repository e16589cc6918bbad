pub mod catalog;
pub mod classify_engine;
pub mod config;
pub mod confirm;
pub mod page_extractor;
pub mod query;
pub mod session;
pub mod utils;

pub use catalog::{Catalog, CatalogError, CatalogKind, CatalogRow};
pub use classify_engine::{FetchError, HttpFetcher, LookupEngine, PageFetcher, SearchProgress};
pub use config::{ClassifyConfig, ClassifyConfigBuilder, ConfigError, LinkBudget, SiteEndpoints};
pub use confirm::{Confirm, Console};
pub use page_extractor::{BibliographicRecord, extract_record, validate_info};
pub use query::{IsbnError, SearchQuery, validate_isbn};
pub use session::{LookupMode, Session, SessionSummary};

/// Run one lookup over HTTP with the configured endpoints and link budget.
///
/// Returns the empty record when nothing valid was confirmed.
///
/// # Errors
///
/// Fails only if the HTTP client cannot be constructed.
pub fn lookup<C: Confirm + ?Sized>(
    config: &ClassifyConfig,
    query: &SearchQuery,
    confirm: &mut C,
) -> Result<BibliographicRecord, reqwest::Error> {
    let engine = LookupEngine::new(config, HttpFetcher::new(config)?);
    Ok(engine.search(query, confirm))
}

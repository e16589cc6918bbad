//! Classify Engine Module
//!
//! This module contains the lookup-and-disambiguation engine: fetching
//! classify pages, extracting records from them, and walking candidate links
//! when the first page is not an accepted hit.

// Sub-modules
pub mod errors;
pub mod fetcher;
pub mod progress;
pub mod search;

// Re-exports for public API
pub use errors::FetchError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use progress::SearchProgress;
pub use search::{LookupEngine, search};

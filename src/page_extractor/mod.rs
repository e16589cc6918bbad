//! Page data extraction functions.
//!
//! This module turns fetched classify pages into data: bibliographic records
//! from work pages, and candidate record links from search-result listings.

// Sub-modules
pub mod extractors;
pub mod links;
pub mod record;

// Re-exports for public API
pub use extractors::{extract_from_fragments, extract_record, visible_fragments};
pub use links::{CandidateLink, collect_candidate_links};
pub use record::{BibliographicRecord, validate_info};

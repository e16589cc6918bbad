//! Progress events emitted during a lookup
//!
//! The orchestrator reports these to its `Confirm` implementation through
//! `Confirm::notify`, so an interactive front end can keep the operator
//! informed while a search walks candidate pages. The default `notify`
//! ignores them.

use super::errors::FetchError;

/// Represents a lookup progress update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchProgress {
    /// A page could not be fetched
    FetchFailed(FetchError),
    /// The first page was not an accepted record; `visiting` of `found`
    /// candidate links will be tried
    CandidatesFound { found: usize, visiting: usize },
    /// A candidate page was invalid or rejected; moving to the next one
    SearchingOtherOptions,
}

//! Bibliographic record and its acceptance check

use serde::{Deserialize, Serialize};

use crate::utils::MIN_LCC_LEN;

/// Title, author and LCC call number scraped from one record page
///
/// Every field may be empty, meaning "absent". A record is never patched in
/// place; each page produces a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibliographicRecord {
    pub title: String,
    pub author: String,
    pub lcc: String,
}

impl BibliographicRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, lcc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            lcc: lcc.into(),
        }
    }

    /// The "not found" record
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.lcc.is_empty()
    }

    /// Whether the record is complete enough to show to the operator.
    ///
    /// See [`validate_info`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_info(self)
    }
}

/// A record passes when it has a title and an LCC longer than three characters.
///
/// The author is never checked; many records legitimately lack one. Length is
/// counted in characters, not bytes.
#[must_use]
pub fn validate_info(record: &BibliographicRecord) -> bool {
    !record.title.is_empty() && record.lcc.chars().count() > MIN_LCC_LEN
}

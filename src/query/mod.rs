//! Search queries and the URLs they map to
//!
//! A lookup is driven by exactly one `SearchQuery`: either a standard number
//! (ISBN) or a title/author pair.

pub mod isbn;
pub mod url_builder;

pub use isbn::{IsbnError, clean_isbn_input, is_valid_isbn, validate_isbn};
pub use url_builder::{build_isbn_url, build_title_author_url};

use std::fmt;

use crate::config::SiteEndpoints;

/// What to search the remote catalog for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    ByIsbn { isbn: String },
    ByTitleAuthor { title: String, author: String },
}

impl SearchQuery {
    #[must_use]
    pub fn isbn(isbn: impl Into<String>) -> Self {
        Self::ByIsbn { isbn: isbn.into() }
    }

    #[must_use]
    pub fn title_author(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::ByTitleAuthor {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Initial search URL for this query
    #[must_use]
    pub fn search_url(&self, endpoints: &SiteEndpoints) -> String {
        match self {
            Self::ByIsbn { isbn } => build_isbn_url(endpoints, isbn),
            Self::ByTitleAuthor { title, author } => build_title_author_url(endpoints, title, author),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByIsbn { isbn } => write!(f, "ISBN {isbn}"),
            Self::ByTitleAuthor { title, author } => write!(f, "\"{title}\" by {author}"),
        }
    }
}

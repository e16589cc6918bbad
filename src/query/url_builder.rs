//! Search URL construction
//!
//! URLs are built by concatenation. Only spaces in the title and author are
//! escaped (as `%20`); every other character is passed through as typed,
//! because the site's tolerance for other escapes has never been pinned down.

use crate::config::SiteEndpoints;

/// ISBN search URL: the standard-number prefix followed by the raw ISBN.
///
/// No validation happens here; callers run `validate_isbn` first.
#[must_use]
pub fn build_isbn_url(endpoints: &SiteEndpoints, isbn: &str) -> String {
    let mut url = endpoints.isbn_search_prefix();
    url.push_str(isbn);
    url
}

/// Title/author search URL
#[must_use]
pub fn build_title_author_url(endpoints: &SiteEndpoints, title: &str, author: &str) -> String {
    format!(
        "{}{}{}{}{}",
        endpoints.title_search_prefix(),
        escape_spaces(title),
        endpoints.author_separator,
        escape_spaces(author),
        endpoints.title_author_suffix
    )
}

fn escape_spaces(s: &str) -> String {
    s.replace(' ', "%20")
}

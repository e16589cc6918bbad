//! ISBN input cleanup and format validation
//!
//! Only the shape is checked (10 digits with an optional trailing `X`, or 13
//! digits). Check digits are not verified; the remote catalog is the judge of
//! whether a well-formed number exists.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static ISBN10_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9]{9}[0-9X]$").expect("BUG: hardcoded ISBN-10 regex is invalid")
});

static ISBN13_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("BUG: hardcoded ISBN-13 regex is invalid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsbnError {
    #[error("ISBN is not valid. It should contain 10 or 13 characters.")]
    InvalidFormat { input: String },
}

/// Strip all whitespace and hyphens from an operator-typed ISBN
///
/// `"0-13-110362 8"` becomes `"0131103628"`.
#[must_use]
pub fn clean_isbn_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[must_use]
pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN10_RE.is_match(isbn) || ISBN13_RE.is_match(isbn)
}

/// Validate an already-cleaned ISBN
///
/// # Errors
///
/// Returns `IsbnError::InvalidFormat` if the input is neither an ISBN-10 nor
/// an ISBN-13 shape.
pub fn validate_isbn(isbn: &str) -> Result<(), IsbnError> {
    if is_valid_isbn(isbn) {
        Ok(())
    } else {
        Err(IsbnError::InvalidFormat {
            input: isbn.to_string(),
        })
    }
}

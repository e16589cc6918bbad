//! Display-side string transforms
//!
//! Titles and authors scraped from the record pages regularly carry accented
//! or typographic characters that some terminals render poorly. These helpers
//! fold them to ASCII before they are shown to the operator; stored values are
//! never rewritten.

use unicode_normalization::UnicodeNormalization;

/// Fold a string to its closest ASCII form.
///
/// Applies compatibility decomposition (NFKD), which splits accented letters
/// into base letter + combining mark and expands ligatures, then drops every
/// character that is still outside ASCII.
///
/// # Examples
/// ```
/// # use classify_lcc::utils::string_utils::to_ascii_lossy;
/// assert_eq!(to_ascii_lossy("Gödel, Escher, Bach"), "Godel, Escher, Bach");
/// assert_eq!(to_ascii_lossy("ﬁnal"), "final");
/// assert_eq!(to_ascii_lossy("日本"), "");
/// ```
#[must_use]
pub fn to_ascii_lossy(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

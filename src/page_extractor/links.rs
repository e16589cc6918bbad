//! Candidate record link collection
//!
//! A search-results listing links to each matching work through an internal
//! URL carrying the record-link marker. Those hrefs are the only candidates
//! the fallback search will visit.

use log::{debug, warn};
use scraper::{Html, Selector};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

/// Relative (or absolute) href of a work record page, as written in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink(String);

impl CandidateLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the site origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the base or the joined URL does not parse.
    pub fn resolve(&self, base_url: &str) -> Result<Url, url::ParseError> {
        Url::parse(base_url)?.join(&self.0)
    }
}

impl fmt::Display for CandidateLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect hrefs containing `marker`, in document order, duplicates kept.
#[must_use]
pub fn collect_candidate_links(html: &str, marker: &str) -> Vec<CandidateLink> {
    if marker.is_empty() {
        warn!(
            target: "classify_lcc::links",
            "Empty record-link marker; refusing to treat every link as a candidate"
        );
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let links: Vec<CandidateLink> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(marker))
        .map(CandidateLink::new)
        .collect();

    debug!(
        target: "classify_lcc::links",
        "Found {} candidate record links",
        links.len()
    );
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::RECORD_LINK_MARKER;

    const LISTING: &str = r#"<html><body>
        <a href="/classify2/">Home</a>
        <a href="/classify2/ClassifyDemo?wi=111&amp;owi=1">First</a>
        <a name="anchor-without-href">skip</a>
        <a href="http://example.com/elsewhere">Elsewhere</a>
        <table><tr><td><a href="/classify2/ClassifyDemo?wi=222">Second</a></td></tr></table>
        <a href="/classify2/ClassifyDemo?wi=111&amp;owi=1">First again</a>
        <link href="/classify2/ClassifyDemo?wi=999">
    </body></html>"#;

    #[test]
    fn test_collects_marked_anchors_in_order_with_duplicates() {
        let links = collect_candidate_links(LISTING, RECORD_LINK_MARKER);
        let hrefs: Vec<&str> = links.iter().map(CandidateLink::as_str).collect();
        assert_eq!(
            hrefs,
            vec![
                "/classify2/ClassifyDemo?wi=111&owi=1",
                "/classify2/ClassifyDemo?wi=222",
                "/classify2/ClassifyDemo?wi=111&owi=1",
            ]
        );
    }

    #[test]
    fn test_page_without_candidates() {
        assert!(collect_candidate_links("<p>No results</p>", RECORD_LINK_MARKER).is_empty());
    }

    #[test]
    fn test_empty_marker_collects_nothing() {
        assert!(collect_candidate_links(LISTING, "").is_empty());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = "http://classify.oclc.org";
        let relative = CandidateLink::new("/classify2/ClassifyDemo?wi=222");
        assert_eq!(
            relative.resolve(base).unwrap().as_str(),
            "http://classify.oclc.org/classify2/ClassifyDemo?wi=222"
        );
        let absolute = CandidateLink::new("http://mirror.example/classify2/ClassifyDemo?wi=3");
        assert_eq!(
            absolute.resolve(base).unwrap().as_str(),
            "http://mirror.example/classify2/ClassifyDemo?wi=3"
        );
    }
}

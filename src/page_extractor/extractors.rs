//! Record field extraction from classify work pages
//!
//! The work page has no stable ids or classes around the fields we need, so
//! extraction works on the page's text layout instead of its markup:
//! 1. Reduce the document to its text (script and style bodies excluded)
//! 2. Split on line breaks and drop empty lines, giving ordered fragments
//! 3. Require a `Summary` fragment; listings never have one
//! 4. Read each field at a fixed distance after its label fragment
//!
//! Missing labels produce empty fields. Nothing here returns an error.

use log::debug;
use scraper::{Html, Node};

use super::record::BibliographicRecord;
use crate::utils::{AUTHOR_LABEL, LCC_LABEL, LCC_VALUE_OFFSET, SUMMARY_MARKER, TITLE_LABEL};

/// Elements whose text never renders
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Reduce an HTML document to its ordered, non-empty text lines.
///
/// Lines are not trimmed: a fragment matches a label only if it is exactly
/// that label.
#[must_use]
pub fn visible_fragments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut text = String::with_capacity(html.len() / 2);

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|element| INVISIBLE_ELEMENTS.contains(&element.name()));
        if !hidden {
            text.push_str(fragment);
        }
    }

    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extract title, author and LCC from a fetched page.
///
/// Returns an all-empty record when the page is not a work record page
/// (no `Summary` fragment). Each field is looked up independently.
#[must_use]
pub fn extract_record(html: &str) -> BibliographicRecord {
    let fragments = visible_fragments(html);
    extract_from_fragments(&fragments)
}

/// Field lookup over already-split fragments
#[must_use]
pub fn extract_from_fragments<S: AsRef<str>>(fragments: &[S]) -> BibliographicRecord {
    let Some(summary_at) = position_of(fragments, SUMMARY_MARKER) else {
        debug!(
            target: "classify_lcc::extract",
            "No '{SUMMARY_MARKER}' fragment among {} fragments; not a record page",
            fragments.len()
        );
        return BibliographicRecord::empty();
    };
    let summary = &fragments[summary_at..];

    let record = BibliographicRecord {
        title: value_after(summary, TITLE_LABEL, 1),
        author: value_after(summary, AUTHOR_LABEL, 1),
        lcc: value_after(summary, LCC_LABEL, LCC_VALUE_OFFSET),
    };

    debug!(
        target: "classify_lcc::extract",
        "Extracted title={:?} author={:?} lcc={:?}",
        record.title,
        record.author,
        record.lcc
    );
    record
}

fn position_of<S: AsRef<str>>(fragments: &[S], label: &str) -> Option<usize> {
    fragments.iter().position(|f| f.as_ref() == label)
}

/// Fragment `offset` positions after the first `label`, or empty
fn value_after<S: AsRef<str>>(fragments: &[S], label: &str, offset: usize) -> String {
    position_of(fragments, label)
        .and_then(|at| fragments.get(at + offset))
        .map(|value| value.as_ref().to_string())
        .unwrap_or_default()
}

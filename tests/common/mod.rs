//! Test utilities and page fixtures for the classify_lcc test suite

use classify_lcc::{BibliographicRecord, ClassifyConfig, LinkBudget};
use mockito::{Mock, Server};
use std::path::Path;

/// Path of a work link as the site renders it in result listings
#[allow(dead_code)]
pub fn work_path(id: u32) -> String {
    format!("/classify2/ClassifyDemo?wi={id}")
}

/// A work record page laid out the way classify renders one
#[allow(dead_code)]
pub fn record_page(title: &str, author: &str, lcc: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Classify</title>
<script>
var Summary = "not a label";
</script>
</head>
<body>
<h2>Summary</h2>
<dl>
<dt>Title:</dt>
<dd>{title}</dd>
<dt>Author:</dt>
<dd>{author}</dd>
</dl>
<table>
<tr><th>LCC:</th></tr>
<tr><td>Class Number</td></tr>
<tr><td>Holdings</td></tr>
<tr><td>Links</td></tr>
<tr><td>{lcc}</td></tr>
</table>
</body>
</html>"#
    )
}

/// A search-result listing linking to the given work ids, plus one
/// unrelated link that must never be followed
#[allow(dead_code)]
pub fn listing_page(ids: &[u32]) -> String {
    let rows: Vec<String> = ids
        .iter()
        .map(|id| format!("<tr><td><a href=\"{}\">Work {id}</a></td></tr>", work_path(*id)))
        .collect();
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<a href=\"/classify2/About\">About</a>\n<table>\n{}\n</table>\n</body>\n</html>",
        rows.join("\n")
    )
}

/// Config pointed at a mock server, with catalogs under `dir`
#[allow(dead_code)]
pub fn config_for(server_url: &str, budget: LinkBudget, dir: &Path) -> ClassifyConfig {
    ClassifyConfig::builder()
        .base_url(server_url)
        .link_budget(budget)
        .isbn_catalog(dir.join("isbn.csv"))
        .title_catalog(dir.join("titles.csv"))
        .http_timeout_secs(5)
        .build()
        .unwrap()
}

/// Creates a mock endpoint that returns HTML content, expected `hits` times
#[allow(dead_code)]
pub fn create_html_mock(server: &mut Server, path: &str, html: &str, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .expect(hits)
        .create()
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create()
}

/// Confirmation callback that accepts everything
#[allow(dead_code)]
pub fn accept_all(_: &BibliographicRecord) -> bool {
    true
}

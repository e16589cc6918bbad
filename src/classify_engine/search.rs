//! Disambiguation search
//!
//! One lookup is: fetch the search URL, try the page itself as a record, and
//! if that is not an accepted hit, walk the page's candidate record links in
//! document order until one is accepted or the link budget runs out.
//!
//! The search is total. Fetch failures, invalid pages and operator rejections
//! all end in either "try the next candidate" or the empty record; nothing
//! is returned as an error. At most `1 + budget` pages are fetched, strictly
//! one after another.

use tracing::{debug, info, warn};

use super::fetcher::PageFetcher;
use super::progress::SearchProgress;
use crate::config::{ClassifyConfig, LinkBudget, SiteEndpoints};
use crate::confirm::Confirm;
use crate::page_extractor::{
    BibliographicRecord, CandidateLink, collect_candidate_links, extract_record,
};
use crate::query::SearchQuery;

/// Look up `query`, falling back to at most `budget` candidate links.
///
/// Returns the first record that is both valid and confirmed, or the empty
/// record when none is.
pub fn search<F, C>(
    query: &SearchQuery,
    budget: LinkBudget,
    endpoints: &SiteEndpoints,
    fetcher: &F,
    confirm: &mut C,
) -> BibliographicRecord
where
    F: PageFetcher + ?Sized,
    C: Confirm + ?Sized,
{
    let url = query.search_url(endpoints);
    info!(%query, %url, "Searching classify");

    let page = match fetcher.fetch(&url) {
        Ok(page) => page,
        Err(error) => {
            warn!(%url, %error, "Initial search page unavailable");
            confirm.notify(&SearchProgress::FetchFailed(error));
            return BibliographicRecord::empty();
        }
    };

    if let Some(record) = offer(extract_record(&page), confirm) {
        return record;
    }

    let candidates = collect_candidate_links(&page, &endpoints.record_link_marker);
    let visiting = budget.visits(candidates.len());
    debug!(found = candidates.len(), visiting, %budget, "Following candidate links");
    confirm.notify(&SearchProgress::CandidatesFound {
        found: candidates.len(),
        visiting,
    });

    for link in candidates.into_iter().take(visiting) {
        if let Some(record) = visit_candidate(&link, endpoints, fetcher, confirm) {
            return record;
        }
        confirm.notify(&SearchProgress::SearchingOtherOptions);
    }

    info!(%query, "No accepted record");
    BibliographicRecord::empty()
}

fn visit_candidate<F, C>(
    link: &CandidateLink,
    endpoints: &SiteEndpoints,
    fetcher: &F,
    confirm: &mut C,
) -> Option<BibliographicRecord>
where
    F: PageFetcher + ?Sized,
    C: Confirm + ?Sized,
{
    let url = match link.resolve(&endpoints.base_url) {
        Ok(url) => url,
        Err(error) => {
            warn!(%link, %error, "Skipping unresolvable candidate link");
            return None;
        }
    };

    match fetcher.fetch(url.as_str()) {
        Ok(page) => offer(extract_record(&page), confirm),
        Err(error) => {
            warn!(%url, %error, "Skipping unavailable candidate page");
            confirm.notify(&SearchProgress::FetchFailed(error));
            None
        }
    }
}

/// Valid records go to the operator; anything else is passed over silently.
fn offer<C: Confirm + ?Sized>(
    record: BibliographicRecord,
    confirm: &mut C,
) -> Option<BibliographicRecord> {
    if !record.is_valid() {
        debug!(?record, "Page did not yield a usable record");
        return None;
    }
    if confirm.confirm(&record) {
        info!(title = %record.title, lcc = %record.lcc, "Record accepted");
        Some(record)
    } else {
        debug!(?record, "Record rejected by operator");
        None
    }
}

/// Lookup engine bound to one configuration and fetcher
///
/// Convenience wrapper over [`search`] for callers that run many lookups
/// against the same site.
#[derive(Debug, Clone)]
pub struct LookupEngine<F> {
    endpoints: SiteEndpoints,
    budget: LinkBudget,
    fetcher: F,
}

impl<F: PageFetcher> LookupEngine<F> {
    #[must_use]
    pub fn new(config: &ClassifyConfig, fetcher: F) -> Self {
        Self {
            endpoints: config.endpoints().clone(),
            budget: config.link_budget(),
            fetcher,
        }
    }

    pub fn search<C: Confirm + ?Sized>(
        &self,
        query: &SearchQuery,
        confirm: &mut C,
    ) -> BibliographicRecord {
        search(query, self.budget, &self.endpoints, &self.fetcher, confirm)
    }

    #[must_use]
    pub fn endpoints(&self) -> &SiteEndpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn budget(&self) -> LinkBudget {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify_engine::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const BASE: &str = "http://classify.test";

    fn record_page(title: &str, lcc: &str) -> String {
        format!(
            "<html><body>\n<p>Summary</p>\n<p>Title:</p>\n<p>{title}</p>\n<p>Author:</p>\n<p>Someone</p>\n\
             <p>LCC:</p>\n<p>Number</p>\n<p>Holdings</p>\n<p>Links</p>\n<p>{lcc}</p>\n</body></html>"
        )
    }

    fn listing(ids: &[u32]) -> String {
        let anchors: Vec<String> = ids
            .iter()
            .map(|id| format!("<a href=\"/classify2/ClassifyDemo?wi={id}\">Work {id}</a>"))
            .collect();
        format!("<html><body>\n{}\n</body></html>", anchors.join("\n"))
    }

    fn candidate_url(id: u32) -> String {
        format!("{BASE}/classify2/ClassifyDemo?wi={id}")
    }

    /// Serves canned pages and records every URL requested
    struct FakeSite {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeSite {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
            self.pages.insert(url.into(), html.into());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl PageFetcher for FakeSite {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn endpoints() -> SiteEndpoints {
        SiteEndpoints::with_base(BASE)
    }

    fn isbn_url(isbn: &str) -> String {
        SearchQuery::isbn(isbn).search_url(&endpoints())
    }

    #[test]
    fn test_direct_hit_confirmed_fetches_once() {
        let site = FakeSite::new().page(isbn_url("0131103628"), record_page("K&amp;R", "QA76.73.C15"));
        let record = search(
            &SearchQuery::isbn("0131103628"),
            LinkBudget::Limited(5),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| true,
        );
        assert_eq!(record, BibliographicRecord::new("K&R", "Someone", "QA76.73.C15"));
        assert_eq!(site.requests().len(), 1);
    }

    #[test]
    fn test_first_valid_candidate_short_circuits() {
        let site = FakeSite::new()
            .page(isbn_url("0131103628"), listing(&[1, 2, 3]))
            .page(candidate_url(1), record_page("Wrong", "QA"))
            .page(candidate_url(2), record_page("Right", "QA76.73"))
            .page(candidate_url(3), record_page("Later", "QA99.9"));

        let record = search(
            &SearchQuery::isbn("0131103628"),
            LinkBudget::Limited(5),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| true,
        );

        assert_eq!(record.title, "Right");
        assert_eq!(
            site.requests(),
            vec![isbn_url("0131103628"), candidate_url(1), candidate_url(2)]
        );
    }

    #[test]
    fn test_zero_budget_stops_after_first_page() {
        let site = FakeSite::new()
            .page(isbn_url("0131103628"), listing(&[1, 2, 3]))
            .page(candidate_url(1), record_page("Right", "QA76.73"));

        let record = search(
            &SearchQuery::isbn("0131103628"),
            LinkBudget::Limited(0),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| true,
        );

        assert!(record.is_empty());
        assert_eq!(site.requests().len(), 1);
    }

    #[test]
    fn test_budget_limits_candidates_visited() {
        let site = FakeSite::new().page(isbn_url("1"), listing(&[1, 2, 3, 4]));
        let record = search(
            &SearchQuery::isbn("1"),
            LinkBudget::Limited(2),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| true,
        );
        assert!(record.is_empty());
        assert_eq!(
            site.requests(),
            vec![isbn_url("1"), candidate_url(1), candidate_url(2)]
        );
    }

    #[test]
    fn test_rejected_direct_hit_falls_through_to_candidates() {
        let site = FakeSite::new()
            .page(isbn_url("2"), format!("{}{}", record_page("First", "AAAA"), listing(&[7])))
            .page(candidate_url(7), record_page("Second", "BBBB"));

        let mut shown = Vec::new();
        let record = search(
            &SearchQuery::isbn("2"),
            LinkBudget::Unbounded,
            &endpoints(),
            &site,
            &mut |r: &BibliographicRecord| {
                shown.push(r.title.clone());
                r.title == "Second"
            },
        );

        assert_eq!(record.title, "Second");
        assert_eq!(shown, vec!["First", "Second"]);
    }

    #[test]
    fn test_connectivity_failure_returns_empty_and_notifies() {
        struct Recorder(Vec<SearchProgress>);
        impl Confirm for Recorder {
            fn confirm(&mut self, _: &BibliographicRecord) -> bool {
                true
            }
            fn notify(&mut self, event: &SearchProgress) {
                self.0.push(event.clone());
            }
        }

        let fetcher = |url: &str| -> Result<String, FetchError> {
            Err(FetchError::Connectivity {
                url: url.to_string(),
                reason: "connection refused".into(),
            })
        };
        let mut recorder = Recorder(Vec::new());
        let record = search(
            &SearchQuery::title_author("Dune", "Herbert"),
            LinkBudget::Limited(5),
            &endpoints(),
            &fetcher,
            &mut recorder,
        );

        assert!(record.is_empty());
        assert!(matches!(
            recorder.0.as_slice(),
            [SearchProgress::FetchFailed(e)] if e.is_connectivity()
        ));
    }

    #[test]
    fn test_failed_candidate_fetch_is_skipped() {
        let site = FakeSite::new()
            .page(isbn_url("3"), listing(&[1, 2]))
            .page(candidate_url(2), record_page("Found", "QA76"));
        let record = search(
            &SearchQuery::isbn("3"),
            LinkBudget::Limited(5),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| true,
        );
        assert_eq!(record.title, "Found");
        assert_eq!(site.requests().len(), 3);
    }

    #[test]
    fn test_invalid_records_are_never_offered() {
        let site = FakeSite::new()
            .page(isbn_url("4"), listing(&[1]))
            .page(candidate_url(1), record_page("", "QA76.73"));
        let mut offered = 0;
        let record = search(
            &SearchQuery::isbn("4"),
            LinkBudget::Limited(5),
            &endpoints(),
            &site,
            &mut |_: &BibliographicRecord| {
                offered += 1;
                true
            },
        );
        assert!(record.is_empty());
        assert_eq!(offered, 0);
    }

    #[test]
    fn test_engine_uses_config_budget() {
        let config = ClassifyConfig::builder()
            .base_url(BASE)
            .link_budget(LinkBudget::Limited(1))
            .build()
            .unwrap();
        let site = FakeSite::new().page(isbn_url("5"), listing(&[1, 2]));
        let engine = LookupEngine::new(&config, site);
        assert_eq!(engine.budget(), LinkBudget::Limited(1));
        assert_eq!(engine.endpoints(), &endpoints());
        let record = engine.search(&SearchQuery::isbn("5"), &mut |_: &BibliographicRecord| true);
        assert!(record.is_empty());
        assert_eq!(engine.fetcher.requests().len(), 2);
    }
}

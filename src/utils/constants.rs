//! Shared configuration constants for classify_lcc
//!
//! Default endpoint fragments and layout offsets for the classify.oclc.org
//! demo site. These only seed `SiteEndpoints::default()` and
//! `ClassifyConfig::builder()`; the engine itself always reads them from the
//! configuration it is handed.

/// Origin every relative record link is resolved against.
pub const DEFAULT_BASE_URL: &str = "http://classify.oclc.org";

/// Path and query prefix for a standard-number (ISBN) search.
pub const ISBN_SEARCH_PATH: &str = "/classify2/ClassifyDemo?search-standnum-txt=";

/// Path and query prefix for a title/author search.
pub const TITLE_SEARCH_PATH: &str = "/classify2/ClassifyDemo?search-title-txt=";

/// Joins the title and author parameters of a title/author search.
pub const AUTHOR_SEPARATOR: &str = "&search-author-txt=";

/// Trailing paging parameter carried by the site's own title/author search URLs.
pub const TITLE_AUTHOR_SUFFIX: &str = "&startRec=0";

/// Substring shared by every internal link that points at a single work record.
pub const RECORD_LINK_MARKER: &str = "/classify2/ClassifyDemo?wi=";

/// Number of record links visited after a miss on the first page
pub const DEFAULT_LINK_LIMIT: usize = 5;

/// Default blocking HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every lookup request
pub const DEFAULT_USER_AGENT: &str = concat!("classify_lcc/", env!("CARGO_PKG_VERSION"));

/// Catalog file receiving ISBN lookups
pub const DEFAULT_ISBN_CATALOG: &str = "ISBNsLCC.csv";

/// Catalog file receiving title/author lookups
pub const DEFAULT_TITLE_CATALOG: &str = "TitleAuthorLCC.csv";

/// Fragment that opens the bibliographic block of a work record page.
///
/// Search-result listings never contain it, so its absence means "not a record".
pub const SUMMARY_MARKER: &str = "Summary";

pub const TITLE_LABEL: &str = "Title:";
pub const AUTHOR_LABEL: &str = "Author:";
pub const LCC_LABEL: &str = "LCC:";

/// Distance from the `LCC:` label to the most frequent LCC call number.
///
/// Empirical: the record template renders three boilerplate fragments
/// (column headings of the classification table) between the label and the
/// value. Any template change on the remote site breaks this silently.
pub const LCC_VALUE_OFFSET: usize = 4;

/// Minimum LCC length (exclusive) for a record to count as a hit.
pub const MIN_LCC_LEN: usize = 3;

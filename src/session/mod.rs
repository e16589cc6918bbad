//! Interactive cataloging session
//!
//! The operator types ISBNs (or titles and authors) one at a time; each is
//! looked up, confirmed, and appended to the matching catalog. The literal
//! `exit` at a primary prompt, or end of input, ends the session.
//!
//! All three lookup modes share one loop body; they differ only in which
//! query is tried first and which catalog receives the row.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::catalog::{Catalog, CatalogKind, CatalogRow};
use crate::classify_engine::{LookupEngine, PageFetcher};
use crate::config::ClassifyConfig;
use crate::confirm::Console;
use crate::page_extractor::BibliographicRecord;
use crate::query::{SearchQuery, clean_isbn_input, validate_isbn};

/// Input that ends the session at any primary prompt
pub const EXIT_TOKEN: &str = "exit";

/// Which input drives each lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// ISBN only; hits go to the ISBN catalog
    Isbn,
    /// Title and author only; hits go to the title/author catalog
    TitleAuthor,
    /// ISBN first, then title and author if the ISBN finds nothing
    IsbnThenTitle,
}

impl LookupMode {
    fn catalogs(self) -> &'static [CatalogKind] {
        match self {
            Self::Isbn => &[CatalogKind::Isbn],
            Self::TitleAuthor => &[CatalogKind::TitleAuthor],
            Self::IsbnThenTitle => &[CatalogKind::Isbn, CatalogKind::TitleAuthor],
        }
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lookups sent to the remote site
    pub searches: usize,
    /// Catalog rows written, copies included
    pub rows_written: usize,
    /// Entries that ended without an accepted record
    pub not_found: usize,
    /// ISBN entries rejected before any lookup
    pub invalid_isbns: usize,
}

enum Entry<T> {
    Value(T),
    Skip,
    Exit,
}

pub struct Session<F, R, W> {
    mode: LookupMode,
    engine: LookupEngine<F>,
    console: Console<R, W>,
    isbn_catalog: Option<Catalog>,
    title_catalog: Option<Catalog>,
    ask_copies: bool,
    summary: SessionSummary,
}

impl<F, R, W> Session<F, R, W>
where
    F: PageFetcher,
    R: BufRead,
    W: Write,
{
    /// Open the catalogs `mode` writes to and prepare the lookup engine.
    ///
    /// # Errors
    ///
    /// Fails if a catalog file cannot be opened or created.
    pub fn new(
        config: &ClassifyConfig,
        mode: LookupMode,
        fetcher: F,
        console: Console<R, W>,
    ) -> Result<Self> {
        let mut isbn_catalog = None;
        let mut title_catalog = None;
        for kind in mode.catalogs() {
            match kind {
                CatalogKind::Isbn => {
                    isbn_catalog = Some(Catalog::open(config.isbn_catalog(), *kind)?);
                }
                CatalogKind::TitleAuthor => {
                    title_catalog = Some(Catalog::open(config.title_catalog(), *kind)?);
                }
            }
        }

        Ok(Self {
            mode,
            engine: LookupEngine::new(config, fetcher),
            console,
            isbn_catalog,
            title_catalog,
            ask_copies: mode == LookupMode::IsbnThenTitle,
            summary: SessionSummary::default(),
        })
    }

    /// Ask for a number of copies after every accepted record
    #[must_use]
    pub fn ask_copies(mut self, ask: bool) -> Self {
        self.ask_copies = ask;
        self
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns terminal I/O errors and catalog write errors. Lookup failures
    /// are reported to the operator and never end the session.
    pub fn run(mut self) -> Result<SessionSummary> {
        info!(target: "classify_lcc::session", "Session started in {:?} mode", self.mode);
        loop {
            let keep_going = match self.mode {
                LookupMode::Isbn => self.isbn_round(false)?,
                LookupMode::TitleAuthor => self.title_author_round()?,
                LookupMode::IsbnThenTitle => self.isbn_round(true)?,
            };
            if !keep_going {
                break;
            }
        }
        info!(target: "classify_lcc::session", "Session finished: {:?}", self.summary);
        Ok(self.summary)
    }

    /// One ISBN entry. Returns `false` when the session should end.
    fn isbn_round(&mut self, fall_back_to_title: bool) -> Result<bool> {
        let isbn = match self.read_isbn()? {
            Entry::Value(isbn) => isbn,
            Entry::Skip => return Ok(true),
            Entry::Exit => return Ok(false),
        };

        let record = self.lookup(&SearchQuery::isbn(&isbn));
        if record.is_valid() {
            let row = CatalogRow::Isbn {
                isbn,
                lcc: record.lcc,
            };
            self.store(&row)?;
            return Ok(true);
        }

        if !fall_back_to_title {
            self.summary.not_found += 1;
            self.console.say("    ERROR: ISBN did not return any results.")?;
            self.console
                .say("           Try again, or set aside for later processing.")?;
            return Ok(true);
        }

        self.console
            .say("    ISBN did not return any results. Try the title and author.")?;
        self.title_author_round()
    }

    /// One title/author entry. Returns `false` when the session should end.
    fn title_author_round(&mut self) -> Result<bool> {
        let (title, author) = match self.read_title_author()? {
            Entry::Value(pair) => pair,
            Entry::Skip => return Ok(true),
            Entry::Exit => return Ok(false),
        };

        let record = self.lookup(&SearchQuery::title_author(title, author));
        if !record.is_valid() {
            self.summary.not_found += 1;
            self.console
                .say("    ERROR: Title and author did not return any results.")?;
            self.console
                .say("           Try again, or set aside for later processing.")?;
            return Ok(true);
        }

        let BibliographicRecord { title, author, lcc } = record;
        self.store(&CatalogRow::TitleAuthor { title, author, lcc })?;
        Ok(true)
    }

    fn lookup(&mut self, query: &SearchQuery) -> BibliographicRecord {
        self.summary.searches += 1;
        self.engine.search(query, &mut self.console)
    }

    fn read_isbn(&mut self) -> Result<Entry<String>> {
        let Some(raw) = self.console.prompt("\nEnter ISBN: ")? else {
            return Ok(Entry::Exit);
        };
        let isbn = clean_isbn_input(&raw);
        if isbn == EXIT_TOKEN {
            return Ok(Entry::Exit);
        }
        if let Err(e) = validate_isbn(&isbn) {
            debug!(target: "classify_lcc::session", "Rejected ISBN input {raw:?}");
            self.summary.invalid_isbns += 1;
            self.console.say(&format!("    ERROR: {e}"))?;
            self.console.say("           Please try again.")?;
            return Ok(Entry::Skip);
        }
        Ok(Entry::Value(isbn))
    }

    fn read_title_author(&mut self) -> Result<Entry<(String, String)>> {
        let Some(title) = self.console.prompt("\nEnter title: ")? else {
            return Ok(Entry::Exit);
        };
        if title == EXIT_TOKEN {
            return Ok(Entry::Exit);
        }
        if title.trim().is_empty() {
            self.console.say("    ERROR: A title is required.")?;
            return Ok(Entry::Skip);
        }
        let Some(author) = self.console.prompt("Enter author: ")? else {
            return Ok(Entry::Exit);
        };
        Ok(Entry::Value((title, author)))
    }

    /// Number of copies to record; empty input or end of input means one.
    fn read_copies(&mut self) -> Result<usize> {
        loop {
            let Some(answer) = self.console.prompt("\nNumber of copies [1]: ")? else {
                return Ok(1);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(1);
            }
            match answer.parse::<usize>() {
                Ok(copies) if copies > 0 => return Ok(copies),
                _ => {
                    self.console
                        .say("    ERROR: Enter a whole number of copies (1 or more).")?;
                }
            }
        }
    }

    fn store(&mut self, row: &CatalogRow) -> Result<()> {
        let copies = if self.ask_copies { self.read_copies()? } else { 1 };
        let mode = self.mode;
        let catalog = match row.kind() {
            CatalogKind::Isbn => self.isbn_catalog.as_mut(),
            CatalogKind::TitleAuthor => self.title_catalog.as_mut(),
        }
        .with_context(|| format!("no {} catalog open in {mode:?} mode", row.kind()))?;

        catalog.append(row, copies)?;
        self.summary.rows_written += copies;
        Ok(())
    }
}

//! CSV catalog files
//!
//! Two layouts, both with every field quoted so the files import cleanly
//! into cataloguing software:
//! - ISBN catalog: `"ISBN","Call_Number"`
//! - Title/author catalog: `"Title","Author","Call_Number"`
//!
//! A catalog is created with its header if missing (or empty) and appended to
//! otherwise. Every row is flushed as soon as it is written; sessions are long
//! and may be interrupted at any prompt.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, info};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Isbn,
    TitleAuthor,
}

impl CatalogKind {
    #[must_use]
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Isbn => &["ISBN", "Call_Number"],
            Self::TitleAuthor => &["Title", "Author", "Call_Number"],
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isbn => f.write_str("ISBN"),
            Self::TitleAuthor => f.write_str("title/author"),
        }
    }
}

/// One catalog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRow {
    Isbn { isbn: String, lcc: String },
    TitleAuthor { title: String, author: String, lcc: String },
}

impl CatalogRow {
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Isbn { .. } => CatalogKind::Isbn,
            Self::TitleAuthor { .. } => CatalogKind::TitleAuthor,
        }
    }

    fn fields(&self) -> Vec<&str> {
        match self {
            Self::Isbn { isbn, lcc } => vec![isbn.as_str(), lcc.as_str()],
            Self::TitleAuthor { title, author, lcc } => {
                vec![title.as_str(), author.as_str(), lcc.as_str()]
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "Unable to open CSV file {path}: {source}. Check to see if it is open in another \
         program or if you have permissions to modify it."
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to CSV file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to flush CSV file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A {row} row cannot be written to the {catalog} catalog")]
    WrongKind { catalog: CatalogKind, row: CatalogKind },
}

/// An open, append-only catalog file
pub struct Catalog {
    kind: CatalogKind,
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("kind", &self.kind)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Open `path` for appending, writing the header first if the file is new.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Open` if the file cannot be created or opened,
    /// or a write/flush error if the header cannot be written.
    pub fn open(path: impl AsRef<Path>, kind: CatalogKind) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source: std::io::Error| CatalogError::Open {
            path: path.clone(),
            source,
        };

        let needs_header = match std::fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(open_err(e)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;

        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        let mut catalog = Self { kind, path, writer };
        if needs_header {
            info!(target: "classify_lcc::catalog", "Creating {} catalog {}", kind, catalog.path.display());
            catalog.write_flushed(kind.header())?;
        } else {
            debug!(target: "classify_lcc::catalog", "Appending to {}", catalog.path.display());
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `copies` identical rows, flushing after each.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::WrongKind` if the row's layout does not match
    /// this catalog, or a write/flush error.
    pub fn append(&mut self, row: &CatalogRow, copies: usize) -> Result<(), CatalogError> {
        if row.kind() != self.kind {
            return Err(CatalogError::WrongKind {
                catalog: self.kind,
                row: row.kind(),
            });
        }
        let fields = row.fields();
        for _ in 0..copies {
            self.write_flushed(&fields)?;
        }
        debug!(
            target: "classify_lcc::catalog",
            "Wrote {copies} row(s) to {}",
            self.path.display()
        );
        Ok(())
    }

    fn write_flushed(&mut self, fields: &[&str]) -> Result<(), CatalogError> {
        self.writer
            .write_record(fields)
            .map_err(|source| CatalogError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.writer.flush().map_err(|source| CatalogError::Flush {
            path: self.path.clone(),
            source,
        })
    }
}

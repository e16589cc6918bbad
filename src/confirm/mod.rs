//! Operator confirmation of scraped records
//!
//! A valid-looking record is only accepted once the operator agrees with it.
//! `Confirm` is the seam the orchestrator calls through; `Console` is the
//! line-based terminal implementation, which also serves the session's other
//! prompts so that a single reader/writer pair drives the whole conversation.

use log::warn;
use std::io::{self, BufRead, Write};

use crate::classify_engine::SearchProgress;
use crate::page_extractor::BibliographicRecord;
use crate::utils::to_ascii_lossy;

/// Decides whether a scraped record is the book being catalogued
pub trait Confirm {
    /// Present `record` and return `true` if the operator accepts it.
    fn confirm(&mut self, record: &BibliographicRecord) -> bool;

    /// Observe lookup progress. Ignored unless overridden.
    fn notify(&mut self, _event: &SearchProgress) {}
}

impl<F> Confirm for F
where
    F: FnMut(&BibliographicRecord) -> bool,
{
    fn confirm(&mut self, record: &BibliographicRecord) -> bool {
        self(record)
    }
}

/// Empty, `y` or `yes` (any case) accepts; anything else rejects.
#[must_use]
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.to_lowercase().as_str(), "" | "y" | "yes")
}

/// Record as shown to the operator, title and author folded to ASCII
#[must_use]
pub fn render_record(record: &BibliographicRecord) -> String {
    format!(
        "\n    Title: {}\n\n    Author: {}\n\n    LC Classification: {}\n",
        to_ascii_lossy(&record.title),
        to_ascii_lossy(&record.author),
        record.lcc
    )
}

/// Line-based terminal conversation over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` (no newline added) and read one line.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is removed;
    /// other whitespace is kept. Bytes that are not UTF-8 become U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader or writer.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print `message` followed by a newline
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    fn ask_confirmation(&mut self, record: &BibliographicRecord) -> io::Result<bool> {
        write!(self.output, "{}", render_record(record))?;
        writeln!(self.output, "\nPress enter if this information is correct")?;
        writeln!(self.output, "Type n if the information is not correct")?;

        let Some(response) = self.prompt("\n    Is this correct? ")? else {
            return Ok(false);
        };
        if is_affirmative(&response) {
            return Ok(true);
        }
        self.say("    User indicated incorrect data. Data was not saved.\n")?;
        Ok(false)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Confirm for Console<R, W> {
    fn confirm(&mut self, record: &BibliographicRecord) -> bool {
        match self.ask_confirmation(record) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(target: "classify_lcc::confirm", "Confirmation prompt failed: {e}");
                false
            }
        }
    }

    fn notify(&mut self, event: &SearchProgress) {
        let message = match event {
            SearchProgress::FetchFailed(error) if error.is_connectivity() => {
                "    ERROR: Unable to access website. Check your internet connection."
            }
            SearchProgress::SearchingOtherOptions => "Searching for other options...",
            SearchProgress::FetchFailed(_) | SearchProgress::CandidatesFound { .. } => return,
        };
        if let Err(e) = self.say(message) {
            warn!(target: "classify_lcc::confirm", "Failed to write progress: {e}");
        }
    }
}

// classify-lcc: interactive LCC lookup against classify.oclc.org
//
// Prompts go to stdout and answers are read from stdin; diagnostics go to
// stderr through tracing so the operator conversation stays readable.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use classify_lcc::{ClassifyConfig, Console, HttpFetcher, LinkBudget, LookupMode, Session};

#[derive(Debug, Copy, Clone, ValueEnum, PartialEq, Eq)]
enum ModeArg {
    /// Look up by ISBN, append to the ISBN catalog
    Isbn,
    /// Look up by title and author, append to the title/author catalog
    Title,
    /// ISBN first, title and author when the ISBN finds nothing; asks for copies
    Combined,
}

impl From<ModeArg> for LookupMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Isbn => Self::Isbn,
            ModeArg::Title => Self::TitleAuthor,
            ModeArg::Combined => Self::IsbnThenTitle,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Lookup mode
    #[arg(value_enum)]
    mode: ModeArg,

    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Candidate links to follow per lookup (a count, or `unbounded` / `-1`)
    #[arg(long, allow_negative_numbers = true)]
    link_limit: Option<LinkBudget>,

    /// ISBN catalog CSV path
    #[arg(long)]
    isbn_csv: Option<PathBuf>,

    /// Title/author catalog CSV path
    #[arg(long)]
    title_csv: Option<PathBuf>,

    /// Site origin, e.g. http://classify.oclc.org
    #[arg(long)]
    base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Ask for a number of copies after every accepted record
    #[arg(long, default_value_t = false)]
    copies: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<ClassifyConfig> {
        let base = match &self.config {
            Some(path) => ClassifyConfig::from_json_file(path)?,
            None => ClassifyConfig::default(),
        };

        let mut builder = base.to_builder();
        if let Some(budget) = self.link_limit {
            builder = builder.link_budget(budget);
        }
        if let Some(path) = &self.isbn_csv {
            builder = builder.isbn_catalog(path);
        }
        if let Some(path) = &self.title_csv {
            builder = builder.title_catalog(path);
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout {
            builder = builder.http_timeout_secs(secs);
        }
        Ok(builder.build()?)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config().context("Invalid configuration")?;
    let mode = LookupMode::from(cli.mode);
    info!(?mode, budget = %config.link_budget(), base_url = %config.endpoints().base_url, "Starting");

    let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut session = Session::new(&config, mode, fetcher, console)?;
    if cli.copies {
        session = session.ask_copies(true);
    }
    let summary = session.run()?;

    info!(
        searches = summary.searches,
        rows_written = summary.rows_written,
        not_found = summary.not_found,
        invalid_isbns = summary.invalid_isbns,
        "Session complete"
    );
    Ok(())
}

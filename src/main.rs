//! Threadgrep main entry point
//!
//! Command-line interface for searching every page of a forum thread.

use clap::Parser;
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use threadgrep::config::{load_session, validate_options, validate_session, SearchOptions};
use threadgrep::search::{resolve_page_count, search_pages, PageFetcher, PatternMatcher};
use threadgrep::{ConfigError, SearchReport, SessionAuth};
use tracing_subscriber::EnvFilter;

/// Threadgrep: search a paginated forum thread
///
/// Fetches every page of a thread over a logged-in session, matches a
/// pattern against each post, and reports the matching pages with a short
/// excerpt of surrounding text.
#[derive(Parser, Debug)]
#[command(name = "threadgrep")]
#[command(version = "1.0.0")]
#[command(about = "Search every page of a forum thread", long_about = None)]
struct Cli {
    /// The thread ID to search
    #[arg(long)]
    thread_id: u64,

    /// The string or regex to search for (case-insensitive)
    #[arg(long)]
    target: String,

    /// Maximum number of pages fetched concurrently
    #[arg(long, default_value_t = 10)]
    max_workers: usize,

    /// Characters of context kept on each side of a match
    #[arg(long, default_value_t = 50)]
    context: usize,

    /// TOML file holding the session cookie pair
    #[arg(long, value_name = "FILE")]
    session_file: Option<PathBuf>,

    /// Value of the bbuserid cookie (overrides the session file)
    #[arg(long, requires = "bbpassword")]
    bbuserid: Option<String>,

    /// Value of the bbpassword cookie (overrides the session file)
    #[arg(long, requires = "bbuserid")]
    bbpassword: Option<String>,

    /// Base URL of the forum
    #[arg(long, default_value = "https://forums.somethingawful.com/")]
    base_url: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = SearchOptions {
        thread_id: cli.thread_id,
        max_workers: cli.max_workers,
        context_chars: cli.context,
    };
    validate_options(&options)?;

    // Reject a bad pattern before any network activity
    let matcher = PatternMatcher::new(&cli.target, options.context_chars)?;

    let session = resolve_session(&cli)?;
    let fetcher = PageFetcher::new(&cli.base_url, &session)?;

    run(fetcher, matcher, &options).await?;

    Ok(())
}

/// Resolves the session credential from flags or the session file
fn resolve_session(cli: &Cli) -> Result<SessionAuth, ConfigError> {
    if let (Some(bbuserid), Some(bbpassword)) = (&cli.bbuserid, &cli.bbpassword) {
        let session = SessionAuth {
            bbuserid: bbuserid.clone(),
            bbpassword: bbpassword.clone(),
        };
        validate_session(&session)?;
        return Ok(session);
    }

    match &cli.session_file {
        Some(path) => load_session(path),
        None => Err(ConfigError::Validation(
            "no session credential: pass --session-file, or --bbuserid with --bbpassword"
                .to_string(),
        )),
    }
}

/// Runs the search, printing each hit as its page completes
async fn run(
    fetcher: PageFetcher,
    matcher: PatternMatcher,
    options: &SearchOptions,
) -> threadgrep::Result<()> {
    let fetcher = Arc::new(fetcher);
    let matcher = Arc::new(matcher);

    let page_count = resolve_page_count(&fetcher, options.thread_id).await?;
    tracing::info!("Thread {} has {} page(s)", options.thread_id, page_count);

    let hits = search_pages(
        fetcher,
        matcher,
        options.thread_id,
        page_count,
        options.max_workers,
    );
    tokio::pin!(hits);

    // Hits print in completion order; the summary is always page-ordered.
    let mut report = SearchReport::new();
    while let Some(hit) = hits.next().await {
        let hit = hit?;
        println!("Matched on page {}: {}", hit.page_number, hit.excerpt);
        report.record(hit);
    }

    println!("{}", report.summary_line());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("threadgrep=info,warn"),
            1 => EnvFilter::new("threadgrep=debug,info"),
            2 => EnvFilter::new("threadgrep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

// src/main.rs
// =============================================================================
// This is the entry point of the github-activity CLI.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Fetch the user's public events from GitHub
// 4. Print the first N of them, one line each (or as JSON)
// 5. Exit with a proper code (0 = success, 1 = fetch failed, 2 = usage/other error)
// =============================================================================

mod activity;
mod cli;
mod github;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use activity::{describe_event, ActivityEvent, ActivitySummary};
use cli::{visible_count, Cli};

// Only one request is ever in flight, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the activity list on stdout.
// Default level is "warn"; set RUST_LOG=debug to see requests.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    // Parse command-line arguments (handles --help and --version itself)
    let cli = Cli::parse();

    execute(cli, &mut io::stdout(), &mut io::stderr()).await
}

// Does the actual work for one invocation
//
// Activity goes to `out`, messages for the user go to `err`.
//
// Returns:
//   Ok(0) = activities printed, or the user has none
//   Ok(1) = the feed could not be fetched
//   Ok(2) = no username given (nothing is fetched)
//   Err   = output failure
async fn execute<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> Result<i32> {
    // No username: tell the user and stop before touching the network
    let Some(username) = cli.username.as_deref() else {
        writeln!(err, "Please provide a GitHub username.")?;
        return Ok(2);
    };

    tracing::debug!(username, numbers = %cli.numbers, api_url = %cli.api_url, "fetching activity");

    // None means the fetcher already logged why it failed
    let Some(events) = github::fetch_user_activity(&cli.api_url, username).await else {
        writeln!(err, "Could not fetch activity for user \"{}\".", username)?;
        return Ok(1);
    };

    // How many events to show depends on how many we got back
    let limit = visible_count(&cli.numbers, events.len());

    match build_report(username, &events, limit, cli.json)? {
        Report::Empty { warning } => writeln!(err, "{}", warning)?,
        Report::Text(lines) => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        Report::Json(json) => writeln!(out, "{}", json)?,
    }

    Ok(0)
}

// What gets printed for a fetched feed
#[derive(Debug, PartialEq)]
enum Report {
    /// The user has no public activity (printed to stderr)
    Empty { warning: String },
    /// Header line followed by one line per event
    Text(Vec<String>),
    /// Pretty-printed JSON array
    Json(String),
}

// Builds the output for the first `limit` events of the feed
//
// A limit larger than the feed just shows everything.
fn build_report(username: &str, events: &[Value], limit: usize, json: bool) -> Result<Report> {
    if events.is_empty() {
        return Ok(Report::Empty {
            warning: format!("No activities for user \"{}\" found.", username),
        });
    }

    // Head of the feed only; never slice past the end
    let shown = &events[..limit.min(events.len())];

    if json {
        // Classify first so the summaries can borrow the events
        let classified: Vec<ActivityEvent> = shown.iter().map(ActivityEvent::from_value).collect();
        let summaries: Vec<ActivitySummary> = classified.iter().map(ActivitySummary::new).collect();
        let json = serde_json::to_string_pretty(&summaries)
            .context("Failed to serialize activities")?;
        return Ok(Report::Json(json));
    }

    // Header first, then one "- ..." line per event
    let mut lines = Vec::with_capacity(shown.len() + 1);
    lines.push(format!("Activities of {}:", username));
    lines.extend(shown.iter().map(describe_event));

    Ok(Report::Text(lines))
}

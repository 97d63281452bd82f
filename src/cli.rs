// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   github-activity <username> [-n|--numbers <count>] [--json]
//
// The username is declared optional on purpose: when it is missing we print
// our own message instead of clap's usage error.
// =============================================================================

use clap::Parser;

use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "A simple command line interface (CLI) to fetch the recent activity of a GitHub user and display it in the terminal.",
    long_about = "github-activity fetches the public event feed of a GitHub user and prints \
                  one line per event, newest first.\n\n\
                  Examples:\n  github-activity octocat\n  github-activity octocat -n 10"
)]
pub struct Cli {
    /// GitHub username
    pub username: Option<String>,

    /// Defines how many activities should be listed
    ///
    /// Kept as a string and coerced by visible_count, negative values included
    #[arg(
        short = 'n',
        long = "numbers",
        value_name = "NUMBER",
        default_value = "5",
        allow_negative_numbers = true
    )]
    pub numbers: String,

    /// Print the listed activities as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_ACTIVITY_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

// Works out how many events to show from the head of a feed of `available`
//
// The --numbers value is read leniently instead of being rejected:
//   "10"   -> first 10 (or fewer if the feed is shorter)
//   "2.5"  -> first 2 (fractions are truncated)
//   "-2"   -> all but the last 2
//   "abc"  -> none (just the header is printed)
//   "inf"  -> everything
pub fn visible_count(numbers: &str, available: usize) -> usize {
    // Anything that isn't a number counts as 0
    let count = numbers.trim().parse::<f64>().unwrap_or(0.0);
    if count.is_nan() {
        return 0;
    }

    // Truncate first so that "-0.5" becomes 0, not "all but the last 0"
    let count = count.trunc();
    let available_f = available as f64;

    if count >= 0.0 {
        // Positive: take from the head, capped at the feed length
        if count >= available_f {
            available
        } else {
            count as usize
        }
    } else if -count >= available_f {
        // Negative and larger than the feed: nothing left
        0
    } else {
        // Negative: drop that many from the tail
        available - (-count) as usize
    }
}

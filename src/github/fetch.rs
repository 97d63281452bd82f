// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/{username}/events
// - One unauthenticated GET, no pagination, no retries
// - Keep each entry as a raw serde_json::Value (the activity module decides
//   what it means)
//
// Errors never leave this module: fetch_user_activity logs them and returns
// None, so the caller only has to decide what "no data" means.
//
// Rust concepts:
// - async functions: For network I/O
// - Result vs Option: inner code propagates errors with ?, the public
//   function converts them into an Option
// - anyhow::Context: Attaches a human-readable message to an error
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Base URL of the public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects API requests that don't carry a User-Agent
const CLIENT_USER_AGENT: &str = concat!("github-activity/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

// Fetches the recent public events of a GitHub user
//
// Parameters:
//   api_url: base URL of the API (DEFAULT_API_URL outside of tests)
//   username: GitHub login
//
// Returns:
//   Some(events): the feed as returned by the API (may be empty)
//   None: the request, the HTTP status or the JSON body was bad (already logged)
pub async fn fetch_user_activity(api_url: &str, username: &str) -> Option<Vec<Value>> {
    match fetch_events(api_url, username).await {
        Ok(events) => {
            tracing::debug!(username, count = events.len(), "fetched activity feed");
            Some(events)
        }
        Err(e) => {
            tracing::error!(username, "failed to fetch activity: {:#}", e);
            None
        }
    }
}

async fn fetch_events(api_url: &str, username: &str) -> Result<Vec<Value>> {
    let url = events_url(api_url, username)?;

    let client = Client::builder()
        .user_agent(CLIENT_USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    tracing::debug!(%url, "requesting events");

    let response = client
        .get(url.clone())
        .header(ACCEPT, GITHUB_JSON)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("Failed to fetch {}: HTTP {}", url, status));
    }

    // Deserializing straight into Vec<Value> rejects anything that isn't a
    // JSON array, so callers never get a non-sequence back
    let events = response
        .json::<Vec<Value>>()
        .await
        .with_context(|| format!("Response from {} is not a list of events", url))?;

    Ok(events)
}

// Builds {api_url}/users/{username}/events
//
// The username goes in as a single path segment, so characters like '/' or
// '?' are escaped instead of changing the request.
fn events_url(api_url: &str, username: &str) -> Result<Url> {
    let mut url = Url::parse(api_url)
        .with_context(|| format!("Invalid API URL '{}'", api_url))?;

    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL cannot have a path: {}", api_url))?
        .pop_if_empty()
        .push("users")
        .push(username)
        .push("events");

    Ok(url)
}

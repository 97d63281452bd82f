// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching a user's public events feed (first page only)
//
// Future enhancements:
// - Follow the Link header to fetch more than one page
// - Optional token for higher rate limits
// =============================================================================

mod fetch;

// Re-export the public API from fetch.rs
pub use fetch::{fetch_user_activity, DEFAULT_API_URL};

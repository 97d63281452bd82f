// src/activity/event.rs
// =============================================================================
// This module turns one raw entry of the GitHub events feed into a typed event.
//
// The feed is loosely typed:
// - `type` is an open set of strings (new kinds appear over time)
// - `actor`, `repo` and `payload` may be missing, null, or the wrong shape
//
// So instead of deriving Deserialize (which would reject the whole feed on the
// first odd entry) we walk the serde_json::Value by hand and resolve every
// field to its default right here. Anything downstream only ever sees a fully
// populated ActivityEvent.
//
// Rust concepts:
// - Enums with data: each variant carries only the fields it needs
// - Match guards: `Some(found) if is_truthy(found)` to apply defaults
// - JSON pointers: Value::pointer("/a/b") walks nested objects safely
// =============================================================================

use serde::Serialize;
use serde_json::Value;

/// Shown when an event has no `actor.login`
pub const UNKNOWN_USER: &str = "unknown-user";
/// Shown when an event has no `repo.name`
pub const UNKNOWN_REPO: &str = "unknown-repo";

// A single entry from a user's public activity feed, with defaults applied
//
// #[serde(flatten)] merges the EventKind fields (and its "kind" tag) into
// this object when printed with --json
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEvent {
    /// Login of the user who performed the event
    pub actor: String,
    /// Full name (owner/name) of the repository the event happened in
    pub repo: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// The kinds of events we know how to describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// WatchEvent (starring a repository)
    Watch,
    /// PushEvent
    Push { commits: usize },
    /// PullRequestEvent
    PullRequest { action: String },
    /// IssuesEvent
    Issues { action: String },
    /// ForkEvent
    Fork,
    /// CreateEvent (repository, branch or tag)
    Create {
        ref_type: String,
        #[serde(rename = "ref")]
        reference: String,
    },
    /// DeleteEvent (branch or tag)
    Delete {
        ref_type: String,
        #[serde(rename = "ref")]
        reference: String,
    },
    /// IssueCommentEvent
    IssueComment { action: String },
    /// ReleaseEvent
    Release { name: String },
    /// ForkApplyEvent
    ForkApply,
    /// PublicEvent
    Public,
    /// CommitCommentEvent
    CommitComment,
    /// PullRequestReviewEvent
    PullRequestReview { action: String },
    /// PullRequestReviewCommentEvent
    PullRequestReviewComment,
    /// Anything else, keeping the original `type` tag (None when it was missing)
    Unknown { tag: Option<String> },
}

impl ActivityEvent {
    /// Classifies a raw feed entry. Never fails: every missing or falsy
    /// field falls back to its default.
    pub fn from_value(event: &Value) -> Self {
        ActivityEvent {
            actor: text_or(event, "/actor/login", UNKNOWN_USER),
            repo: text_or(event, "/repo/name", UNKNOWN_REPO),
            kind: EventKind::from_value(event),
        }
    }
}

impl EventKind {
    fn from_value(event: &Value) -> Self {
        // Only a string tag can ever match a known kind (exact, case-sensitive)
        let name = event.get("type").and_then(Value::as_str);

        match name {
            Some("WatchEvent") => EventKind::Watch,
            Some("PushEvent") => EventKind::Push {
                commits: commit_count(event.pointer("/payload/commits")),
            },
            Some("PullRequestEvent") => EventKind::PullRequest {
                action: text_or(event, "/payload/action", "performed an action on"),
            },
            Some("IssuesEvent") => EventKind::Issues {
                action: text_or(event, "/payload/action", "performed an action on"),
            },
            Some("ForkEvent") => EventKind::Fork,
            // Create and Delete share the ref but not the ref_type default
            Some("CreateEvent") => EventKind::Create {
                ref_type: text_or(event, "/payload/ref_type", "repository"),
                reference: text_or(event, "/payload/ref", "unknown"),
            },
            Some("DeleteEvent") => EventKind::Delete {
                ref_type: text_or(event, "/payload/ref_type", "entity"),
                reference: text_or(event, "/payload/ref", "unknown"),
            },
            Some("IssueCommentEvent") => EventKind::IssueComment {
                action: text_or(event, "/payload/action", "commented on"),
            },
            Some("ReleaseEvent") => EventKind::Release {
                name: text_or(event, "/payload/release/name", "a release"),
            },
            Some("ForkApplyEvent") => EventKind::ForkApply,
            Some("PublicEvent") => EventKind::Public,
            Some("CommitCommentEvent") => EventKind::CommitComment,
            Some("PullRequestReviewEvent") => EventKind::PullRequestReview {
                action: text_or(event, "/payload/action", "reviewed"),
            },
            Some("PullRequestReviewCommentEvent") => EventKind::PullRequestReviewComment,
            // Keep whatever the tag was for display; None means there was no `type` key
            _ => EventKind::Unknown {
                tag: event.get("type").map(display_text),
            },
        }
    }
}

// Looks up a field at a JSON pointer and renders it, or returns `default`
//
// Falsy values (null, false, 0, "") count as missing, just like a missing
// key does. Anything else present is shown as-is, even if it isn't a string.
fn text_or(value: &Value, pointer: &str, default: &str) -> String {
    match value.pointer(pointer) {
        Some(found) if is_truthy(found) => display_text(found),
        _ => default.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        // Arrays and objects are truthy even when empty
        Value::Array(_) | Value::Object(_) => true,
    }
}

// How a value reads when dropped into a sentence
//
// Strings go in without quotes. Arrays become their comma-joined items with
// nulls left empty, and objects read "[object Object]".
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        // null, booleans and numbers
        other => other.to_string(),
    }
}

// Number of commits in a push
//
// A list counts its entries and a string counts its characters. Anything
// else (missing, number, object) counts as zero.
fn commit_count(commits: Option<&Value>) -> usize {
    match commits {
        Some(Value::Array(list)) => list.len(),
        Some(Value::String(s)) => s.encode_utf16().count(),
        _ => 0,
    }
}

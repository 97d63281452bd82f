// src/activity/format.rs
// =============================================================================
// Renders a classified ActivityEvent as one human-readable line.
//
// Every line starts with the "- " list marker. There are no error paths here:
// by the time an event reaches this module all of its fields already hold a
// value (real or default).
// =============================================================================

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::event::{ActivityEvent, EventKind};

// Shown in place of the tag when an unknown event had no `type` key at all
const MISSING_TYPE: &str = "undefined";

// Formats an event as a list item
//
// Example:
//   WatchEvent on octocat/Hello-World -> "- Starred octocat/Hello-World"
pub fn format_event(event: &ActivityEvent) -> String {
    format!("- {}", summarize(event))
}

/// Classifies and formats a raw feed entry in one step.
pub fn describe_event(raw: &Value) -> String {
    format_event(&ActivityEvent::from_value(raw))
}

// The sentence itself, without the list marker
pub fn summarize(event: &ActivityEvent) -> String {
    // Destructure once so every arm can use actor/repo directly
    let ActivityEvent { actor, repo, kind } = event;

    match kind {
        EventKind::Watch => format!("Starred {repo}"),
        EventKind::Push { commits } => format!("Pushed {commits} commit(s) to {repo}"),
        // Reviews and pull request events read the same, only the default verb differs
        EventKind::PullRequest { action } | EventKind::PullRequestReview { action } => {
            format!("{actor} {action} a pull request in {repo}")
        }
        // Same for issue comments ("commented on") and issue events
        EventKind::Issues { action } | EventKind::IssueComment { action } => {
            format!("{actor} {action} an issue in {repo}")
        }
        EventKind::Fork => format!("Forked {repo} to {actor}'s account"),
        EventKind::Create { ref_type, reference } => {
            format!("Created a new {ref_type} ({reference}) in {repo}")
        }
        EventKind::Delete { ref_type, reference } => {
            format!("Deleted {ref_type} ({reference}) in {repo}")
        }
        EventKind::Release { name } => format!("Published {name} in {repo}"),
        EventKind::ForkApply => format!("Applied a patch from a fork in {repo}"),
        EventKind::Public => format!("Made {repo} public"),
        EventKind::CommitComment => format!("Commented on a commit in {repo}"),
        EventKind::PullRequestReviewComment => {
            format!("Commented on a pull request review in {repo}")
        }
        // Anything we don't recognize still gets a line, with its raw tag
        EventKind::Unknown { tag } => {
            let tag = tag.as_deref().unwrap_or(MISSING_TYPE);
            format!("{actor} performed an unknown action ({tag}) in {repo}")
        }
    }
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_event(self))
    }
}

/// One element of the `--json` output: the sentence plus the event's fields.
#[derive(Debug, Serialize)]
pub struct ActivitySummary<'a> {
    pub summary: String,
    #[serde(flatten)]
    pub event: &'a ActivityEvent,
}

impl<'a> ActivitySummary<'a> {
    pub fn new(event: &'a ActivityEvent) -> Self {
        ActivitySummary {
            summary: summarize(event),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Only `type` present: every kind should render its fallback text
    #[test]
    fn test_minimal_records_use_fallbacks() {
        let cases = [
            ("WatchEvent", "- Starred unknown-repo"),
            ("PushEvent", "- Pushed 0 commit(s) to unknown-repo"),
            (
                "PullRequestEvent",
                "- unknown-user performed an action on a pull request in unknown-repo",
            ),
            (
                "IssuesEvent",
                "- unknown-user performed an action on an issue in unknown-repo",
            ),
            ("ForkEvent", "- Forked unknown-repo to unknown-user's account"),
            ("CreateEvent", "- Created a new repository (unknown) in unknown-repo"),
            ("DeleteEvent", "- Deleted entity (unknown) in unknown-repo"),
            ("IssueCommentEvent", "- unknown-user commented on an issue in unknown-repo"),
            ("ReleaseEvent", "- Published a release in unknown-repo"),
            ("ForkApplyEvent", "- Applied a patch from a fork in unknown-repo"),
            ("PublicEvent", "- Made unknown-repo public"),
            ("CommitCommentEvent", "- Commented on a commit in unknown-repo"),
            (
                "PullRequestReviewEvent",
                "- unknown-user reviewed a pull request in unknown-repo",
            ),
            (
                "PullRequestReviewCommentEvent",
                "- Commented on a pull request review in unknown-repo",
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(describe_event(&json!({ "type": kind })), expected, "kind {kind}");
        }
    }

    #[test]
    fn test_watch_event() {
        let raw = json!({ "type": "WatchEvent", "repo": { "name": "octocat/Hello-World" } });
        assert_eq!(describe_event(&raw), "- Starred octocat/Hello-World");
    }

    #[test]
    fn test_push_event() {
        let raw = json!({
            "type": "PushEvent",
            "repo": { "name": "foo/bar" },
            "payload": { "commits": [1, 2, 3] }
        });
        assert_eq!(describe_event(&raw), "- Pushed 3 commit(s) to foo/bar");
    }

    #[test]
    fn test_unknown_event() {
        let raw = json!({
            "type": "WeirdEvent",
            "actor": { "login": "alice" },
            "repo": { "name": "x/y" }
        });
        assert_eq!(
            describe_event(&raw),
            "- alice performed an unknown action (WeirdEvent) in x/y"
        );
    }

    #[test]
    fn test_missing_type_is_unknown() {
        let raw = json!({ "actor": { "login": "alice" }, "repo": { "name": "x/y" } });
        assert_eq!(
            describe_event(&raw),
            "- alice performed an unknown action (undefined) in x/y"
        );
    }

    #[test]
    fn test_null_type_is_not_missing_type() {
        let raw = json!({ "type": null, "actor": { "login": "alice" }, "repo": { "name": "x/y" } });
        assert_eq!(
            describe_event(&raw),
            "- alice performed an unknown action (null) in x/y"
        );
    }

    #[test]
    fn test_non_string_fields_are_rendered() {
        let raw = json!({
            "type": "IssuesEvent",
            "actor": { "login": 42 },
            "repo": { "name": "x/y" },
            "payload": { "action": 5 }
        });
        assert_eq!(describe_event(&raw), "- 42 5 an issue in x/y");

        let raw = json!({
            "type": "PushEvent",
            "repo": { "name": "x/y" },
            "payload": { "commits": "abc" }
        });
        assert_eq!(describe_event(&raw), "- Pushed 3 commit(s) to x/y");
    }

    #[test]
    fn test_present_fields_replace_fallbacks() {
        let raw = json!({
            "type": "PullRequestEvent",
            "actor": { "login": "bob" },
            "repo": { "name": "rust-lang/rust" },
            "payload": { "action": "opened" }
        });
        assert_eq!(describe_event(&raw), "- bob opened a pull request in rust-lang/rust");

        let raw = json!({
            "type": "DeleteEvent",
            "repo": { "name": "bob/app" },
            "payload": { "ref_type": "branch", "ref": "feature/login" }
        });
        assert_eq!(describe_event(&raw), "- Deleted branch (feature/login) in bob/app");

        let raw = json!({
            "type": "ReleaseEvent",
            "repo": { "name": "bob/app" },
            "payload": { "release": { "name": "v2.0.0" } }
        });
        assert_eq!(describe_event(&raw), "- Published v2.0.0 in bob/app");

        let raw = json!({
            "type": "ForkEvent",
            "actor": { "login": "carol" },
            "repo": { "name": "bob/app" }
        });
        assert_eq!(describe_event(&raw), "- Forked bob/app to carol's account");
    }

    #[test]
    fn test_always_has_marker() {
        let inputs = [json!(null), json!({}), json!("PushEvent"), json!({ "type": "" })];
        for raw in inputs {
            assert!(describe_event(&raw).starts_with("- "));
        }
    }

    #[test]
    fn test_display_matches_format_event() {
        let event = ActivityEvent::from_value(&json!({ "type": "PublicEvent", "repo": { "name": "a/b" } }));
        assert_eq!(event.to_string(), "- Made a/b public");
    }

    #[test]
    fn test_summary_json_shape() {
        let event = ActivityEvent::from_value(&json!({
            "type": "WeirdEvent",
            "actor": { "login": "alice" },
            "repo": { "name": "x/y" }
        }));
        let value = serde_json::to_value(ActivitySummary::new(&event)).unwrap();
        assert_eq!(
            value,
            json!({
                "summary": "alice performed an unknown action (WeirdEvent) in x/y",
                "actor": "alice",
                "repo": "x/y",
                "kind": "unknown",
                "tag": "WeirdEvent"
            })
        );
    }
}

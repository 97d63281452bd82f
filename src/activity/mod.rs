// src/activity/mod.rs
// =============================================================================
// This module turns raw GitHub events into readable lines.
//
// Submodules:
// - event: classifies a raw JSON entry into a typed ActivityEvent
// - format: renders an ActivityEvent as "- <sentence>"
//
// Nothing in here touches the network or can fail. The feed comes from the
// github module and whatever shape it has, we produce a line for it.
// =============================================================================

mod event;
mod format;

pub use event::ActivityEvent;
pub use format::{describe_event, ActivitySummary};

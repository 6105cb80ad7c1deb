// src/activity/format.rs
// =============================================================================
// This module turns one Event into the sentence we show the user.
//
// Each event type has its own template, e.g.
//   PushEvent  -> "Pushed 3 commit(s) to octocat/Hello-World"
//   WatchEvent -> "Starred octocat/Hello-World"
// Types without a template fall back to "<type without 'Event'> in <repo>".
//
// If a template needs a payload field that GitHub did not send (e.g. an
// IssuesEvent without "action"), formatting fails with a MissingField error
// instead of printing a half-empty sentence.
//
// Rust concepts:
// - match on enums: One arm per event type
// - Option::ok_or_else: Turning a missing value into an error
// - &str vs String: Borrowing input, returning new text
// =============================================================================

use crate::error::ActivityError;
use crate::github::{Event, EventKind};

// Shown in place of the commit count when GitHub does not send one
const UNKNOWN_COUNT: &str = "?";

// Formats one event as a single line of text (without the "- " bullet)
pub fn format_event(event: &Event) -> Result<String, ActivityError> {
    let repo = &event.repo;

    let line = match &event.kind {
        EventKind::Push { commit_count } => match commit_count {
            Some(count) => format!("Pushed {} commit(s) to {}", count, repo),
            // Neither "commits" nor "size" was sent; the push still happened
            None => format!("Pushed {} commit(s) to {}", UNKNOWN_COUNT, repo),
        },
        EventKind::Issues { action } => {
            let action = required_text(action, event, "IssuesEvent", "payload.action")?;
            format!("{} an issue in {}", capitalize(action), repo)
        }
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::Create { ref_type } => {
            let ref_type = required_text(ref_type, event, "CreateEvent", "payload.ref_type")?;
            format!("Created {} in {}", ref_type, repo)
        }
        EventKind::Delete { ref_type } => {
            let ref_type = required_text(ref_type, event, "DeleteEvent", "payload.ref_type")?;
            format!("Deleted {} in {}", ref_type, repo)
        }
        EventKind::PullRequest { action } => {
            let action = required_text(action, event, "PullRequestEvent", "payload.action")?;
            format!("{} a pull request in {}", capitalize(action), repo)
        }
        EventKind::IssueComment => format!("Commented on an issue in {}", repo),
        EventKind::Release => format!("Published a release in {}", repo),
        EventKind::Member => format!("Added a collaborator to {}", repo),
        EventKind::Other(tag) => format!("{} in {}", fallback_label(tag), repo),
    };

    Ok(line)
}

// Uppercases the first character and leaves the rest untouched
//
// Example: "opened" -> "Opened", "" -> ""
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Label for event types that have no template of their own
//
// Only a trailing "Event" is removed:
//   "CommitCommentEvent" -> "CommitComment"
//   "Foo"                -> "Foo"
//   "Event"              -> "Event" (the label is never empty)
pub fn fallback_label(event_type: &str) -> &str {
    match event_type.strip_suffix("Event") {
        Some(label) if !label.is_empty() => label,
        _ => event_type,
    }
}

fn required<T>(
    value: Option<T>,
    event: &Event,
    event_type: &'static str,
    field: &'static str,
) -> Result<T, ActivityError> {
    value.ok_or_else(|| ActivityError::MissingField {
        event_type,
        field,
        repo: event.repo.clone(),
    })
}

// Like `required`, but an empty string counts as missing too
fn required_text<'a>(
    value: &'a Option<String>,
    event: &Event,
    event_type: &'static str,
    field: &'static str,
) -> Result<&'a str, ActivityError> {
    let text = value.as_deref().filter(|text| !text.is_empty());
    required(text, event, event_type, field)
}

// src/github/event.rs
// =============================================================================
// This module defines what one entry of a user's activity feed looks like.
//
// The GitHub events API returns objects like:
//   {
//     "type": "PushEvent",
//     "repo": { "name": "octocat/Hello-World", ... },
//     "payload": { "commits": [...], ... },
//     ...lots of other fields we don't need...
//   }
//
// The shape of "payload" depends on "type". Instead of carrying around a
// loose JSON value, we convert every raw object into an Event whose
// EventKind holds only the payload fields that event type actually uses.
//
// Rust concepts:
// - serde(try_from): Deserialize into a helper struct, then convert
// - Enums with data: Each event type carries its own fields
// - Option<T>: Payload fields GitHub may leave out
// =============================================================================

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;

// One event from the feed, ready to be formatted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// Full repository name, e.g. "octocat/Hello-World"
    pub repo: String,
    /// What happened, with the payload fields relevant to it
    pub kind: EventKind,
}

// The event types we have a dedicated template for, plus a catch-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commit_count: Option<usize> },
    Issues { action: Option<String> },
    Watch,
    Fork,
    Create { ref_type: Option<String> },
    Delete { ref_type: Option<String> },
    PullRequest { action: Option<String> },
    IssueComment,
    Release,
    Member,
    /// Any other type; holds the raw tag, e.g. "CommitCommentEvent"
    Other(String),
}

impl EventKind {
    /// The wire tag this kind was decoded from
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::Push { .. } => "PushEvent",
            EventKind::Issues { .. } => "IssuesEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Create { .. } => "CreateEvent",
            EventKind::Delete { .. } => "DeleteEvent",
            EventKind::PullRequest { .. } => "PullRequestEvent",
            EventKind::IssueComment => "IssueCommentEvent",
            EventKind::Release => "ReleaseEvent",
            EventKind::Member => "MemberEvent",
            EventKind::Other(tag) => tag,
        }
    }
}

// The event exactly as it arrives on the wire (only the parts we read)
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,
    repo: RawRepo,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

// Payload of a PushEvent
//
// Older API responses list every commit; newer ones only carry "size".
// We don't need the commits themselves, just how many there are, so
// IgnoredAny skips their contents.
#[derive(Debug, Default, Deserialize)]
struct PushPayload {
    commits: Option<Vec<IgnoredAny>>,
    size: Option<usize>,
}

// Payload of IssuesEvent and PullRequestEvent
#[derive(Debug, Default, Deserialize)]
struct ActionPayload {
    action: Option<String>,
}

// Payload of CreateEvent and DeleteEvent
#[derive(Debug, Default, Deserialize)]
struct RefPayload {
    ref_type: Option<String>,
}

impl TryFrom<RawEvent> for Event {
    type Error = serde_json::Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let payload = &raw.payload;

        let kind = match raw.event_type.as_str() {
            "PushEvent" => {
                let push: PushPayload = read_payload(payload)?;
                let commit_count = match push.commits {
                    Some(commits) => Some(commits.len()),
                    None => push.size,
                };
                EventKind::Push { commit_count }
            }
            "IssuesEvent" => EventKind::Issues {
                action: read_payload::<ActionPayload>(payload)?.action,
            },
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => EventKind::Create {
                ref_type: read_payload::<RefPayload>(payload)?.ref_type,
            },
            "DeleteEvent" => EventKind::Delete {
                ref_type: read_payload::<RefPayload>(payload)?.ref_type,
            },
            "PullRequestEvent" => EventKind::PullRequest {
                action: read_payload::<ActionPayload>(payload)?.action,
            },
            "IssueCommentEvent" => EventKind::IssueComment,
            "ReleaseEvent" => EventKind::Release,
            "MemberEvent" => EventKind::Member,
            _ => EventKind::Other(raw.event_type),
        };

        Ok(Event {
            repo: raw.repo.name,
            kind,
        })
    }
}

// Reads a typed payload out of the raw JSON value
//
// A missing or null payload is treated as an empty one, so every field
// simply comes out as None.
fn read_payload<T>(payload: &Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if payload.is_null() {
        return Ok(T::default());
    }
    T::deserialize(payload)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(try_from = "RawEvent")] do?
//    - serde first deserializes the JSON into RawEvent (a plain struct)
//    - then calls our TryFrom impl to build the real Event
//    - if TryFrom fails, the error becomes a normal JSON decoding error
//
// 2. Why is the field called event_type?
//    - `type` is a Rust keyword, so the field is named event_type and
//      #[serde(rename = "type")] maps it to the JSON key
//
// 3. What is IgnoredAny?
//    - A serde type that accepts any JSON value and throws it away
//    - Vec<IgnoredAny> lets us count array items without modelling them
// -----------------------------------------------------------------------------

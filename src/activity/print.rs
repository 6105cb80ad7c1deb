// src/activity/print.rs
// =============================================================================
// This module prints the formatted activity list.
//
// Output for a non-empty feed:
//
//   (blank line)
//   Recent Activity:
//   ==================================================
//   - Pushed 3 commit(s) to octocat/Hello-World
//   - Starred rust-lang/rust
//
// Output for an empty feed:
//
//   No recent activity found.
//
// Every event is formatted BEFORE anything is written, so if one event
// cannot be formatted the user sees the error and no half-printed list.
// =============================================================================

use std::io::Write;

use tracing::trace;

use super::format::format_event;
use crate::error::ActivityError;
use crate::github::Event;

const SEPARATOR_WIDTH: usize = 50;

// Prints the activity of a user in feed order
//
// Parameters:
//   events: the decoded feed (newest first)
//   out: where to write; stdout in main.rs, a Vec<u8> in tests
pub fn print_activity<W: Write>(events: &[Event], out: &mut W) -> Result<(), ActivityError> {
    if events.is_empty() {
        writeln!(out, "No recent activity found.")?;
        return Ok(());
    }

    let lines = events
        .iter()
        .map(|event| {
            trace!(event_type = event.kind.type_name(), repo = %event.repo, "formatting event");
            format_event(event)
        })
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out)?;
    writeln!(out, "Recent Activity:")?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;

    for line in lines {
        writeln!(out, "- {}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{decode_events, EventKind};

    fn render(events: &[Event]) -> Result<String, ActivityError> {
        let mut out = Vec::new();
        print_activity(events, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_feed() {
        assert_eq!(render(&[]).unwrap(), "No recent activity found.\n");
    }

    #[test]
    fn test_header_and_lines_in_order() {
        let events = vec![
            Event {
                repo: "octocat/Hello-World".to_string(),
                kind: EventKind::Push { commit_count: Some(1) },
            },
            Event {
                repo: "rust-lang/rust".to_string(),
                kind: EventKind::Watch,
            },
        ];

        let expected = format!(
            "\nRecent Activity:\n{}\n- Pushed 1 commit(s) to octocat/Hello-World\n- Starred rust-lang/rust\n",
            "=".repeat(50)
        );
        assert_eq!(render(&events).unwrap(), expected);
    }

    #[test]
    fn test_format_error_prints_nothing() {
        let events = vec![
            Event {
                repo: "rust-lang/rust".to_string(),
                kind: EventKind::Fork,
            },
            Event {
                repo: "octocat/Hello-World".to_string(),
                kind: EventKind::Issues { action: None },
            },
        ];

        let mut out = Vec::new();
        let result = print_activity(&events, &mut out);
        assert!(matches!(result, Err(ActivityError::MissingField { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_push_without_commit_list_keeps_the_feed() {
        let body = r#"[
            {"type": "WatchEvent", "repo": {"name": "rust-lang/rust"}, "payload": {"action": "started"}},
            {"type": "PushEvent", "repo": {"name": "octocat/Hello-World"},
             "payload": {"push_id": 1, "ref": "refs/heads/main", "head": "abc", "before": "def"}}
        ]"#;

        let events = decode_events(body).unwrap();
        let output = render(&events).unwrap();

        assert!(output.contains("- Starred rust-lang/rust\n"));
        assert!(output.contains("- Pushed ? commit(s) to octocat/Hello-World\n"));
    }
}

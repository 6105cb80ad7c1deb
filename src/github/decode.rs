// src/github/decode.rs
// =============================================================================
// This module turns the raw response body into a list of events.
//
// The body must be a JSON array. Anything else (an object, a string, an
// empty body, broken JSON) is reported as a decode error. The order of the
// array is the feed order (newest first) and is kept as-is.
// =============================================================================

use tracing::debug;

use super::event::Event;
use crate::error::ActivityError;

// Parses the response body into events, preserving their order
pub fn decode_events(body: &str) -> Result<Vec<Event>, ActivityError> {
    let events: Vec<Event> = serde_json::from_str(body)?;
    debug!(count = events.len(), "decoded events");
    Ok(events)
}

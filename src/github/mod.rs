// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to or comes from GitHub.
//
// Submodules:
// - fetch: Sends the request for a user's event feed
// - event: The Event type and its per-type payload fields
// - decode: Turns the response body into a list of events
// =============================================================================

mod decode;
mod event;
mod fetch;

// Re-export the public pieces so callers can write `github::fetch_user_events`
pub use decode::decode_events;
pub use event::{Event, EventKind};
pub use fetch::{fetch_user_events, DEFAULT_API_URL};

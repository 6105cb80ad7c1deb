// src/error.rs
// =============================================================================
// This file defines every way a run of github-activity can fail.
//
// All of these failures are fatal: main.rs prints the message once to
// stderr (prefixed with "Error: ") and exits with status 1.
//
// Rust concepts:
// - Enums: One variant per failure kind
// - thiserror: Derives Display and std::error::Error for us
// - #[from]: Lets the ? operator convert library errors automatically
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    /// The API answered 404 for the requested user
    #[error("User '{username}' not found")]
    NotFound { username: String },

    /// The API answered with anything other than 200 or 404
    #[error("GitHub API returned status code {status}")]
    UnexpectedStatus { status: u16 },

    /// DNS, connection, TLS or body transfer failure
    #[error("failed to fetch data: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a JSON list of events
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An event is missing a payload field its template needs
    #[error("{event_type} in {repo} has no {field}")]
    MissingField {
        event_type: &'static str,
        field: &'static str,
        repo: String,
    },

    /// The --api-url value could not be turned into an events endpoint
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// Writing to stdout failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/<username>/events
// - Send ONE GET request with the three headers GitHub asks clients to send
// - Classify the response by status code:
//     200 -> read the whole body and hand it back
//     404 -> the user does not exist
//     any other status -> unexpected, report the code
//
// There is no authentication, pagination, retry or timeout. We only ever
// read the first page the API returns.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - match on StatusCode: To branch on the response
// =============================================================================

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::error::ActivityError;

/// Base URL of the public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const CLIENT_USER_AGENT: &str = "GitHub-Activity-CLI";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

// Fetches the raw event feed of a user
//
// Parameters:
//   api_url: base URL of the API host (DEFAULT_API_URL outside of tests)
//   username: GitHub login to look up
//
// Returns: Result<String>
//   Success: the complete response body (not parsed yet)
//   Error: NotFound, UnexpectedStatus, Transport or InvalidApiUrl
pub async fn fetch_user_events(api_url: &str, username: &str) -> Result<String, ActivityError> {
    let url = events_url(api_url, username)?;

    let client = Client::builder()
        .default_headers(github_headers())
        .build()?;

    info!(%url, "fetching user events");
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!(status = status.as_u16(), "received response");

    match status {
        StatusCode::OK => {
            // text() waits until the whole body has arrived
            let body = response.text().await?;
            debug!(bytes = body.len(), "read response body");
            Ok(body)
        }
        StatusCode::NOT_FOUND => Err(ActivityError::NotFound {
            username: username.to_string(),
        }),
        other => Err(ActivityError::UnexpectedStatus {
            status: other.as_u16(),
        }),
    }
}

// Builds <api_url>/users/<username>/events
//
// The username is pushed as a single path segment, so characters like
// '/' or ' ' get percent-encoded instead of changing the path.
//
// Example:
//   ("https://api.github.com", "octocat")
//     -> "https://api.github.com/users/octocat/events"
fn events_url(api_url: &str, username: &str) -> Result<Url, ActivityError> {
    let invalid = |reason: String| ActivityError::InvalidApiUrl {
        url: api_url.to_string(),
        reason,
    };

    let mut url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot have a path".to_string()))?
        .pop_if_empty()
        .extend(["users", username, "events"]);

    Ok(url)
}

// The headers sent with every request
fn github_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(
        HeaderName::from_static("x-github-api-version"),
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a HeaderMap on the client instead of .header() on the request?
//    - default_headers() attaches the headers to every request the client sends
//    - We only send one request, but it keeps the header list in one place
//
// 2. Why match on StatusCode instead of is_success()?
//    - Only 200 means "here is the feed"; 404 gets its own message
//    - Other 2xx codes (e.g. 204) carry no feed, so they are unexpected too
//
// 3. Where does the ? operator send reqwest errors?
//    - ActivityError has #[from] reqwest::Error on its Transport variant
//    - So ? wraps DNS, connection and TLS failures in Transport automatically
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;

    #[test]
    fn test_events_url() {
        let url = events_url(DEFAULT_API_URL, "octocat").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/events");
    }

    #[test]
    fn test_events_url_escapes_username() {
        let url = events_url("http://127.0.0.1:8080/", "a/b c").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/users/a%2Fb%20c/events");
    }

    #[test]
    fn test_events_url_rejects_garbage() {
        let result = events_url("not a url", "octocat");
        assert!(matches!(result, Err(ActivityError::InvalidApiUrl { .. })));

        let result = events_url("mailto:someone@example.com", "octocat");
        assert!(matches!(result, Err(ActivityError::InvalidApiUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_sends_github_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/octocat/events")
                    .header("user-agent", "GitHub-Activity-CLI")
                    .header("accept", "application/vnd.github+json")
                    .header("x-github-api-version", "2022-11-28");
                then.status(200).body("[]");
            })
            .await;

        let body = fetch_user_events(&server.base_url(), "octocat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/nobody-here/events");
                then.status(404).body(r#"{"message": "Not Found"}"#);
            })
            .await;

        let result = fetch_user_events(&server.base_url(), "nobody-here").await;
        match result {
            Err(ActivityError::NotFound { username }) => assert_eq!(username, "nobody-here"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_unexpected_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat/events");
                then.status(403).body(r#"{"message": "API rate limit exceeded"}"#);
            })
            .await;

        let result = fetch_user_events(&server.base_url(), "octocat").await;
        assert!(matches!(
            result,
            Err(ActivityError::UnexpectedStatus { status: 403 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_other_success_codes_are_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat/events");
                then.status(204);
            })
            .await;

        let result = fetch_user_events(&server.base_url(), "octocat").await;
        assert!(matches!(
            result,
            Err(ActivityError::UnexpectedStatus { status: 204 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        // Nothing listens on port 1, so the connection is refused
        let result = fetch_user_events("http://127.0.0.1:1", "octocat").await;
        assert!(matches!(result, Err(ActivityError::Transport(_))));
    }
}

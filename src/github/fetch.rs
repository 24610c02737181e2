// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public events from the GitHub API.
//
// Strategy:
// - Substitute the username verbatim into /users/{username}/events
// - One unauthenticated GET, no query string, no custom timeout
// - Return the whole body; the caller decodes it
//
// The HTTP status is deliberately NOT checked here. A 404 or a rate-limit
// response still comes back as a body; it just won't decode as an array.
//
// Rust concepts:
// - async functions: For network I/O
// - Ownership: the Response is dropped when this function returns, which
//   releases the connection on every path (success or error)
// =============================================================================

use reqwest::Client;
use url::Url;

use crate::error::ActivityError;

/// Base URL used when neither --api-url nor GITHUB_API_URL is set
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects requests that carry no User-Agent at all
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Fetches the first page of public events for a user
//
// Parameters:
//   api_url: base of the API (normally https://api.github.com)
//   username: inserted into the path as-is, no validation
//
// Returns: the raw response body, whatever the status code
pub async fn fetch_user_events(api_url: &Url, username: &str) -> Result<Vec<u8>, ActivityError> {
    let url = events_url(api_url, username);
    let client = build_client()?;

    log::debug!("GET {}", url);
    let response = client.get(&url).send().await?;
    log::debug!("{} responded with HTTP {}", url, response.status());

    let body = response.bytes().await?;
    Ok(body.to_vec())
}

// Builds the events URL for a user
//
// Example:
//   ("https://api.github.com", "octocat")
//     -> "https://api.github.com/users/octocat/events"
fn events_url(api_url: &Url, username: &str) -> String {
    format!(
        "{}/users/{}/events",
        api_url.as_str().trim_end_matches('/'),
        username
    )
}

fn build_client() -> Result<Client, ActivityError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // Serves exactly one canned HTTP response on localhost.
    // The handle resolves to the request head the client sent.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        let url = Url::parse(&format!("http://{}", addr)).unwrap();
        (url, handle)
    }

    #[test]
    fn test_events_url_default_base() {
        let base = Url::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(
            events_url(&base, "octocat"),
            "https://api.github.com/users/octocat/events"
        );
    }

    #[test]
    fn test_events_url_trims_trailing_slash() {
        let base = Url::parse("http://localhost:8080/api/v3/").unwrap();
        assert_eq!(
            events_url(&base, "octocat"),
            "http://localhost:8080/api/v3/users/octocat/events"
        );
    }

    #[test]
    fn test_events_url_inserts_username_verbatim() {
        let base = Url::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(
            events_url(&base, "some-user_01"),
            "https://api.github.com/users/some-user_01/events"
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_plain_get() {
        let body = r#"[{"type":"PushEvent","repo":{"name":"octo/repo"},"payload":{}}]"#;
        let (base, server) = serve_once("200 OK", body).await;

        let fetched = fetch_user_events(&base, "octocat").await.unwrap();
        assert_eq!(fetched, body.as_bytes());

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /users/octocat/events HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("user-agent: gh-activity/"));
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_fetch_does_not_reject_error_status() {
        let body = r#"{"message":"Not Found"}"#;
        let (base, server) = serve_once("404 Not Found", body).await;

        let fetched = fetch_user_events(&base, "nobody").await.unwrap();
        assert_eq!(fetched, body.as_bytes());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{}", addr)).unwrap();
        let result = fetch_user_events(&base, "octocat").await;
        assert!(matches!(result, Err(ActivityError::Transport(_))));
    }
}

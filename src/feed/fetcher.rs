use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;

/// Identity sent with every feed request. The upstream server rejects
/// default automation user agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching the feed.
///
/// Every variant means the feed could not be obtained; there is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection refused, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

/// Builds the HTTP client used for the feed request.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

/// Fetches the raw feed body from `url` in a single attempt.
///
/// # Errors
///
/// - [`FetchError::Network`] - Connection, DNS or TLS errors
/// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
/// - [`FetchError::Timeout`] - Request and body took longer than `timeout`
/// - [`FetchError::ResponseTooLarge`] - Body exceeded 10MB
/// - [`FetchError::IncompleteResponse`] - Body shorter than Content-Length
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    tracing::info!(feed = %url, "Fetching feed");

    let bytes = tokio::time::timeout(timeout, async {
        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        read_limited_bytes(response, MAX_FEED_SIZE).await
    })
    .await
    .map_err(|_| FetchError::Timeout(timeout))??;

    tracing::debug!(feed = %url, bytes = bytes.len(), "Feed downloaded");
    Ok(bytes)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    let expected_length = response.content_length();

    // Fast path: check Content-Length header
    if let Some(len) = expected_length {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    ensure_complete(expected_length, bytes.len())?;
    Ok(bytes)
}

/// Fails when fewer bytes arrived than the Content-Length announced.
fn ensure_complete(expected: Option<u64>, received: usize) -> Result<(), FetchError> {
    match expected {
        Some(expected) if (received as u64) < expected => {
            Err(FetchError::IncompleteResponse { expected, received })
        }
        _ => Ok(()),
    }
}

// ABOUTME: Resource handling module for fetching a single web page.
// ABOUTME: Handles the HTTP GET with status checks, content-length limits, and charset decoding.

use std::collections::HashMap;

use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::error::ParseError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset from the content-type header when present.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
pub(crate) fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Map a transport error to Timeout or Fetch.
fn transport_error(url: &str, what: &str, err: reqwest::Error) -> ParseError {
    if err.is_timeout() {
        ParseError::timeout(url, "Fetch", Some(anyhow::anyhow!("{}: {}", what, err)))
    } else {
        ParseError::fetch(url, "Fetch", Some(anyhow::anyhow!("{}: {}", what, err)))
    }
}

/// Reads the body chunk by chunk, failing as soon as it grows past `limit` bytes.
///
/// Chunked responses carry no Content-Length, so the cap is enforced here too.
async fn read_body_capped(
    mut response: reqwest::Response,
    url: &str,
    limit: usize,
) -> Result<Bytes, ParseError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| transport_error(url, "failed to read body", e))?
    {
        if body.len() + chunk.len() > limit {
            return Err(ParseError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Fetch a resource from the given URL.
///
/// Any transport failure or 4xx/5xx status is an error. There are no retries;
/// redirects follow the client's default policy.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ParseError> {
    if url.is_empty() {
        return Err(ParseError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ParseError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ParseError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    debug!(url, "sending request");
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(url, "request failed", e))?;

    let status = response.status();
    let final_url = response.url().to_string();
    debug!(url, status = status.as_u16(), final_url = %final_url, "received response");

    if status.is_client_error() || status.is_server_error() {
        return Err(ParseError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status)),
        ));
    }

    // Check Content-Length header before reading body
    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ParseError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = read_body_capped(response, url, MAX_CONTENT_LENGTH).await?;

    Ok(FetchResult {
        status: status.as_u16(),
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent("test-agent")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/plain; charset=utf-8")
                .body("hello");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/test"), &FetchOptions::default()).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.text(), "hello");
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/headers")
                .header("user-agent", "test-agent")
                .header("x-extra", "1");
            then.status(200).body("ok");
        });

        let client = create_test_client();
        let mut opts = FetchOptions::default();
        opts.headers.insert("x-extra".to_string(), "1".to_string());

        let result = fetch(&client, &server.url("/headers"), &opts).await;
        mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_404_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/notfound");
            then.status(404).body("not found");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/notfound"), &FetchOptions::default()).await;
        mock.assert();

        let err = result.expect_err("should fail on 404");
        assert!(err.is_fetch());
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_500_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(503).body("unavailable");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/boom"), &FetchOptions::default()).await;
        mock.assert();

        assert!(result.expect_err("should fail on 503").is_fetch());
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_secs(3))
                .body("late");
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap();
        let result = fetch(&client, &server.url("/slow"), &FetchOptions::default()).await;

        let err = result.expect_err("should time out");
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_fetch_rejects_bad_urls() {
        let client = create_test_client();
        let opts = FetchOptions::default();

        assert!(fetch(&client, "", &opts).await.unwrap_err().is_invalid_url());
        assert!(fetch(&client, "not a url", &opts)
            .await
            .unwrap_err()
            .is_invalid_url());
        assert!(fetch(&client, "ftp://example.com/file", &opts)
            .await
            .unwrap_err()
            .is_invalid_url());
    }

    #[tokio::test]
    async fn test_body_cap_stops_mid_stream() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/big");
            then.status(200).body("x".repeat(100));
        });

        let client = create_test_client();
        let url = server.url("/big");

        let response = client.get(&url).send().await.unwrap();
        let err = read_body_capped(response, &url, 50)
            .await
            .expect_err("body over the cap");
        assert!(err.is_fetch());

        let response = client.get(&url).send().await.unwrap();
        let body = read_body_capped(response, &url, 100).await.unwrap();
        assert_eq!(body.len(), 100);
    }

    #[test]
    fn test_max_content_length_constant() {
        assert_eq!(MAX_CONTENT_LENGTH, 10 * 1024 * 1024);
    }

    #[test]
    fn test_decode_iso_8859_1_from_header() {
        let iso_bytes: &[u8] = &[0x63, 0x61, 0x66, 0xe9];
        let decoded = decode_body(iso_bytes, Some("text/html; charset=iso-8859-1"));
        assert_eq!(decoded, "caf\u{e9}");
    }

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=ISO-8859-1"),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn test_decode_body_with_charset() {
        let body = "hello world".as_bytes();
        let decoded = decode_body(body, Some("text/plain; charset=utf-8"));
        assert_eq!(decoded, "hello world");
    }
}

// ABOUTME: Configuration for the extractor: defaults, the Options struct, and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Page scraped when no URL is given on the command line.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Web_scraping";

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "CredibleSorcerer/1.0 (student project)";

/// Request timeout covering connect, redirects and body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of characters kept in `visible_text_preview`.
pub const PREVIEW_CHARS: usize = 4000;

/// Configuration options for the extractor client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
    pub preview_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            http_client: None,
            preview_chars: PREVIEW_CHARS,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client. Timeout and User-Agent are then up to that client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Set how many characters of visible text go into the preview.
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.opts.preview_chars = chars;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

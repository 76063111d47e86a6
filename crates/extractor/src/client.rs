// ABOUTME: The Client that runs the pipeline: fetch one page, parse it, extract fields, assemble a record.
// ABOUTME: Provides async scrape() for URLs and scrape_html() for markup already in hand.

use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::{debug, info};

use crate::dom::parse_document;
use crate::error::ParseError;
use crate::extractors::{
    extract_author, extract_links, extract_publication_date, extract_title, extract_visible_text,
};
use crate::options::{ClientBuilder, Options};
use crate::resource::{decode_body, fetch, FetchOptions};
use crate::result::ArticleRecord;

/// Extracts article metadata from web pages.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Fetch `url` and extract its article record.
    ///
    /// Only the fetch can fail; every missing field degrades to a sentinel.
    pub async fn scrape(&self, url: &str) -> Result<ArticleRecord, ParseError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };

        let page = fetch(&self.http_client, url, &fetch_opts).await?;
        info!(url, status = page.status, bytes = page.body.len(), "fetched page");

        Ok(self.scrape_html(&page.text(), url))
    }

    /// Extract the article record from markup already in hand.
    pub fn scrape_html(&self, html: &str, url: &str) -> ArticleRecord {
        let doc = parse_document(html);
        self.extract(&doc, url)
    }

    /// Read a local HTML file and extract its record, reporting `url` as its address.
    ///
    /// The bytes go through the same charset detection as fetched pages.
    pub fn scrape_file(&self, path: &Path, url: &str) -> Result<ArticleRecord, ParseError> {
        let bytes = fs::read(path).map_err(|e| {
            ParseError::io(
                url,
                "Read",
                Some(anyhow::anyhow!("{}: {}", path.display(), e)),
            )
        })?;
        Ok(self.scrape_html(&decode_body(&bytes, None), url))
    }

    fn extract(&self, doc: &Html, url: &str) -> ArticleRecord {
        let title = extract_title(doc);
        let author = extract_author(doc);
        let publication_date = extract_publication_date(doc);
        let links = extract_links(doc);
        let text = extract_visible_text(doc);
        debug!(
            title = %title,
            author = %author,
            publication_date = %publication_date,
            links = links.len(),
            text_chars = text.chars().count(),
            "extracted fields"
        );

        ArticleRecord::assemble(
            url,
            title,
            author,
            publication_date,
            links,
            &text,
            self.opts.preview_chars,
        )
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

// ABOUTME: Main library entry point for the article extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ArticleRecord, ParseError, and the field extractors.

//! Credible extractor - pulls article metadata out of a single web page.
//!
//! One GET, one parse, five independent heuristic extractors (title, author,
//! publication date, links, visible text), one JSON record.
//!
//! # Example
//!
//! ```no_run
//! use credible_extractor::{Client, ParseError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), ParseError> {
//!     let client = Client::builder().build();
//!     let record = client.scrape("https://en.wikipedia.org/wiki/Web_scraping").await?;
//!     println!("{} ({} links)", record.title, record.link_count);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ParseError};
pub use crate::extractors::{
    extract_author, extract_links, extract_publication_date, extract_title, extract_visible_text,
    find_article_ld, StructuredData,
};
pub use crate::options::{ClientBuilder, Options, DEFAULT_URL};
pub use crate::resource::{fetch, FetchOptions, FetchResult};
pub use crate::result::ArticleRecord;

// ABOUTME: Field extraction heuristics for article pages.
// ABOUTME: Title, author, date, links, visible text, and the JSON-LD lookup they share.

//! Field extractors.
//!
//! Every extractor is a pure function over a parsed [`scraper::Html`] and
//! never fails: when no heuristic applies it returns a sentinel string (or
//! an empty list for links).
//!
//! Submodules:
//! - `fields`: shared lookup helpers and the heuristic chain runner.
//! - `structured`: JSON-LD article block lookup.
//! - `metadata`: title, author and publication date.
//! - `links`: outbound links.
//! - `text`: visible text of the main content area.

pub mod fields;
pub mod links;
pub mod metadata;
pub mod structured;
pub mod text;

pub use links::extract_links;
pub use metadata::{extract_author, extract_publication_date, extract_title};
pub use structured::{find_article_ld, StructuredData};
pub use text::extract_visible_text;

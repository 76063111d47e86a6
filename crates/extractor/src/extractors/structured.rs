// ABOUTME: JSON-LD structured data lookup for article-like pages.
// ABOUTME: Finds the first ld+json block whose @type is an article type; malformed blocks are skipped.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

/// `@type` values treated as an article.
pub const ARTICLE_TYPES: &[&str] = &[
    "NewsArticle",
    "Article",
    "BlogPosting",
    "ReportageNewsArticle",
];

static LD_JSON_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

/// The parts of an article JSON-LD block the extractors read.
///
/// `author` and `datePublished` keep their raw JSON shape; `Value::Null`
/// stands for an absent key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(default)]
    pub author: Value,
    #[serde(rename = "datePublished", default)]
    pub date_published: Value,
}

/// Decodes one script body into an article block, if it is one.
fn decode_candidate(raw: &str) -> Option<StructuredData> {
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(v) => v,
        Err(e) => {
            trace!(error = %e, "skipping malformed ld+json block");
            return None;
        }
    };

    // Some sites wrap the block in a list; only the first entry counts.
    let value = match value {
        Value::Array(items) => items.into_iter().next()?,
        other => other,
    };
    if !value.is_object() {
        return None;
    }

    let data: StructuredData = serde_json::from_value(value).ok()?;
    if ARTICLE_TYPES.contains(&data.kind.as_str()) {
        Some(data)
    } else {
        None
    }
}

/// Returns the first article-typed JSON-LD block in document order.
pub fn find_article_ld(doc: &Html) -> Option<StructuredData> {
    doc.select(&LD_JSON_SELECTOR)
        .find_map(|script| decode_candidate(&script.text().collect::<String>()))
}

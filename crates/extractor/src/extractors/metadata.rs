// ABOUTME: Title, author, and publication date extractors built as ordered heuristic chains.
// ABOUTME: Each chain tries JSON-LD, meta tags, then markup fallbacks, ending in a sentinel string.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

use super::fields::{first_attr, first_class_text, first_match, first_meta_content_of, Strategy};
use super::structured::find_article_ld;

pub const NO_TITLE: &str = "(no title found)";
pub const NO_AUTHOR: &str = "(no author found)";
pub const NO_DATE: &str = "(no publication date found)";

/// Author meta tags in priority order.
const AUTHOR_META_SELECTORS: &[&str] = &[
    "meta[property='article:author']",
    "meta[name='author']",
    "meta[name='byl']",
    "meta[name='DC.creator']",
];

/// Publication date meta tags in priority order.
const DATE_META_SELECTORS: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[name='publication_date']",
    "meta[name='date']",
    "meta[name='pubdate']",
    "meta[name='DC.date.issued']",
];

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Trimmed text of the first `<title>`, or [`NO_TITLE`].
pub fn extract_title(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// JSON truthiness: null, false, 0, "" and empty containers don't count.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a JSON-LD author value.
///
/// A list whose names are all empty yields `Some("")` rather than falling
/// through to the meta tags.
fn author_from_value(author: &Value) -> Option<String> {
    if !is_truthy(author) {
        return None;
    }
    match author {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => Some(
            obj.get("name")
                .and_then(Value::as_str)
                .unwrap_or(NO_AUTHOR)
                .to_string(),
        ),
        Value::Array(entries) => {
            let names: Vec<&str> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(obj) => Some(obj.get("name").and_then(Value::as_str).unwrap_or("")),
                    _ => None,
                })
                .filter(|name| !name.is_empty())
                .collect();
            Some(names.join(", "))
        }
        // Only `true` reaches this arm.
        Value::Bool(_) => Some("True".to_string()),
        other => Some(other.to_string()),
    }
}

fn author_from_ld(doc: &Html) -> Option<String> {
    find_article_ld(doc).and_then(|ld| author_from_value(&ld.author))
}

fn author_from_meta(doc: &Html) -> Option<String> {
    first_meta_content_of(doc, AUTHOR_META_SELECTORS)
}

fn author_from_author_class(doc: &Html) -> Option<String> {
    first_class_text(doc, "author")
}

fn author_from_byline_class(doc: &Html) -> Option<String> {
    first_class_text(doc, "byline")
}

const AUTHOR_CHAIN: &[(&str, Strategy)] = &[
    ("ld+json author", author_from_ld),
    ("author meta", author_from_meta),
    ("author class", author_from_author_class),
    ("byline class", author_from_byline_class),
];

/// Author(s) of the article, or [`NO_AUTHOR`].
pub fn extract_author(doc: &Html) -> String {
    first_match(doc, AUTHOR_CHAIN).unwrap_or_else(|| NO_AUTHOR.to_string())
}

fn date_from_ld(doc: &Html) -> Option<String> {
    let ld = find_article_ld(doc)?;
    match ld.date_published {
        Value::String(s) if !s.is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn date_from_meta(doc: &Html) -> Option<String> {
    first_meta_content_of(doc, DATE_META_SELECTORS)
}

fn date_from_time_element(doc: &Html) -> Option<String> {
    first_attr(doc, "time[datetime]", "datetime")
}

const DATE_CHAIN: &[(&str, Strategy)] = &[
    ("ld+json datePublished", date_from_ld),
    ("date meta", date_from_meta),
    ("time element", date_from_time_element),
];

/// Publication date exactly as written in the page, or [`NO_DATE`].
pub fn extract_publication_date(doc: &Html) -> String {
    first_match(doc, DATE_CHAIN).unwrap_or_else(|| NO_DATE.to_string())
}

// ABOUTME: Shared lookup helpers for the field extractors: meta content, attributes, class text.
// ABOUTME: Also defines the Strategy type and first_match, which runs a heuristic chain in order.

//! Generic field lookup utilities.
//!
//! Each helper answers one question about the document and returns `None`
//! when it does not apply. The per-field extractors chain them with
//! [`first_match`].
//!
//! Key behaviors:
//! - Only the first element matching a selector is consulted.
//! - Returned values are trimmed.

use scraper::{Html, Selector};
use tracing::trace;

/// One tier of a heuristic chain.
pub type Strategy = fn(&Html) -> Option<String>;

/// Runs `strategies` in order and returns the first `Some`.
pub fn first_match(doc: &Html, strategies: &[(&str, Strategy)]) -> Option<String> {
    strategies.iter().find_map(|(name, strategy)| {
        let found = strategy(doc);
        if found.is_some() {
            trace!(tier = *name, "heuristic matched");
        }
        found
    })
}

/// Content of the first element matching `selector`, if that content is non-empty.
///
/// The emptiness check is made on the raw attribute; the returned value is trimmed.
pub fn first_meta_content(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let el = doc.select(&sel).next()?;
    let content = el.value().attr("content")?;
    if content.is_empty() {
        return None;
    }
    Some(content.trim().to_string())
}

/// Tries each meta selector in order, returning the first usable content.
pub fn first_meta_content_of(doc: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .find_map(|sel| first_meta_content(doc, sel))
}

/// Trimmed value of `attr` on the first element matching `selector`.
pub fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let el = doc.select(&sel).next()?;
    el.value().attr(attr).map(|v| v.trim().to_string())
}

/// Trimmed text of the first element whose lowercased `class` contains `needle`.
///
/// Returns `None` when no element matches or the first match has no text.
pub fn first_class_text(doc: &Html, needle: &str) -> Option<String> {
    let sel = Selector::parse("[class]").ok()?;
    let el = doc.select(&sel).find(|el| {
        el.value()
            .attr("class")
            .is_some_and(|c| c.to_lowercase().contains(needle))
    })?;
    let text = el.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

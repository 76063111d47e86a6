// ABOUTME: Visible text extraction from the main content area of a page.
// ABOUTME: Picks article/wiki/main roots, drops script and style on a private copy, collapses whitespace.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::dom::{collapse_whitespace, ScopedCopy};

/// Content roots in priority order.
static ROOT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["article", "div#mw-content-text", "div[role='main']"]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

/// Elements whose contents never count as visible text.
const HIDDEN_TAGS: &[&str] = &["script", "style"];

/// Node the text is read from: the first matching content root, else the whole document.
fn content_root(doc: &Html) -> NodeId {
    ROOT_SELECTORS
        .iter()
        .find_map(|sel| doc.select(sel).next())
        .map(|el| el.id())
        .unwrap_or_else(|| doc.tree.root().id())
}

/// Cleaned visible text of the page's main content, untruncated.
pub fn extract_visible_text(doc: &Html) -> String {
    let scoped = ScopedCopy::without_tags(doc, content_root(doc), HIDDEN_TAGS);
    collapse_whitespace(&scoped.text(" "))
}

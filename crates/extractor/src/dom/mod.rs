// ABOUTME: DOM helpers over scraper's Html tree used by the field extractors.
// ABOUTME: Parsing, scoped copies with tags removed, and text collection with whitespace collapsing.

//! Document model helpers.
//!
//! The parsed [`Html`] is shared read-only between extractors. Anything that
//! needs to drop nodes works on a [`ScopedCopy`] so the shared tree is never
//! touched.

use ego_tree::{NodeId, NodeRef};
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, HtmlTreeSink, Node};

/// Parse markup into a queryable document.
///
/// Scripting is off, so `<noscript>` content is parsed as ordinary elements
/// instead of one raw text node.
pub fn parse_document(markup: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(markup)
}

/// Collapses runs of whitespace (including newlines and tabs) into single spaces and trims.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenates all text nodes below `node` in document order, joined by `separator`.
pub fn text_with_separator(node: NodeRef<'_, Node>, separator: &str) -> String {
    node.descendants()
        .filter_map(|n| match n.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// A private copy of a document, rooted at one node, with some elements removed.
pub struct ScopedCopy {
    html: Html,
    root: NodeId,
}

impl ScopedCopy {
    /// Copies `doc` and detaches every element named in `tags` found below `root`.
    ///
    /// Node ids survive the copy, so `root` may come from the original document.
    pub fn without_tags(doc: &Html, root: NodeId, tags: &[&str]) -> Self {
        let mut html = doc.clone();

        let doomed: Vec<NodeId> = match html.tree.get(root) {
            Some(root_ref) => root_ref
                .descendants()
                .filter(|n| match n.value() {
                    Node::Element(el) => tags.iter().any(|t| el.name().eq_ignore_ascii_case(t)),
                    _ => false,
                })
                .map(|n| n.id())
                .collect(),
            None => Vec::new(),
        };

        for id in doomed {
            if let Some(mut node) = html.tree.get_mut(id) {
                node.detach();
            }
        }

        Self { html, root }
    }

    /// Text of the scoped root, joined by `separator`.
    pub fn text(&self, separator: &str) -> String {
        self.html
            .tree
            .get(self.root)
            .map(|node| text_with_separator(node, separator))
            .unwrap_or_default()
    }
}

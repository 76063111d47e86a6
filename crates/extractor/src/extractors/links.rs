// ABOUTME: Outbound link extraction: every href in document order that starts with "http".
// ABOUTME: No deduplication and no relative URL resolution.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static HREF_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("[href]").unwrap());

/// Absolute links found on any element carrying `href`.
///
/// The test is a plain `"http"` prefix, so `httpfoo` passes as well as
/// `http://` and `https://`.
pub fn extract_links(doc: &Html) -> Vec<String> {
    doc.select(&HREF_SELECTOR)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_only_http_prefixed() {
        let doc = Html::parse_document(
            r#"<html><body>
                <a href="https://example.com/x">x</a>
                <a href="/relative">rel</a>
                <a href="ftp://x">ftp</a>
            </body></html>"#,
        );
        assert_eq!(extract_links(&doc), vec!["https://example.com/x".to_string()]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let doc = Html::parse_document(
            r#"<html><head><link rel="stylesheet" href="http://cdn.example.com/a.css"></head>
            <body>
                <a href="https://b.example.com">b</a>
                <a name="anchor">no href</a>
                <a href="https://b.example.com">b again</a>
                <area href="httpfoo">
                <a href="mailto:someone@example.com">mail</a>
                <a href=" https://leading-space.example.com">space</a>
            </body></html>"#,
        );
        assert_eq!(
            extract_links(&doc),
            vec![
                "http://cdn.example.com/a.css".to_string(),
                "https://b.example.com".to_string(),
                "https://b.example.com".to_string(),
                "httpfoo".to_string(),
            ]
        );
    }

    #[test]
    fn empty_document() {
        let doc = Html::parse_document("");
        assert!(extract_links(&doc).is_empty());
    }

    #[test]
    fn noscript_links_are_kept() {
        let doc = parse_document(
            r#"<html><body><article><a href="https://example.com/js">js</a><noscript><a href="https://example.com/nojs">x</a></noscript></article></body></html>"#,
        );
        assert_eq!(
            extract_links(&doc),
            vec![
                "https://example.com/js".to_string(),
                "https://example.com/nojs".to_string(),
            ]
        );
    }
}

// ABOUTME: ArticleRecord holding the extracted fields of one page, and its assembly from extractor output.
// ABOUTME: Serializes to pretty JSON with a fixed key order.

use serde::{Deserialize, Serialize};

/// Everything extracted from one page.
///
/// Fields are declared in output order. Absent values are sentinel strings,
/// never nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    pub author: String,
    pub publication_date: String,
    pub links: Vec<String>,
    pub link_count: usize,
    pub visible_text_preview: String,
    pub visible_text_length: usize,
}

impl ArticleRecord {
    /// Builds a record, deriving the counts and the preview.
    ///
    /// `preview_chars` counts characters, not bytes.
    pub fn assemble(
        url: impl Into<String>,
        title: String,
        author: String,
        publication_date: String,
        links: Vec<String>,
        text: &str,
        preview_chars: usize,
    ) -> Self {
        Self {
            url: url.into(),
            title,
            author,
            publication_date,
            link_count: links.len(),
            links,
            visible_text_preview: text.chars().take(preview_chars).collect(),
            visible_text_length: text.chars().count(),
        }
    }

    /// JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Extracted page records.

use serde::{Deserialize, Serialize};

use crate::text::prepare_for_embedding;

/// Assembled text of one page.
///
/// `content` is never absent; an empty string means nothing survived
/// assembly and the caller decides whether to persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number, matching input order
    pub page_number: usize,
    /// Assembled lines separated by `\n`
    pub content: String,
}

impl Page {
    /// Create a page record.
    pub fn new(page_number: usize, content: impl Into<String>) -> Self {
        Self {
            page_number,
            content: content.into(),
        }
    }

    /// Create a record for a page with no content.
    pub fn empty(page_number: usize) -> Self {
        Self::new(page_number, String::new())
    }

    /// Whether nothing survived assembly.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content flattened to one line for an embedding model.
    pub fn embedding_text(&self) -> String {
        prepare_for_embedding(&self.content)
    }
}

/// Pages worth handing to an indexer: those with content.
pub fn non_empty_pages(pages: &[Page]) -> impl Iterator<Item = &Page> {
    pages.iter().filter(|page| !page.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = Page::empty(3);
        assert_eq!(page.page_number, 3);
        assert!(page.is_empty());
        assert_eq!(page.embedding_text(), "");
    }

    #[test]
    fn test_embedding_text() {
        let page = Page::new(1, "Fee Struc-\nture\n1 | BS | Rs.30,000");
        assert_eq!(page.embedding_text(), "Fee Structure 1 | BS | Rs.30,000");
    }

    #[test]
    fn test_non_empty_pages() {
        let pages = vec![Page::new(1, "a"), Page::empty(2), Page::new(3, "c")];
        let numbers: Vec<usize> = non_empty_pages(&pages).map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_serialize_record() {
        let json = serde_json::to_string(&Page::new(2, "Dean")).unwrap();
        assert_eq!(json, r#"{"page_number":2,"content":"Dean"}"#);
    }
}

//! Input boundary: where page spans come from.
//!
//! The extractor never opens files itself. A document collaborator (a PDF
//! parser binding, a span dump, a test fixture) implements [`PageSource`]
//! and hands out one page at a time.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::TextSpan;

/// A document that can deliver the spans of each page.
///
/// Page indices are 0-based. Failing [`page_count`](PageSource::page_count)
/// means the document cannot be read at all; failing one of the per-page
/// methods only affects that page.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Horizontal width of a page.
    fn page_width(&self, index: usize) -> Result<f32>;

    /// Spans of a page, in any order.
    fn page_spans(&self, index: usize) -> Result<Vec<TextSpan>>;
}

/// Spans and width of one page, as stored in a span dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpans {
    /// Page width
    pub width: f32,
    /// Spans of the page
    #[serde(default)]
    pub spans: Vec<TextSpan>,
}

impl PageSpans {
    /// Create a page.
    pub fn new(width: f32, spans: Vec<TextSpan>) -> Self {
        Self { width, spans }
    }
}

/// A document held entirely in memory.
///
/// The JSON form is `{"pages": [{"width": 612.0, "spans": [{"text": "..", "x": 0, "y": 0}]}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDocument {
    /// Pages in document order
    pub pages: Vec<PageSpans>,
}

impl InMemoryDocument {
    /// Create a document from its pages.
    pub fn new(pages: Vec<PageSpans>) -> Self {
        Self { pages }
    }

    /// Parse a JSON span dump.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON span dump.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn page(&self, index: usize) -> Result<&PageSpans> {
        self.pages.get(index).ok_or_else(|| Error::PageUnavailable {
            page: index + 1,
            reason: format!("document has {} pages", self.pages.len()),
        })
    }
}

impl PageSource for InMemoryDocument {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_width(&self, index: usize) -> Result<f32> {
        Ok(self.page(index)?.width)
    }

    fn page_spans(&self, index: usize) -> Result<Vec<TextSpan>> {
        Ok(self.page(index)?.spans.clone())
    }
}

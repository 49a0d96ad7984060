//! Per-document extraction counters.

use serde::Serialize;

use crate::layout::LayoutClass;

/// What happened to the pages of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionMetrics {
    /// Pages processed (readable or not)
    pub pages: usize,
    /// Pages whose content is empty
    pub empty_pages: usize,
    /// Pages the document collaborator failed to deliver
    pub unreadable_pages: usize,
    /// Pages classified as tables
    pub table_pages: usize,
    /// Pages classified as split tables
    pub split_table_pages: usize,
    /// Pages classified as two-column narrative
    pub two_column_pages: usize,
    /// Pages that matched no heuristic
    pub fallback_pages: usize,
    /// Pages whose strategy produced nothing and were rescued by plain joining
    pub fallback_rescues: usize,
}

impl ExtractionMetrics {
    /// Create empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assembled page.
    pub fn record_page(&mut self, class: LayoutClass, rescued: bool, empty: bool) {
        self.pages += 1;
        match class {
            LayoutClass::Table => self.table_pages += 1,
            LayoutClass::SplitTable => self.split_table_pages += 1,
            LayoutClass::TwoColumnNarrative => self.two_column_pages += 1,
            LayoutClass::Fallback => self.fallback_pages += 1,
        }
        if rescued {
            self.fallback_rescues += 1;
        }
        if empty {
            self.empty_pages += 1;
        }
    }

    /// Record a page that could not be read.
    pub fn record_unreadable(&mut self) {
        self.pages += 1;
        self.unreadable_pages += 1;
        self.empty_pages += 1;
    }

    /// Number of pages assembled with the given class.
    pub fn pages_for(&self, class: LayoutClass) -> usize {
        match class {
            LayoutClass::Table => self.table_pages,
            LayoutClass::SplitTable => self.split_table_pages,
            LayoutClass::TwoColumnNarrative => self.two_column_pages,
            LayoutClass::Fallback => self.fallback_pages,
        }
    }
}

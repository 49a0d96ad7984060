//! Page-at-a-time extraction pipeline.
//!
//! ```text
//! PageSource (document collaborator)
//!     ↓  spans + page width, one page at a time
//! [build_rows] (cluster by rounded y, sort by x, clean text)
//!     ↓
//! Row[]
//!     ↓
//! [classify] (Table > SplitTable > TwoColumnNarrative > Fallback)
//!     ↓
//! [AssemblyStrategy] (per-class reconstruction, Fallback as safety net)
//!     ↓
//! Page { page_number, content }
//! ```
//!
//! Pages are independent: nothing is carried from one page to the next, and
//! a page the collaborator fails to deliver becomes an empty record instead
//! of aborting the document.

pub mod assembly;
pub mod metrics;
pub mod page;

// Re-export main types
pub use assembly::{AssemblyContext, AssemblyStrategy, create_strategy};
pub use metrics::ExtractionMetrics;
pub use page::{Page, non_empty_pages};

use crate::config::LayoutConfig;
use crate::document::PageSource;
use crate::error::Result;
use crate::layout::{LayoutClass, TextSpan, build_rows, classify};
use assembly::FallbackStrategy;

/// Outcome of assembling one page.
#[derive(Debug, Clone, PartialEq)]
struct PageAssembly {
    class: LayoutClass,
    content: String,
    rescued: bool,
}

/// Layout-aware page text extractor.
///
/// Holds only read-only configuration, so one extractor can be shared by
/// workers that each own their own document.
#[derive(Debug, Clone, Default)]
pub struct LayoutExtractor {
    config: LayoutConfig,
}

impl LayoutExtractor {
    /// Create an extractor with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom thresholds.
    pub fn with_config(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Classify one page without assembling it.
    pub fn classify_page(&self, spans: &[TextSpan], page_width: f32) -> LayoutClass {
        classify(&build_rows(spans), sanitize_width(page_width), &self.config)
    }

    /// Extract one page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout_text::{LayoutExtractor, TextSpan};
    ///
    /// let spans = vec![
    ///     TextSpan::new("Office of the", 72.0, 100.0),
    ///     TextSpan::new("Registrar", 150.0, 100.0),
    /// ];
    /// let page = LayoutExtractor::new().extract_page(&spans, 612.0, 1);
    /// assert_eq!(page.page_number, 1);
    /// assert_eq!(page.content, "Office of the Registrar");
    /// ```
    pub fn extract_page(&self, spans: &[TextSpan], page_width: f32, page_number: usize) -> Page {
        Page::new(page_number, self.assemble(spans, page_width).content)
    }

    /// Extract every page of a document, in page order.
    ///
    /// Fails only when the document itself cannot be enumerated.
    pub fn extract_document<D: PageSource + ?Sized>(&self, document: &D) -> Result<Vec<Page>> {
        self.extract_document_with_metrics(document)
            .map(|(pages, _)| pages)
    }

    /// Extract every page of a document and report what happened to each.
    pub fn extract_document_with_metrics<D: PageSource + ?Sized>(
        &self,
        document: &D,
    ) -> Result<(Vec<Page>, ExtractionMetrics)> {
        let page_count = document.page_count()?;
        log::info!("Extracting {} pages", page_count);

        let mut pages = Vec::with_capacity(page_count);
        let mut metrics = ExtractionMetrics::new();

        for index in 0..page_count {
            let page_number = index + 1;
            let input = document
                .page_width(index)
                .and_then(|width| document.page_spans(index).map(|spans| (width, spans)));

            match input {
                Ok((width, spans)) => {
                    let assembly = self.assemble(&spans, width);
                    metrics.record_page(
                        assembly.class,
                        assembly.rescued,
                        assembly.content.is_empty(),
                    );
                    pages.push(Page::new(page_number, assembly.content));
                },
                Err(e) => {
                    log::warn!("Page {} unreadable, emitting empty content: {}", page_number, e);
                    metrics.record_unreadable();
                    pages.push(Page::empty(page_number));
                },
            }
        }

        log::info!(
            "Extracted {} pages ({} empty, {} unreadable, {} rescued by fallback)",
            metrics.pages,
            metrics.empty_pages,
            metrics.unreadable_pages,
            metrics.fallback_rescues
        );

        Ok((pages, metrics))
    }

    fn assemble(&self, spans: &[TextSpan], page_width: f32) -> PageAssembly {
        let page_width = sanitize_width(page_width);
        let rows = build_rows(spans);
        let class = classify(&rows, page_width, &self.config);
        let context = AssemblyContext::new(page_width, &self.config);

        let strategy = create_strategy(class);
        let mut lines = strategy.assemble(&rows, &context);
        log::debug!(
            "{} spans -> {} rows, layout {} ({}) -> {} lines",
            spans.len(),
            rows.len(),
            class,
            strategy.name(),
            lines.len()
        );

        let mut rescued = false;
        if lines.is_empty() && class != LayoutClass::Fallback && !rows.is_empty() {
            lines = FallbackStrategy.assemble(&rows, &context);
            rescued = !lines.is_empty();
            log::debug!("{} produced nothing, fallback joined {} lines", strategy.name(), lines.len());
        }

        PageAssembly {
            class,
            content: lines.join("\n").trim().to_string(),
            rescued,
        }
    }
}

/// Replace an unusable page width so midpoint heuristics stay well-defined.
fn sanitize_width(page_width: f32) -> f32 {
    if page_width.is_finite() && page_width >= 0.0 {
        page_width
    } else {
        log::warn!("Unusable page width {}, treating as 0", page_width);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InMemoryDocument, PageSpans};
    use crate::error::Error;

    fn span(text: &str, x: f32, y: f32) -> TextSpan {
        TextSpan::new(text, x, y)
    }

    #[test]
    fn test_empty_page_has_empty_content() {
        let page = LayoutExtractor::new().extract_page(&[], 600.0, 4);
        assert_eq!(page, Page::empty(4));
    }

    #[test]
    fn test_blank_spans_only() {
        let page = LayoutExtractor::new().extract_page(&[span("   ", 0.0, 0.0)], 600.0, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_classify_page() {
        let spans: Vec<TextSpan> = (0..6)
            .flat_map(|i| {
                let y = i as f32 * 20.0;
                vec![span("1", 10.0, y), span("Name", 100.0, y), span("Post", 300.0, y)]
            })
            .collect();
        let extractor = LayoutExtractor::new();
        assert_eq!(extractor.classify_page(&spans, 600.0), LayoutClass::Table);
        assert_eq!(extractor.classify_page(&[], 600.0), LayoutClass::Fallback);
    }

    #[test]
    fn test_with_config_validates() {
        let bad = LayoutConfig::new().with_table_row_ratio(0.0);
        assert!(matches!(LayoutExtractor::with_config(bad), Err(Error::InvalidConfig(_))));

        let good = LayoutConfig::new().with_table_min_rows(2);
        let extractor = LayoutExtractor::with_config(good).unwrap();
        assert_eq!(extractor.config().table_min_rows, 2);
    }

    #[test]
    fn test_non_finite_width_does_not_fail() {
        let page = LayoutExtractor::new().extract_page(&[span("Text", 10.0, 10.0)], f32::NAN, 1);
        assert_eq!(page.content, "Text");
    }

    #[test]
    fn test_document_page_numbers() {
        let doc = InMemoryDocument::new(vec![
            PageSpans::new(600.0, vec![span("One", 0.0, 0.0)]),
            PageSpans::new(600.0, vec![]),
            PageSpans::new(600.0, vec![span("Three", 0.0, 0.0)]),
        ]);
        let (pages, metrics) = LayoutExtractor::new().extract_document_with_metrics(&doc).unwrap();
        let numbers: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(pages[1].content, "");
        assert_eq!(metrics.pages, 3);
        assert_eq!(metrics.empty_pages, 1);
        assert_eq!(metrics.fallback_pages, 3);
    }

    struct FlakyDocument;

    impl PageSource for FlakyDocument {
        fn page_count(&self) -> Result<usize> {
            Ok(3)
        }

        fn page_width(&self, _index: usize) -> Result<f32> {
            Ok(600.0)
        }

        fn page_spans(&self, index: usize) -> Result<Vec<TextSpan>> {
            if index == 1 {
                Err(Error::PageUnavailable {
                    page: index + 1,
                    reason: "corrupt content stream".to_string(),
                })
            } else {
                Ok(vec![TextSpan::new(format!("Page {}", index + 1), 0.0, 0.0)])
            }
        }
    }

    #[test]
    fn test_unreadable_page_does_not_abort() {
        let (pages, metrics) =
            LayoutExtractor::new().extract_document_with_metrics(&FlakyDocument).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].content, "Page 1");
        assert!(pages[1].is_empty());
        assert_eq!(pages[2].content, "Page 3");
        assert_eq!(metrics.unreadable_pages, 1);
    }

    struct ClosedDocument;

    impl PageSource for ClosedDocument {
        fn page_count(&self) -> Result<usize> {
            Err(Error::DocumentUnavailable("not a PDF".to_string()))
        }

        fn page_width(&self, _index: usize) -> Result<f32> {
            unreachable!()
        }

        fn page_spans(&self, _index: usize) -> Result<Vec<TextSpan>> {
            unreachable!()
        }
    }

    #[test]
    fn test_unopenable_document_is_fatal() {
        let result = LayoutExtractor::new().extract_document(&ClosedDocument);
        assert!(matches!(result, Err(Error::DocumentUnavailable(_))));
    }
}

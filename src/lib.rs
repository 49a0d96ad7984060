// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Layout Text
//!
//! Layout-aware text extraction for structured institutional PDFs: staff
//! directories, fee schedules, narrative prose and two-column pages.
//!
//! ## Core Features
//!
//! - **Row clustering**: spans grouped by vertical position rounded to 0.1,
//!   sorted left to right
//! - **Layout classification**: Table, SplitTable, TwoColumnNarrative or
//!   Fallback, decided by tunable heuristics in fixed priority order
//! - **Format-specific reassembly**: pipe-delimited table rows, wrapped
//!   table cells merged back, two-column pages read column by column
//! - **Text normalization**: whitespace and repeated-glyph cleanup, rupee
//!   amount normalization, line-wrap hyphen repair
//!
//! ## Architecture
//!
//! The extractor is pure: it owns no document handle, database or network
//! connection. A [`PageSource`] delivers spans one page at a time and the
//! extractor returns one [`Page`] record per input page, in order.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_layout_text::{InMemoryDocument, LayoutExtractor, PageSpans, TextSpan};
//!
//! # fn main() -> pdf_layout_text::Result<()> {
//! let document = InMemoryDocument::new(vec![PageSpans::new(
//!     612.0,
//!     vec![
//!         TextSpan::new("ADMISSIONS OFFICE", 72.0, 40.0),
//!         TextSpan::new("Fee Rs. 25000 per year", 72.0, 60.0),
//!     ],
//! )]);
//!
//! let pages = LayoutExtractor::new().extract_document(&document)?;
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].page_number, 1);
//! assert_eq!(pages[0].content, "ADMISSIONS OFFICE\nFee Rs. 25000 per year");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input boundary
pub mod document;
pub mod geometry;

// Layout analysis
pub mod layout;

// Text cleanup
pub mod text;

// Extraction pipeline
pub mod pipeline;

pub use config::LayoutConfig;
pub use document::{InMemoryDocument, PageSource, PageSpans};
pub use error::{Error, Result};
pub use layout::{LayoutClass, Row, TextSpan};
pub use pipeline::{ExtractionMetrics, LayoutExtractor, Page, non_empty_pages};

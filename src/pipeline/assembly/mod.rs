//! Content assembly strategies, one per layout class.
//!
//! # Available Strategies
//!
//! - [`TableStrategy`]: pipe-delimited rows, duplicate rows skipped, headings kept plain
//! - [`SplitTableStrategy`]: wrapped table rows merged back before joining
//! - [`TwoColumnStrategy`]: left column read fully before the right column
//! - [`FallbackStrategy`]: rows joined as they are; also the safety net when
//!   another strategy produces nothing

mod fallback;
mod split_table;
mod table;
mod two_column;

pub use fallback::FallbackStrategy;
pub use split_table::{SplitTableStrategy, merge_multiline_cells};
pub use table::TableStrategy;
pub use two_column::{TwoColumnStrategy, split_columns};

use crate::config::LayoutConfig;
use crate::layout::{LayoutClass, Row};

/// Trait for turning a page's rows into output lines.
///
/// Implementations never fail: a page they cannot make sense of simply
/// yields no lines, and the caller falls back.
pub trait AssemblyStrategy: Send + Sync {
    /// Assemble the rows of one page into lines, top to bottom.
    fn assemble(&self, rows: &[Row], context: &AssemblyContext<'_>) -> Vec<String>;

    /// Return the name of this strategy for debugging.
    fn name(&self) -> &'static str;
}

/// Page information shared by all strategies.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    /// Page width in the same units as span origins
    pub page_width: f32,
    /// Heuristic thresholds
    pub config: &'a LayoutConfig,
}

impl<'a> AssemblyContext<'a> {
    /// Create a context for one page.
    pub fn new(page_width: f32, config: &'a LayoutConfig) -> Self {
        Self { page_width, config }
    }

    /// Horizontal midpoint of the page.
    pub fn mid_x(&self) -> f32 {
        self.page_width / 2.0
    }
}

/// Create the assembly strategy for a layout class.
pub fn create_strategy(class: LayoutClass) -> Box<dyn AssemblyStrategy> {
    match class {
        LayoutClass::Table => Box::new(TableStrategy),
        LayoutClass::SplitTable => Box::new(SplitTableStrategy),
        LayoutClass::TwoColumnNarrative => Box::new(TwoColumnStrategy),
        LayoutClass::Fallback => Box::new(FallbackStrategy),
    }
}

/// Join de-duplicated cells: pipe-delimited from `min_cells` cells, space-joined below.
pub(crate) fn join_cells(cells: &[String], min_cells: usize) -> String {
    if cells.len() >= min_cells {
        cells.join(" | ")
    } else {
        cells.join(" ")
    }
}

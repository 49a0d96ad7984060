//! Page geometry analysis.
//!
//! - Span clustering into rows keyed by rounded vertical position
//! - Heuristic page classification (table, split table, two-column, fallback)

pub mod classifier;
pub mod rows;
pub mod span;

// Re-export main types
pub use classifier::{
    LayoutClass, classify, is_split_table_page, is_table_page, is_two_column_page,
};
pub use rows::{Row, build_rows};
pub use span::TextSpan;

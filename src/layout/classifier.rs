//! Page layout classification.
//!
//! Three independent heuristics are evaluated in fixed priority order and the
//! first positive one wins: Table, then SplitTable, then
//! TwoColumnNarrative. A page matching none is assembled by Fallback.
//!
//! SplitTable and TwoColumnNarrative can both fire on adversarial layouts;
//! the priority order settles it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::layout::Row;
use crate::text::is_amount_cell;

/// Reconstruction strategy chosen for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutClass {
    /// A supermajority of rows have three or more columns
    Table,
    /// Label column on the left half, amount column on the right half
    SplitTable,
    /// Prose laid out in two columns
    TwoColumnNarrative,
    /// No structure recognized; rows are joined as they are
    Fallback,
}

impl LayoutClass {
    /// All classes, in priority order.
    pub const ALL: [LayoutClass; 4] = [
        LayoutClass::Table,
        LayoutClass::SplitTable,
        LayoutClass::TwoColumnNarrative,
        LayoutClass::Fallback,
    ];

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutClass::Table => "table",
            LayoutClass::SplitTable => "split-table",
            LayoutClass::TwoColumnNarrative => "two-column",
            LayoutClass::Fallback => "fallback",
        }
    }
}

impl fmt::Display for LayoutClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a page from its rows.
pub fn classify(rows: &[Row], page_width: f32, config: &LayoutConfig) -> LayoutClass {
    if is_table_page(rows, config) {
        LayoutClass::Table
    } else if is_split_table_page(rows, page_width, config) {
        LayoutClass::SplitTable
    } else if is_two_column_page(rows, page_width, config) {
        LayoutClass::TwoColumnNarrative
    } else {
        LayoutClass::Fallback
    }
}

/// Whether enough rows, and a large enough share of them, have 3+ cells.
pub fn is_table_page(rows: &[Row], config: &LayoutConfig) -> bool {
    if rows.is_empty() {
        return false;
    }
    let structured = rows
        .iter()
        .filter(|row| row.len() >= config.table_min_cells)
        .count();

    structured >= config.table_min_rows
        && structured as f32 / rows.len() as f32 > config.table_row_ratio
}

/// Whether the page carries a label column left and an amount column right.
///
/// Amount cells only count right of the midpoint; a cell that is not an
/// amount counts as a label when it has enough words and sits left of it.
pub fn is_split_table_page(rows: &[Row], page_width: f32, config: &LayoutConfig) -> bool {
    let mid = page_width / 2.0;
    let mut label_cells = 0usize;
    let mut amount_cells = 0usize;

    for (x, text) in rows.iter().flat_map(|row| row.cells_with_x.iter()) {
        if is_amount_cell(text) {
            if *x > mid {
                amount_cells += 1;
            }
        } else if text.split_whitespace().count() > config.split_label_min_words && *x < mid {
            label_cells += 1;
        }
    }

    label_cells > config.split_min_label_cells && amount_cells > config.split_min_amount_cells
}

/// Whether cell origins are many and spread across most of the page width.
///
/// Origins are counted once per distinct position (rounded to 0.1).
pub fn is_two_column_page(rows: &[Row], page_width: f32, config: &LayoutConfig) -> bool {
    let mut positions: HashSet<i64> = HashSet::new();
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;

    for (x, _) in rows.iter().flat_map(|row| row.cells_with_x.iter()) {
        positions.insert((f64::from(*x) * 10.0).round() as i64);
        min_x = min_x.min(*x);
        max_x = max_x.max(*x);
    }

    positions.len() > config.two_column_min_positions
        && max_x - min_x > page_width * config.two_column_spread_ratio
}

//! Split-table page assembly.
//!
//! Fee schedules print a long label next to an amount; when the label wraps,
//! the renderer reports each visual line as its own row. Rows with the same
//! cell count lying within the vertical tolerance of the row they follow are
//! folded back into it before joining.

use crate::layout::Row;
use crate::text::dedupe_cells;

use super::{AssemblyContext, AssemblyStrategy, join_cells};

/// Table reconstruction with multiline-cell merge.
pub struct SplitTableStrategy;

impl AssemblyStrategy for SplitTableStrategy {
    fn assemble(&self, rows: &[Row], context: &AssemblyContext<'_>) -> Vec<String> {
        let config = context.config;
        merge_multiline_cells(rows, config.multiline_y_tolerance)
            .iter()
            .map(|row| join_cells(&dedupe_cells(&row.cells), config.table_min_cells))
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "SplitTableStrategy"
    }
}

/// Merge each row into the previous one when both have the same cell count
/// and their `y` differ by at most `y_tolerance`.
///
/// Corresponding cells are concatenated with a space. The merged row keeps
/// the `y` of its first line, so a long chain of continuation lines is only
/// merged while it stays within the tolerance of that first line.
pub fn merge_multiline_cells(rows: &[Row], y_tolerance: f32) -> Vec<Row> {
    let mut merged: Vec<Row> = Vec::with_capacity(rows.len());

    for row in rows {
        match merged.last_mut() {
            Some(prev) if prev.len() == row.len() && (row.y - prev.y).abs() <= y_tolerance => {
                let cells_with_x = prev
                    .cells_with_x
                    .iter()
                    .zip(&row.cells)
                    .map(|((x, head), tail)| (*x, format!("{} {}", head, tail)))
                    .collect();
                *prev = Row::new(prev.y, cells_with_x);
            },
            _ => merged.push(row.clone()),
        }
    }

    merged
}

//! Two-column narrative assembly.

use crate::layout::Row;
use crate::text::{dedupe_cells, fix_hyphenation, normalize_amounts};

use super::{AssemblyContext, AssemblyStrategy};

/// Reads the left column top to bottom, then the right column.
///
/// Each derived row is space-joined, amounts are normalized and line-wrap
/// hyphens removed.
pub struct TwoColumnStrategy;

impl AssemblyStrategy for TwoColumnStrategy {
    fn assemble(&self, rows: &[Row], context: &AssemblyContext<'_>) -> Vec<String> {
        let (left, right) = split_columns(rows, context.mid_x());

        left.iter()
            .chain(right.iter())
            .map(|row| fix_hyphenation(&normalize_amounts(&dedupe_cells(&row.cells).join(" "))))
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "TwoColumnStrategy"
    }
}

/// Partition every row's cells at `mid_x` into left-half and right-half rows.
///
/// A cell exactly at the midpoint belongs to the right half. Derived rows
/// keep the `y` of their source row; empty halves are not emitted.
pub fn split_columns(rows: &[Row], mid_x: f32) -> (Vec<Row>, Vec<Row>) {
    let mut left_rows = Vec::new();
    let mut right_rows = Vec::new();

    for row in rows {
        let (left, right): (Vec<_>, Vec<_>) =
            row.cells_with_x.iter().cloned().partition(|(x, _)| *x < mid_x);

        if !left.is_empty() {
            left_rows.push(Row::new(row.y, left));
        }
        if !right.is_empty() {
            right_rows.push(Row::new(row.y, right));
        }
    }

    (left_rows, right_rows)
}

//! Plain row joining, no structural interpretation.

use crate::layout::Row;
use crate::text::dedupe_cells;

use super::{AssemblyContext, AssemblyStrategy};

/// Space-joins each row's de-duplicated cells.
///
/// Produces at least one line for any row with a non-empty cell.
pub struct FallbackStrategy;

impl AssemblyStrategy for FallbackStrategy {
    fn assemble(&self, rows: &[Row], _context: &AssemblyContext<'_>) -> Vec<String> {
        rows.iter()
            .map(|row| dedupe_cells(&row.cells).join(" "))
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "FallbackStrategy"
    }
}

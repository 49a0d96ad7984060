//! Table page assembly.

use crate::layout::Row;
use crate::text::dedupe_cells;

use super::{AssemblyContext, AssemblyStrategy, join_cells};

/// Row-per-line table reconstruction.
///
/// Repeated cells within a row and rows repeating the previous row are
/// rendering artifacts and are dropped. A lone upper-case cell long enough to
/// be a heading is emitted as plain text.
pub struct TableStrategy;

impl AssemblyStrategy for TableStrategy {
    fn assemble(&self, rows: &[Row], context: &AssemblyContext<'_>) -> Vec<String> {
        let config = context.config;
        let mut lines = Vec::with_capacity(rows.len());
        let mut previous: Option<Vec<String>> = None;

        for row in rows {
            let cells = dedupe_cells(&row.cells);
            if previous.as_ref() == Some(&cells) {
                continue;
            }

            let line = if is_heading(&cells, config.heading_min_len) {
                cells.join(" ")
            } else {
                join_cells(&cells, config.table_min_cells)
            };
            if !line.is_empty() {
                lines.push(line);
            }
            previous = Some(cells);
        }

        lines
    }

    fn name(&self) -> &'static str {
        "TableStrategy"
    }
}

/// A single cell, entirely upper-case, longer than `min_len` characters.
pub(crate) fn is_heading(cells: &[String], min_len: usize) -> bool {
    match cells {
        [only] => only.to_uppercase() == *only && only.chars().count() > min_len,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn row(y: f32, cells: &[&str]) -> Row {
        Row::new(
            y,
            cells
                .iter()
                .enumerate()
                .map(|(i, t)| (i as f32 * 100.0, t.to_string()))
                .collect(),
        )
    }

    fn assemble(rows: &[Row]) -> Vec<String> {
        let config = LayoutConfig::default();
        TableStrategy.assemble(rows, &AssemblyContext::new(600.0, &config))
    }

    #[test]
    fn test_pipe_and_space_joining() {
        let lines = assemble(&[
            row(0.0, &["S. #", "Name", "Designation"]),
            row(20.0, &["Faculty of Science"]),
            row(40.0, &["1", "Prof. Dr. Ahmed", "Dean"]),
            row(60.0, &["Phone", "99261300"]),
        ]);
        assert_eq!(
            lines,
            vec![
                "S. # | Name | Designation",
                "Faculty of Science",
                "1 | Prof. Dr. Ahmed | Dean",
                "Phone 99261300",
            ]
        );
    }

    #[test]
    fn test_repeated_cells_dropped_within_row() {
        let lines = assemble(&[row(0.0, &["2", "Dr. Saima", "Dr. Saima", "Chairperson"])]);
        assert_eq!(lines, vec!["2 | Dr. Saima | Chairperson"]);
    }

    #[test]
    fn test_duplicate_row_skipped() {
        let lines = assemble(&[
            row(0.0, &["1", "Registrar", "Admin"]),
            row(1.0, &["1", "Registrar", "Registrar", "Admin"]),
            row(20.0, &["2", "Controller", "Exams"]),
        ]);
        assert_eq!(lines, vec!["1 | Registrar | Admin", "2 | Controller | Exams"]);
    }

    #[test]
    fn test_duplicate_must_be_adjacent() {
        let lines = assemble(&[
            row(0.0, &["a", "b", "c"]),
            row(20.0, &["d", "e", "f"]),
            row(40.0, &["a", "b", "c"]),
        ]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_heading_emitted_plain() {
        let lines = assemble(&[row(0.0, &["ADMISSIONS OFFICE"])]);
        assert_eq!(lines, vec!["ADMISSIONS OFFICE"]);
    }

    #[test]
    fn test_is_heading() {
        assert!(is_heading(&["ADMISSIONS OFFICE".to_string()], 12));
        assert!(!is_heading(&["Admissions Office".to_string()], 12));
        assert!(!is_heading(&["DEANS OFFICE".to_string()], 12));
        assert!(!is_heading(&["ADMISSIONS".to_string(), "OFFICE".to_string()], 12));
        assert!(!is_heading(&[], 12));
    }

    #[test]
    fn test_empty_rows_produce_nothing() {
        assert!(assemble(&[]).is_empty());
        assert!(assemble(&[Row::new(0.0, vec![])]).is_empty());
    }
}

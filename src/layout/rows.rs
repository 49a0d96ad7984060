//! Clustering spans into visual rows.
//!
//! Spans are keyed by their vertical origin rounded to one decimal place in
//! an ordered map, which absorbs sub-pixel jitter and yields rows already
//! sorted top to bottom. Within a row, cells are sorted left to right.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::layout::TextSpan;
use crate::text::clean_text;

/// Row keys are vertical positions in tenths of a unit.
const ROW_KEY_SCALE: f64 = 10.0;

/// Largest vertical origin magnitude that still gets a distinct row key.
const MAX_ROW_Y: f32 = 1.0e12;

/// One visual row of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Rounded vertical position (one decimal place)
    pub y: f32,
    /// Cell texts, left to right
    pub cells: Vec<String>,
    /// Cell texts with their horizontal origin, left to right
    pub cells_with_x: Vec<(f32, String)>,
}

impl Row {
    /// Build a row from x-tagged cells in any order.
    pub fn new(y: f32, mut cells_with_x: Vec<(f32, String)>) -> Self {
        cells_with_x.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let cells = cells_with_x.iter().map(|(_, text)| text.clone()).collect();
        Self {
            y,
            cells,
            cells_with_x,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Quantize a vertical origin to its row key.
fn row_key(y: f32) -> i64 {
    (f64::from(y) * ROW_KEY_SCALE).round() as i64
}

/// Group one page's spans into rows ordered by ascending `y`.
///
/// Every span is cleaned first; spans that clean to nothing are dropped, as
/// are spans with non-finite coordinates or a vertical origin beyond
/// `MAX_ROW_Y`, whose key would saturate. A page with no usable span yields
/// no rows.
pub fn build_rows(spans: &[TextSpan]) -> Vec<Row> {
    let mut groups: BTreeMap<i64, Vec<(f32, String)>> = BTreeMap::new();
    let mut dropped = 0usize;

    for span in spans {
        if !span.origin().is_finite() || span.y.abs() > MAX_ROW_Y {
            dropped += 1;
            continue;
        }
        let text = clean_text(&span.text);
        if text.is_empty() {
            continue;
        }
        groups.entry(row_key(span.y)).or_default().push((span.x, text));
    }

    if dropped > 0 {
        log::debug!("Dropped {} spans with unusable coordinates", dropped);
    }

    groups
        .into_iter()
        .map(|(key, cells)| Row::new((key as f64 / ROW_KEY_SCALE) as f32, cells))
        .collect()
}

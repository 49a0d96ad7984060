//! Heuristic thresholds for layout classification and reassembly.
//!
//! Every magic number of the classifier lives here so a document family can
//! be tuned without touching the logic. Partial JSON files are accepted:
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum number of structured rows for a table page.
    pub table_min_rows: usize,

    /// Cell count from which a row counts as structured (and is pipe-joined).
    pub table_min_cells: usize,

    /// Share of structured rows a table page must exceed.
    pub table_row_ratio: f32,

    /// Left-half label cells a split-table page must exceed.
    pub split_min_label_cells: usize,

    /// Right-half amount cells a split-table page must exceed.
    pub split_min_amount_cells: usize,

    /// A label cell has strictly more words than this.
    pub split_label_min_words: usize,

    /// Distinct x origins a two-column page must exceed.
    pub two_column_min_positions: usize,

    /// Share of the page width the x origins must span on a two-column page.
    pub two_column_spread_ratio: f32,

    /// Maximum vertical distance between a table row and its wrapped continuation.
    pub multiline_y_tolerance: f32,

    /// A single upper-case cell longer than this is a heading.
    pub heading_min_len: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            table_min_rows: 5,
            table_min_cells: 3,
            table_row_ratio: 0.6,
            split_min_label_cells: 5,
            split_min_amount_cells: 5,
            split_label_min_words: 2,
            two_column_min_positions: 15,
            two_column_spread_ratio: 0.6,
            multiline_y_tolerance: 6.0,
            heading_min_len: 12,
        }
    }

    /// Parse a (possibly partial) configuration from JSON and validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout_text::LayoutConfig;
    ///
    /// let config = LayoutConfig::from_json_str(r#"{"table_min_rows": 8}"#).unwrap();
    /// assert_eq!(config.table_min_rows, 8);
    /// assert_eq!(config.table_min_cells, 3);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the minimum number of structured rows for a table page.
    pub fn with_table_min_rows(mut self, rows: usize) -> Self {
        self.table_min_rows = rows;
        self
    }

    /// Set the cell count from which a row counts as structured.
    pub fn with_table_min_cells(mut self, cells: usize) -> Self {
        self.table_min_cells = cells;
        self
    }

    /// Set the structured-row share a table page must exceed.
    pub fn with_table_row_ratio(mut self, ratio: f32) -> Self {
        self.table_row_ratio = ratio;
        self
    }

    /// Set the label and amount cell counts a split-table page must exceed.
    pub fn with_split_min_cells(mut self, labels: usize, amounts: usize) -> Self {
        self.split_min_label_cells = labels;
        self.split_min_amount_cells = amounts;
        self
    }

    /// Set the distinct x origins a two-column page must exceed.
    pub fn with_two_column_min_positions(mut self, positions: usize) -> Self {
        self.two_column_min_positions = positions;
        self
    }

    /// Set the horizontal spread share of a two-column page.
    pub fn with_two_column_spread_ratio(mut self, ratio: f32) -> Self {
        self.two_column_spread_ratio = ratio;
        self
    }

    /// Set the vertical tolerance of the multiline-cell merge.
    pub fn with_multiline_y_tolerance(mut self, tolerance: f32) -> Self {
        self.multiline_y_tolerance = tolerance;
        self
    }

    /// Set the length a single upper-case cell must exceed to be a heading.
    pub fn with_heading_min_len(mut self, len: usize) -> Self {
        self.heading_min_len = len;
        self
    }

    /// Check every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if self.table_min_rows == 0 {
            return Err(Error::InvalidConfig("table_min_rows must be at least 1".into()));
        }
        if self.table_min_cells == 0 {
            return Err(Error::InvalidConfig("table_min_cells must be at least 1".into()));
        }
        for (name, ratio) in [
            ("table_row_ratio", self.table_row_ratio),
            ("two_column_spread_ratio", self.two_column_spread_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(Error::InvalidConfig(format!("{} must be in (0, 1], got {}", name, ratio)));
            }
        }
        if !self.multiline_y_tolerance.is_finite() || self.multiline_y_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "multiline_y_tolerance must be a non-negative number, got {}",
                self.multiline_y_tolerance
            )));
        }
        Ok(())
    }
}

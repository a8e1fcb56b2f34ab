//! Table shape contents.
use serde::Serialize;

use super::paragraph::RunFont;
use super::types::{Insets, Outline};
use crate::common::{HorizontalAlignment, RGBColor, VerticalAlignment};

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub text: String,
    pub font: RunFont,
    pub width: f64,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub insets: Insets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<RGBColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Outline>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub height: f64,
    pub cells: Vec<TableCell>,
}

/// Grid of rows; `columns` is the declared column count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: usize,
    pub rows: Vec<TableRow>,
}

impl TableData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell text by row and column.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.cells.get(column).map(|c| c.text.as_str())
    }
}

//! Shared primitive types used across the whole pipeline.
//!
//! RULE: Every value that crosses the serialization boundary is a `Cell`.
//! The export adapter renders exactly these four shapes and nothing
//! else, so a new value kind cannot reach the artifact without showing
//! up here first.

use chrono::NaiveDate;

/// A single typed table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Calendar date; rendered as a `YYYY-MM-DD` string.
    Date(NaiveDate),
    /// Integral value; rendered as a plain JSON integer.
    Int(i64),
    /// Floating value; rendered as a plain JSON number.
    Float(f64),
    /// Static label text (product names, aging ranges, month/year labels).
    Text(&'static str),
}

/// An ordered table: declared column names plus rows of cells.
///
/// Column order is declaration order and carries through to the
/// serialized record field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<&'static str>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Panics if the width disagrees with the declared
    /// columns — a malformed row is a bug, never data.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width {} does not match {} declared columns",
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

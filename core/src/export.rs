//! Serialization adapter — typed dataset to the public JSON artifact.
//!
//! Converts every `Cell` into a plain JSON value (dates become
//! `YYYY-MM-DD` strings), appends the fixed `summary` record, and writes
//! the pretty-printed result to the primary api path plus a legacy
//! mirror kept for older dashboard consumers. I/O errors propagate: a
//! missing or partial artifact is a failed run.

use crate::{
    dataset::Dataset,
    error::ExportResult,
    fixtures,
    types::{Cell, Table},
};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Primary artifact path, relative to the export root.
pub const PRIMARY_PATH: &str = "public/api/dashboard/index.json";
/// Legacy mirror, byte-identical content.
pub const LEGACY_PATH: &str = "public/api/dashboard.json";

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Date(date) => Value::String(date.format("%Y-%m-%d").to_string()),
        Cell::Int(n) => Value::from(*n),
        Cell::Float(x) => Value::from(*x),
        Cell::Text(s) => Value::String((*s).to_string()),
    }
}

fn table_to_value(table: &Table) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for (column, cell) in table.columns.iter().zip(row) {
                record.insert((*column).to_string(), cell_to_value(cell));
            }
            Value::Object(record)
        })
        .collect();
    Value::Array(rows)
}

/// The full artifact tree: every table plus the fixed `summary` record.
pub fn dataset_to_json(dataset: &Dataset) -> ExportResult<Value> {
    let mut root = Map::new();
    for (name, table) in dataset.tables() {
        root.insert(name.to_string(), table_to_value(table));
    }
    root.insert(
        "summary".to_string(),
        serde_json::to_value(fixtures::SUMMARY)?,
    );
    Ok(Value::Object(root))
}

/// Write the artifact under `root`, creating the primary directory if
/// absent. Both files receive the same pretty-printed body; existing
/// content is overwritten. Returns the two written paths.
pub fn write_artifact(artifact: &Value, root: &Path) -> ExportResult<(PathBuf, PathBuf)> {
    let primary = root.join(PRIMARY_PATH);
    let legacy = root.join(LEGACY_PATH);

    if let Some(dir) = primary.parent() {
        fs::create_dir_all(dir)?;
    }

    let body = serde_json::to_string_pretty(artifact)?;
    fs::write(&primary, &body)?;
    fs::write(&legacy, &body)?;

    log::info!(
        "dashboard artifact written: {} ({} bytes, mirrored to {})",
        primary.display(),
        body.len(),
        legacy.display()
    );
    Ok((primary, legacy))
}

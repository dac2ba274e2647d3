//! CSV export.
//!
//! Flattens the latest stored JSON payload into tabular rows: one row per
//! top-level array element, field names as the header row.

use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;
use serde_json::{Map, Value};

use crate::error_handling::{ExportError, FormatError};
use crate::storage::Store;

/// Renders the latest stored payload as CSV at `output`, overwriting any
/// existing file.
///
/// Returns the output path, or `None` when the store holds no records.
/// Fails with a [`FormatError`] when the payload is not JSON or has no
/// tabular rendering; in that case the output file is not created.
pub async fn export_csv(store: &Store, output: &Path) -> Result<Option<PathBuf>, ExportError> {
    let Some(record) = store.latest().await? else {
        info!("No data found in the database to export");
        return Ok(None);
    };

    let value: Value = serde_json::from_str(&record.data).map_err(FormatError::InvalidJson)?;
    let (header, rows) = flatten(&value)?;

    let mut writer = Writer::from_path(output)?;
    writer.write_record(&header)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!("Data exported as CSV to {}", output.display());
    Ok(Some(output.to_path_buf()))
}

/// Flattens a JSON document into a header row plus data rows.
///
/// An array of objects yields one row per element, with the header taken from
/// field names in first-seen order across all elements; a single object
/// yields one row. Anything else has no tabular rendering.
fn flatten(value: &Value) -> Result<(Vec<String>, Vec<Vec<String>>), FormatError> {
    let objects: Vec<&Map<String, Value>> = match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => {
            let mut maps = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => maps.push(map),
                    _ => return Err(FormatError::NotTabular("array elements must be objects")),
                }
            }
            if maps.is_empty() {
                return Err(FormatError::NotTabular("array holds no rows"));
            }
            maps
        }
        _ => {
            return Err(FormatError::NotTabular(
                "top-level value must be an object or an array of objects",
            ))
        }
    };

    let mut header: Vec<String> = Vec::new();
    for map in &objects {
        for key in map.keys() {
            if !header.iter().any(|h| h == key) {
                header.push(key.clone());
            }
        }
    }

    let rows = objects
        .iter()
        .map(|map| {
            header
                .iter()
                .map(|key| map.get(key).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok((header, rows))
}

/// Renders one JSON value as a CSV cell. Nested structures keep their compact
/// JSON form; the CSV writer handles quoting.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

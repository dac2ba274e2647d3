//! Verbatim JSON export.

use std::path::{Path, PathBuf};

use log::info;

use crate::error_handling::ExportError;
use crate::storage::Store;

/// Writes the latest stored payload byte-for-byte to `output`, overwriting
/// any existing file.
///
/// Returns the output path, or `None` when the store holds no records, in
/// which case nothing is written. The payload is not parsed: whatever was
/// imported, valid JSON or not, is copied out unchanged.
pub async fn export_json(store: &Store, output: &Path) -> Result<Option<PathBuf>, ExportError> {
    let Some(record) = store.latest().await? else {
        info!("No data found in the database to export");
        return Ok(None);
    };

    std::fs::write(output, record.data.as_bytes())?;
    info!("Data exported as JSON to {}", output.display());
    Ok(Some(output.to_path_buf()))
}

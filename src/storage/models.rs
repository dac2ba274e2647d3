//! Row models for the import log.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// One imported payload version.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImportedRecord {
    /// Monotonically increasing identifier assigned by the store on insert.
    pub id: i64,
    /// Raw payload text, stored verbatim without validation.
    pub data: String,
    /// Insertion instant, defaulted by the database.
    pub timestamp: NaiveDateTime,
}

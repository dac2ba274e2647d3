//! Export functionality for the latest imported payload.
//!
//! Two independent, idempotent read-only operations: a verbatim JSON copy and
//! a flattened CSV rendering. Each writes to a fixed per-format path,
//! overwritten on every call.

mod csv;
mod json;

pub use csv::export_csv;
pub use json::export_json;

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Verbatim copy of the latest stored payload.
    Json,
    /// Flattened tabular rendering of the latest stored payload.
    Csv,
}

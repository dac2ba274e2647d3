//! sftp_sync library: scheduled SFTP JSON import with SQLite persistence
//! and JSON/CSV export.
//!
//! The pipeline has one writer and two readers: a scheduler-driven importer
//! fetches a JSON document over SFTP and appends each retrieved version to an
//! append-only SQLite log, and two export operations render the most recently
//! stored version as verbatim JSON or flattened CSV.
//!
//! # Example
//!
//! ```no_run
//! use sftp_sync::config::{ConnectionParams, SyncSettings};
//! use sftp_sync::run_sync;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SyncSettings {
//!     db_path: std::path::PathBuf::from("./data.db"),
//!     schedule: "0 */15 * * * *".to_string(),
//!     params: ConnectionParams {
//!         host: "sftp.example.com".into(),
//!         port: 22,
//!         username: "importer".into(),
//!         private_key: std::fs::read_to_string("/home/importer/.ssh/id_ed25519")?,
//!         remote_path: "/data/feed.json".into(),
//!     },
//! };
//!
//! // Runs until a shutdown signal arrives.
//! run_sync(settings).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod importer;
pub mod initialization;
pub mod scheduler;
pub mod storage;
pub mod transfer;

// Re-export public API
pub use config::{load_connection_params, ConnectionParams, LogLevel, SyncSettings};
pub use export::{export_csv, export_json, ExportFormat};
pub use run::run_sync;
pub use storage::{ImportedRecord, Store};
pub use transfer::{Fetch, SftpClient};

// Internal run module (contains the supervisor loop)
mod run {
    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::config::SyncSettings;
    use crate::importer;
    use crate::scheduler::{parse_schedule, until_next_tick};
    use crate::storage::Store;
    use crate::transfer::SftpClient;

    /// Runs the import daemon until a shutdown signal arrives.
    ///
    /// One cycle runs immediately at startup, then one per schedule
    /// occurrence. Cycle failures are logged and the loop continues; only
    /// schedule parsing and store initialization are fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the cadence expression does not parse or the
    /// store cannot be opened. Transfer and persistence failures inside a
    /// cycle never propagate out of the loop.
    pub async fn run_sync(settings: SyncSettings) -> Result<()> {
        let schedule = parse_schedule(&settings.schedule)
            .with_context(|| format!("Invalid cadence expression: {}", settings.schedule))?;

        let store = Store::open(&settings.db_path)
            .await
            .context("Failed to initialize the database")?;
        let client = SftpClient::new(settings.params);

        info!("Importing JSON from SFTP...");
        if let Err(e) = importer::run_cycle(&client, &store).await {
            error!("Import cycle failed: {e}");
        }

        loop {
            // Computing the next occurrence only after the previous cycle
            // finished serializes cycles: overlapping ticks are skipped.
            let Some(delay) = until_next_tick(&schedule) else {
                info!("Schedule has no future occurrences, shutting down");
                break;
            };

            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    info!("Importing JSON from SFTP...");
                    if let Err(e) = importer::run_cycle(&client, &store).await {
                        error!("Import cycle failed: {e}");
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        store.close().await;
        info!("Database connection closed");
        Ok(())
    }
}

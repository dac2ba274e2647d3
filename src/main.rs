//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sftp_sync` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Process exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use sftp_sync::config::{
    load_connection_params, Command, Opt, SyncSettings, EXPORT_CSV_PATH, EXPORT_JSON_PATH,
};
use sftp_sync::initialization::init_logger;
use sftp_sync::{export_csv, export_json, run_sync, ExportFormat, Store};

#[derive(Serialize)]
struct StatusSummary {
    records: i64,
    latest_id: Option<i64>,
    latest_timestamp: Option<chrono::NaiveDateTime>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // keeping SFTP credentials out of the shell environment and argv.
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    init_logger(opt.log_level.clone());

    match opt.command {
        Command::Run { schedule } => {
            let params = match load_connection_params() {
                Ok(params) => params,
                Err(e) => {
                    eprintln!("sftp_sync error: {e:#}");
                    process::exit(1);
                }
            };
            let settings = SyncSettings {
                db_path: opt.db_path,
                schedule,
                params,
            };
            if let Err(e) = run_sync(settings).await {
                eprintln!("sftp_sync error: {e:#}");
                process::exit(1);
            }
        }
        Command::Export { format, output } => {
            let store = open_store_or_exit(&opt.db_path).await;
            let result = match format {
                ExportFormat::Json => {
                    let path = output.as_deref().unwrap_or(Path::new(EXPORT_JSON_PATH));
                    export_json(&store, path).await
                }
                ExportFormat::Csv => {
                    let path = output.as_deref().unwrap_or(Path::new(EXPORT_CSV_PATH));
                    export_csv(&store, path).await
                }
            };
            match result {
                Ok(Some(path)) => println!("Exported to {}", path.display()),
                Ok(None) => println!("No data found in the database to export"),
                Err(e) => {
                    eprintln!("sftp_sync error: {e:#}");
                    store.close().await;
                    process::exit(1);
                }
            }
            store.close().await;
        }
        Command::Status => {
            let store = open_store_or_exit(&opt.db_path).await;
            let records = store
                .count()
                .await
                .context("Failed to query the database")?;
            let latest = store
                .latest()
                .await
                .context("Failed to query the database")?;
            let summary = StatusSummary {
                records,
                latest_id: latest.as_ref().map(|r| r.id),
                latest_timestamp: latest.as_ref().map(|r| r.timestamp),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
            store.close().await;
        }
    }

    Ok(())
}

async fn open_store_or_exit(db_path: &Path) -> Store {
    match Store::open(db_path).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("sftp_sync error: failed to initialize the database: {e:#}");
            process::exit(1);
        }
    }
}

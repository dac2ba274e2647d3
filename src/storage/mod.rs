// storage/mod.rs
// Database operations module

mod models;
mod pool;
mod schema;

pub use models::ImportedRecord;

use std::path::Path;

use sqlx::SqlitePool;

use crate::error_handling::PersistenceError;

/// Handle to the append-only import log.
///
/// One long-lived `Store` is opened by the supervisor and passed by reference
/// to the importer and exporter. There are no update or delete operations:
/// records are written once and only the latest is ever read back.
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the store, creating the backing file and schema if absent.
    ///
    /// Safe to call against an existing database; the schema is
    /// create-if-absent and never migrated.
    pub async fn open(db_path: &Path) -> Result<Self, PersistenceError> {
        let pool = pool::init_db_pool_with_path(db_path).await?;
        schema::ensure_schema(&pool).await?;
        Ok(Store { pool })
    }

    /// Appends one payload and returns its newly assigned identifier.
    ///
    /// The insertion timestamp is defaulted by SQLite; the payload is stored
    /// verbatim, without JSON validation.
    pub async fn append(&self, data: &str) -> Result<i64, PersistenceError> {
        let result = sqlx::query("INSERT INTO imported_data (data) VALUES (?)")
            .bind(data)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Returns the record with the maximum timestamp, ties broken by maximum
    /// identifier, or `None` if the table is empty.
    pub async fn latest(&self) -> Result<Option<ImportedRecord>, PersistenceError> {
        let record = sqlx::query_as::<_, ImportedRecord>(
            "SELECT id, data, timestamp FROM imported_data ORDER BY timestamp DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Number of records in the store.
    pub async fn count(&self) -> Result<i64, PersistenceError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM imported_data")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Closes the connection pool. Call before process exit so pending WAL
    /// contents are checkpointed by SQLite on the final disconnect.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

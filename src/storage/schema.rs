//! Schema management: create-if-absent, never migrated.

use sqlx::SqlitePool;

use crate::error_handling::PersistenceError;

/// Ensures the `imported_data` table exists. Idempotent.
pub(super) async fn ensure_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS imported_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            data TEXT,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

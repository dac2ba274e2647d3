//! Shared helpers for integration tests.

use std::path::Path;

use sftp_sync::Store;

/// Opens a store at `path`, creating the file and schema.
pub async fn open_store(path: &Path) -> Store {
    Store::open(path).await.expect("Failed to open store")
}

/// Appends one payload and returns its id.
pub async fn seed(store: &Store, payload: &str) -> i64 {
    store.append(payload).await.expect("Failed to append payload")
}

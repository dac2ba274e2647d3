//! Tests for the append-only store: ordering, latest-wins reads, reopen.

use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{open_store, seed};

#[tokio::test]
async fn append_assigns_strictly_increasing_ids() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;

    let mut previous = 0;
    for n in 0..5 {
        let id = seed(&store, &format!(r#"{{"version":{n}}}"#)).await;
        assert!(id > previous, "ids must be strictly increasing");
        previous = id;
    }

    assert_eq!(store.count().await.expect("count() should succeed"), 5);
}

#[tokio::test]
async fn latest_tracks_the_most_recent_append() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;

    seed(&store, r#"{"version":1}"#).await;
    let latest = store
        .latest()
        .await
        .expect("latest() should succeed")
        .expect("Store should not be empty");
    assert_eq!(latest.data, r#"{"version":1}"#);

    let second_id = seed(&store, r#"{"version":2}"#).await;
    let latest = store
        .latest()
        .await
        .expect("latest() should succeed")
        .expect("Store should not be empty");
    assert_eq!(latest.id, second_id);
    assert_eq!(latest.data, r#"{"version":2}"#);
}

#[tokio::test]
async fn same_second_inserts_break_ties_by_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;

    // CURRENT_TIMESTAMP has one-second resolution, so back-to-back appends
    // land on the same timestamp and only the id decides which is latest.
    let mut last_id = 0;
    for n in 0..3 {
        last_id = seed(&store, &format!(r#"{{"n":{n}}}"#)).await;
    }

    let latest = store
        .latest()
        .await
        .expect("latest() should succeed")
        .expect("Store should not be empty");
    assert_eq!(latest.id, last_id);
    assert_eq!(latest.data, r#"{"n":2}"#);
}

#[tokio::test]
async fn empty_store_has_no_latest_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;

    assert!(store
        .latest()
        .await
        .expect("latest() should succeed")
        .is_none());
    assert_eq!(store.count().await.expect("count() should succeed"), 0);
}

#[tokio::test]
async fn reopening_preserves_records_and_schema() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");

    let store = open_store(&db_path).await;
    seed(&store, r#"{"persisted":true}"#).await;
    store.close().await;

    // open() is create-if-absent: a second open against the same file must
    // not disturb existing rows.
    let store = open_store(&db_path).await;
    assert_eq!(store.count().await.expect("count() should succeed"), 1);
    let latest = store
        .latest()
        .await
        .expect("latest() should succeed")
        .expect("Record should survive reopen");
    assert_eq!(latest.data, r#"{"persisted":true}"#);
}

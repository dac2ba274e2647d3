//! Tests for JSON export: verbatim copy, idempotence, empty-store behavior.

use sftp_sync::export_json;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{open_store, seed};

#[tokio::test]
async fn export_writes_the_latest_payload_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    let output = temp_dir.path().join("export.json");

    seed(&store, r#"[{"a":1,"b":"x"}]"#).await;

    let path = export_json(&store, &output)
        .await
        .expect("Export should succeed")
        .expect("Export should produce a file");
    assert_eq!(path, output);

    let content = std::fs::read_to_string(&output).expect("Should read export file");
    assert_eq!(content, r#"[{"a":1,"b":"x"}]"#);

    // Round-trip: the exported content parses back to the original document.
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Exported JSON should parse");
    assert_eq!(parsed, serde_json::json!([{"a": 1, "b": "x"}]));
}

#[tokio::test]
async fn repeated_exports_are_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    let output = temp_dir.path().join("export.json");

    seed(&store, r#"{"stable":true}"#).await;

    export_json(&store, &output)
        .await
        .expect("First export should succeed");
    let first = std::fs::read(&output).expect("Should read export file");

    export_json(&store, &output)
        .await
        .expect("Second export should succeed");
    let second = std::fs::read(&output).expect("Should read export file");

    assert_eq!(first, second, "exports with no intervening import must match");
}

#[tokio::test]
async fn export_overwrites_after_a_new_import() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    let output = temp_dir.path().join("export.json");

    seed(&store, r#"{"version":1}"#).await;
    export_json(&store, &output)
        .await
        .expect("Export should succeed");

    seed(&store, r#"{"version":2}"#).await;
    export_json(&store, &output)
        .await
        .expect("Export should succeed");

    let content = std::fs::read_to_string(&output).expect("Should read export file");
    assert_eq!(content, r#"{"version":2}"#);
}

#[tokio::test]
async fn empty_store_produces_no_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    let output = temp_dir.path().join("export.json");

    let result = export_json(&store, &output)
        .await
        .expect("Export should succeed on an empty store");
    assert!(result.is_none(), "nothing to export");
    assert!(!output.exists(), "no file should be written");
}

#[tokio::test]
async fn malformed_payload_still_exports_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = open_store(&temp_dir.path().join("test.db")).await;
    let output = temp_dir.path().join("export.json");

    seed(&store, "not-json").await;

    export_json(&store, &output)
        .await
        .expect("JSON export does not validate the payload")
        .expect("Export should produce a file");

    let content = std::fs::read_to_string(&output).expect("Should read export file");
    assert_eq!(content, "not-json");
}

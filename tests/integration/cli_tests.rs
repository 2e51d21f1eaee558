//! CLI tests for the `cluster` and `page` commands.

use assert_cmd::Command;
use clustermap::test_utils::sample_newsitems_json;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn write_items(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("items.json");
    std::fs::write(&path, sample_newsitems_json()).unwrap();
    path
}

fn clustermap() -> Command {
    Command::cargo_bin("clustermap").unwrap()
}

#[test]
fn cluster_emits_json_keyed_by_every_requested_scale() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir);

    let output = clustermap()
        .args(["cluster", "--input"])
        .arg(&items)
        .args(["--scale", "614400", "--scale", "19200"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let by_scale = parsed.as_object().unwrap();
    assert_eq!(by_scale.len(), 2);
    assert!(by_scale.contains_key("614400"));
    assert!(by_scale.contains_key("19200"));

    // At the widest scale the two Chicago-area fixtures share a bunch.
    let widest = by_scale["614400"].as_array().unwrap();
    assert_eq!(widest.len(), 2);
    assert_eq!(widest[0][0], serde_json::json!([12345, 23456]));
}

#[test]
fn cluster_defaults_to_the_standard_scale_set() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir);
    let out_file = dir.path().join("bunches.json");

    clustermap()
        .args(["cluster", "--input"])
        .arg(&items)
        .args(["--output"])
        .arg(&out_file)
        .assert()
        .success();

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&out_file).unwrap()).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 10);
}

#[test]
fn page_embeds_every_item_id_exactly_once() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir);

    let output = clustermap()
        .args(["page", "--input"])
        .arg(&items)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout).unwrap();
    let table = payload["newsitems"].as_object().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table["12345"], serde_json::json!({"schema_id": 10}));
    assert_eq!(payload["all_bunches"], serde_json::json!([]));
}

#[test]
fn page_passes_bunch_files_through() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir);
    let bunches_file = dir.path().join("bunches.json");
    std::fs::write(
        &bunches_file,
        r#"[[[12345, 23456], [-87.635, 41.875]], [[34567], [122.41, 37.77]]]"#,
    )
    .unwrap();

    let output = clustermap()
        .args(["page", "--input"])
        .arg(&items)
        .args(["--bunches"])
        .arg(&bunches_file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout).unwrap();
    let bunches = payload["all_bunches"].as_array().unwrap();
    assert_eq!(bunches.len(), 2);
    assert_eq!(bunches[0][0], serde_json::json!([12345, 23456]));
}

#[test]
fn missing_input_file_fails_with_a_suggestion() {
    clustermap()
        .args(["cluster", "--input", "/no/such/items.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn malformed_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, "{not json").unwrap();

    clustermap()
        .args(["page", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn invalid_scale_is_rejected() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir);

    clustermap()
        .args(["cluster", "--input"])
        .arg(&items)
        .args(["--scale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid map scale"));
}

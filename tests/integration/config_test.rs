//! Project configuration as seen from the command line

use crate::support::harness::{stdout, TestHarness};
use std::fs;

#[test]
fn test_project_config_sets_root() {
    let harness = TestHarness::bare();
    harness.write_project_config("---\nworkspace:\n  root: docs\n---\n");
    for category in ["hls", "lls", "tc"] {
        fs::create_dir_all(harness.path().join("docs").join(category)).unwrap();
    }

    let output = harness.run(&["check"]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_project_config_sets_format() {
    let harness = TestHarness::new();
    harness.write_project_config("---\noutput:\n  format: json\n---\n");

    let output = harness.run(&["check"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["ok"], true);
}

#[test]
fn test_flag_overrides_project_config() {
    let harness = TestHarness::new();
    harness.write_project_config("---\noutput:\n  format: json\n---\n");

    let output = harness.run(&["check", "--format", "text"]);

    assert_eq!(stdout(&output), "OK spec check passed\n");
}

#[test]
fn test_global_config_is_read_from_home() {
    let harness = TestHarness::bare();
    let global_dir = harness.path().join(".config/specguard");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.md"),
        "---\nworkspace:\n  root: global-root\n---\n",
    )
    .unwrap();

    let output = harness.run(&["init"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(harness.path().join("global-root/hls").is_dir());
}

#[test]
fn test_invalid_project_config_exits_2() {
    let harness = TestHarness::new();
    harness.write_project_config("---\noutput:\n  format: xml\n---\n");

    let output = harness.run(&["check"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config in"));
}

//! End-to-end tests for `specguard init`

use crate::support::harness::{stdout, TestHarness};
use std::fs;

#[test]
fn test_init_creates_layout() {
    let harness = TestHarness::bare();

    let output = harness.run(&["init"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "CREATED spec/hls\nCREATED spec/lls\nCREATED spec/tc\nCREATED spec/shared\nOK spec init complete\n"
    );
    for dir in ["hls", "lls", "tc", "shared"] {
        assert!(harness.spec_root.join(dir).is_dir());
    }
}

#[test]
fn test_init_is_idempotent() {
    let harness = TestHarness::new();

    let output = harness.run(&["init"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "EXISTS spec/hls\nEXISTS spec/lls\nEXISTS spec/tc\nCREATED spec/shared\nOK spec init complete\n"
    );

    let again = harness.run(&["init"]);
    assert!(stdout(&again).starts_with("EXISTS spec/hls\n"));
    assert!(stdout(&again).contains("EXISTS spec/shared\n"));
}

#[test]
fn test_init_conflict_creates_nothing() {
    let harness = TestHarness::bare();
    fs::create_dir_all(&harness.spec_root).unwrap();
    fs::write(harness.spec_root.join("tc"), "a file").unwrap();

    let output = harness.run(&["init"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "ERROR spec/tc path-conflict: required path exists and is not a directory\n"
    );
    // Preflight runs before any directory is created
    assert!(!harness.spec_root.join("hls").exists());
    assert!(!harness.spec_root.join("shared").exists());
}

#[test]
fn test_init_then_check_is_clean() {
    let harness = TestHarness::bare();

    assert_eq!(harness.run(&["init"]).status.code(), Some(0));
    let output = harness.run(&["check"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK spec check passed\n");
}

#[test]
fn test_init_custom_root() {
    let harness = TestHarness::bare();

    let output = harness.run(&["init", "--root", "docs/spec"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(harness.path().join("docs/spec/shared").is_dir());
    assert!(stdout(&output).contains("CREATED docs/spec/hls\n"));
}

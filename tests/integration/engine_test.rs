//! Library-level tests of the validation engine against in-memory workspaces

use specguard::report::{ReportFormat, Reporter};
use specguard::workspace::{validate_workspace_with, InMemorySource};
use specguard::{ExecutionError, RuleKey};
use std::path::Path;

use crate::support::harness::valid_doc;

fn base_source() -> InMemorySource {
    InMemorySource::new()
        .with_dir("spec/hls")
        .with_dir("spec/lls")
        .with_dir("spec/tc")
}

fn rules(source: &InMemorySource) -> Vec<(String, RuleKey)> {
    validate_workspace_with(source, Path::new("spec"))
        .unwrap()
        .violations
        .into_iter()
        .map(|v| (v.target, v.rule))
        .collect()
}

#[test]
fn test_valid_workspace_has_no_violations() {
    let source = base_source()
        .with_file(
            "spec/hls/HLS-001-login.md",
            valid_doc("HLS-001", "links:\n  refined_by: [LLS-001]\n"),
        )
        .with_file("spec/lls/LLS-001-session.md", valid_doc("LLS-001", ""))
        .with_file(
            "spec/tc/TC-001-ok.md",
            valid_doc("TC-001", "links:\n  verifies: [HLS-001]\n"),
        );

    let report = validate_workspace_with(&source, Path::new("spec")).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.documents, 3);
    assert_eq!(report.identifiers, 3);
}

#[test]
fn test_every_malformed_document_is_reported() {
    let source = base_source()
        .with_file("spec/hls/HLS-001-a.md", "no delimiters")
        .with_file("spec/hls/HLS-002-b.md", "---\nid: [\n---\n")
        .with_file("spec/lls/LLS-001-c.md", "---\nid: LLS-001\n");

    let found = rules(&source);

    assert_eq!(
        found,
        vec![
            ("spec/hls/HLS-001-a.md".to_string(), RuleKey::FrontMatterMissing),
            ("spec/hls/HLS-002-b.md".to_string(), RuleKey::FrontMatterInvalid),
            // The body is still checked once the delimiters are found
            ("spec/hls/HLS-002-b.md".to_string(), RuleKey::MissingGherkin),
            ("spec/lls/LLS-001-c.md".to_string(), RuleKey::FrontMatterMissing),
        ]
    );
}

#[test]
fn test_ungrammatical_id_is_still_registered() {
    // `foo` fails the grammar but still claims the registry and has its
    // links resolved
    let source = base_source()
        .with_file(
            "spec/lls/LLS-001-a.md",
            "---\nid: foo\ntitle: t\nstatus: draft\nlinks:\n  refines: [HLS-999]\n---\n",
        )
        .with_file("spec/tc/TC-001-b.md", "---\nid: foo\ntitle: t\nstatus: draft\n---\n");

    let report = validate_workspace_with(&source, Path::new("spec")).unwrap();
    let found: Vec<(String, RuleKey)> = report
        .violations
        .iter()
        .map(|v| (v.target.clone(), v.rule))
        .collect();

    assert_eq!(report.identifiers, 1);
    assert_eq!(
        found,
        vec![
            ("spec/lls/LLS-001-a.md".to_string(), RuleKey::IdInvalid),
            ("spec/lls/LLS-001-a.md".to_string(), RuleKey::IdMismatch),
            ("spec/lls/LLS-001-a.md".to_string(), RuleKey::UnresolvedLink),
            ("spec/tc/TC-001-b.md".to_string(), RuleKey::DuplicateId),
            ("spec/tc/TC-001-b.md".to_string(), RuleKey::IdInvalid),
            ("spec/tc/TC-001-b.md".to_string(), RuleKey::IdMismatch),
        ]
    );
    let duplicate = report
        .violations
        .iter()
        .find(|v| v.rule == RuleKey::DuplicateId)
        .unwrap();
    assert_eq!(duplicate.message, "id foo already declared in spec/lls/LLS-001-a.md");
}

#[test]
fn test_duplicate_within_category_keeps_first() {
    let source = base_source()
        .with_file("spec/tc/TC-001-a.md", valid_doc("TC-001", ""))
        .with_file(
            "spec/tc/TC-002-b.md",
            "---\nid: TC-001\ntitle: t\nstatus: draft\n---\n",
        );

    let report = validate_workspace_with(&source, Path::new("spec")).unwrap();
    let duplicate = report
        .violations
        .iter()
        .find(|v| v.rule == RuleKey::DuplicateId)
        .unwrap();

    assert_eq!(duplicate.target, "spec/tc/TC-002-b.md");
    assert_eq!(
        duplicate.message,
        "id TC-001 already declared in spec/tc/TC-001-a.md"
    );
}

#[test]
fn test_self_reference_is_allowed() {
    let source = base_source().with_file(
        "spec/tc/TC-001-self.md",
        valid_doc("TC-001", "links:\n  related: [TC-001]\n"),
    );

    assert!(rules(&source).is_empty());
}

#[test]
fn test_each_unresolved_reference_is_reported() {
    let source = base_source().with_file(
        "spec/tc/TC-001-a.md",
        valid_doc("TC-001", "links:\n  verifies: [HLS-009, HLS-009]\n"),
    );

    let found = rules(&source);

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|(_, rule)| *rule == RuleKey::UnresolvedLink));
}

#[test]
fn test_unreadable_document_aborts_run() {
    let source = base_source()
        .with_file("spec/hls/HLS-001-a.md", valid_doc("HLS-001", ""))
        .with_unreadable_file("spec/tc/TC-001-locked.md");

    let err = validate_workspace_with(&source, Path::new("spec")).unwrap_err();

    assert!(matches!(err, ExecutionError::Read { .. }));
    assert_eq!(err.path(), Path::new("spec/tc/TC-001-locked.md"));
}

#[test]
fn test_all_categories_missing() {
    let source = InMemorySource::new();

    let found = rules(&source);

    assert_eq!(
        found,
        vec![
            ("spec/hls".to_string(), RuleKey::MissingDirectory),
            ("spec/lls".to_string(), RuleKey::MissingDirectory),
            ("spec/tc".to_string(), RuleKey::MissingDirectory),
        ]
    );
}

#[test]
fn test_text_report_lines_are_sorted() {
    let source = base_source()
        .with_file("spec/tc/TC-001-z.md", "---\nid: TC-001\n---\n")
        .with_file("spec/hls/HLS-001-a.md", "---\nid: HLS-001\ntitle: t\n---\n");

    let report = validate_workspace_with(&source, Path::new("spec")).unwrap();
    let text = Reporter::new(ReportFormat::Text).render(&report);

    assert_eq!(
        text,
        "ERROR spec/hls/HLS-001-a.md missing-gherkin: expected at least one fenced gherkin code block\n\
         ERROR spec/hls/HLS-001-a.md status-missing: front matter field status is required\n\
         ERROR spec/tc/TC-001-z.md status-missing: front matter field status is required\n\
         ERROR spec/tc/TC-001-z.md title-missing: front matter field title is required\n"
    );
}

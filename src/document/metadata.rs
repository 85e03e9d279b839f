//! Front matter field rules.
//!
//! The validator is path-agnostic: every violation it returns has an empty
//! target and the per-file layer stamps the document path.

use crate::category::is_valid_id;
use crate::violation::{RuleKey, Violation};

use super::record::{sequence, Field, RawRecord};

/// Allowed values for the `status` field.
pub const STATUSES: [&str; 3] = ["draft", "active", "deprecated"];

/// What the validator learned from one front matter block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataOutcome {
    /// Declared identifier, whenever it is a non-blank string.
    pub id: Option<String>,
    /// Syntactically valid link targets, in document order.
    pub links: Vec<String>,
    pub violations: Vec<Violation>,
}

/// Validate a front matter block against the field rules.
///
/// `expected_id` is the identifier parsed from the filename, if the filename
/// matched its category pattern.
pub fn validate_front_matter(block: &str, expected_id: Option<&str>) -> MetadataOutcome {
    let record = match RawRecord::parse(block) {
        Ok(record) => record,
        Err(e) => {
            return MetadataOutcome {
                violations: vec![Violation::untargeted(
                    RuleKey::FrontMatterInvalid,
                    format!("invalid YAML front matter: {}", e),
                )],
                ..Default::default()
            };
        }
    };

    let mut violations = Vec::new();
    let id = check_id(&record, expected_id, &mut violations);
    check_title(&record, &mut violations);
    check_status(&record, &mut violations);
    let links = collect_links(&record, &mut violations);

    MetadataOutcome {
        id,
        links,
        violations,
    }
}

fn check_id(
    record: &RawRecord,
    expected_id: Option<&str>,
    out: &mut Vec<Violation>,
) -> Option<String> {
    let id = match record.string("id") {
        Field::Absent => {
            out.push(Violation::untargeted(
                RuleKey::IdMissing,
                "front matter field id is required",
            ));
            return None;
        }
        Field::Present(id) if !id.trim().is_empty() => id,
        Field::Present(_) | Field::WrongType => {
            out.push(Violation::untargeted(
                RuleKey::IdInvalid,
                "front matter field id must be a non-empty string",
            ));
            return None;
        }
    };

    if !is_valid_id(id) {
        out.push(Violation::untargeted(
            RuleKey::IdInvalid,
            format!("front matter id '{}' must match (HLS|LLS|TC)-###", id),
        ));
    }

    if let Some(expected) = expected_id {
        if id != expected {
            out.push(Violation::untargeted(
                RuleKey::IdMismatch,
                format!(
                    "front matter id '{}' does not match filename {}",
                    id, expected
                ),
            ));
        }
    }

    // Ungrammatical ids still take part in duplicate and link checks
    Some(id.to_string())
}

fn check_title(record: &RawRecord, out: &mut Vec<Violation>) {
    match record.string("title") {
        Field::Absent => out.push(Violation::untargeted(
            RuleKey::TitleMissing,
            "front matter field title is required",
        )),
        Field::Present(title) if !title.trim().is_empty() => {}
        Field::Present(_) | Field::WrongType => out.push(Violation::untargeted(
            RuleKey::TitleInvalid,
            "front matter field title must be a non-empty string",
        )),
    }
}

fn check_status(record: &RawRecord, out: &mut Vec<Violation>) {
    match record.string("status") {
        Field::Absent => out.push(Violation::untargeted(
            RuleKey::StatusMissing,
            "front matter field status is required",
        )),
        Field::WrongType => out.push(Violation::untargeted(
            RuleKey::StatusInvalid,
            "front matter field status must be a string",
        )),
        Field::Present(status) if STATUSES.contains(&status) => {}
        Field::Present(status) => out.push(Violation::untargeted(
            RuleKey::StatusInvalid,
            format!(
                "front matter status '{}' is invalid (expected one of: {})",
                status,
                STATUSES.join(", ")
            ),
        )),
    }
}

fn collect_links(record: &RawRecord, out: &mut Vec<Violation>) -> Vec<String> {
    let relations = match record.string_map("links") {
        Field::Absent => return Vec::new(),
        Field::WrongType => {
            out.push(Violation::untargeted(
                RuleKey::LinksInvalid,
                "front matter field links must be an object of ID lists",
            ));
            return Vec::new();
        }
        Field::Present(relations) => relations,
    };

    let mut links = Vec::new();
    for (relation, value) in relations {
        let Some(items) = sequence(value) else {
            out.push(Violation::untargeted(
                RuleKey::LinksInvalid,
                format!("links.{} must be a list", relation),
            ));
            continue;
        };

        for item in items {
            let target = match item.as_str() {
                Some(s) if !s.trim().is_empty() => s,
                _ => {
                    out.push(Violation::untargeted(
                        RuleKey::LinksInvalid,
                        format!("links.{} must contain non-empty string IDs", relation),
                    ));
                    continue;
                }
            };
            if !is_valid_id(target) {
                out.push(Violation::untargeted(
                    RuleKey::LinksInvalid,
                    format!("links.{} contains invalid id '{}'", relation, target),
                ));
                continue;
            }
            links.push(target.to_string());
        }
    }

    links
}

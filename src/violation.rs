//! Violation records and the closed rule-key vocabulary.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Every rule a validation run can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    MissingDirectory,
    InvalidFilename,
    FrontMatterMissing,
    FrontMatterInvalid,
    IdMissing,
    IdInvalid,
    IdMismatch,
    TitleMissing,
    TitleInvalid,
    StatusMissing,
    StatusInvalid,
    LinksInvalid,
    MissingGherkin,
    DuplicateId,
    UnresolvedLink,
}

impl RuleKey {
    pub const ALL: [RuleKey; 15] = [
        RuleKey::MissingDirectory,
        RuleKey::InvalidFilename,
        RuleKey::FrontMatterMissing,
        RuleKey::FrontMatterInvalid,
        RuleKey::IdMissing,
        RuleKey::IdInvalid,
        RuleKey::IdMismatch,
        RuleKey::TitleMissing,
        RuleKey::TitleInvalid,
        RuleKey::StatusMissing,
        RuleKey::StatusInvalid,
        RuleKey::LinksInvalid,
        RuleKey::MissingGherkin,
        RuleKey::DuplicateId,
        RuleKey::UnresolvedLink,
    ];

    /// Stable wire name of the rule.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKey::MissingDirectory => "missing-directory",
            RuleKey::InvalidFilename => "invalid-filename",
            RuleKey::FrontMatterMissing => "front-matter-missing",
            RuleKey::FrontMatterInvalid => "front-matter-invalid",
            RuleKey::IdMissing => "id-missing",
            RuleKey::IdInvalid => "id-invalid",
            RuleKey::IdMismatch => "id-mismatch",
            RuleKey::TitleMissing => "title-missing",
            RuleKey::TitleInvalid => "title-invalid",
            RuleKey::StatusMissing => "status-missing",
            RuleKey::StatusInvalid => "status-invalid",
            RuleKey::LinksInvalid => "links-invalid",
            RuleKey::MissingGherkin => "missing-gherkin",
            RuleKey::DuplicateId => "duplicate-id",
            RuleKey::UnresolvedLink => "unresolved-link",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single rule failure.
///
/// `target` is the file or directory the violation is attributed to, with
/// forward slashes. Validators below the per-file layer produce violations
/// with an empty target and the caller stamps it via [`Violation::at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub target: String,
    pub rule: RuleKey,
    pub message: String,
}

impl Violation {
    pub fn new(target: impl Into<String>, rule: RuleKey, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            rule,
            message: message.into(),
        }
    }

    /// A violation not yet attributed to a path.
    pub fn untargeted(rule: RuleKey, message: impl Into<String>) -> Self {
        Self::new(String::new(), rule, message)
    }

    /// Attribute this violation to `target`.
    pub fn at(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.target, self.rule, self.message)
    }
}

// Report order: target, then rule key as written, then message.
impl Ord for Violation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.target
            .cmp(&other.target)
            .then_with(|| self.rule.as_str().cmp(other.rule.as_str()))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

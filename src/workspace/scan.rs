//! Pass 1: walk the category directories and build the identifier registry.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::category::{is_document_name, Category};
use crate::error::ExecutionError;
use crate::violation::{RuleKey, Violation};

use super::file::validate_file;
use super::source::{DirState, DocumentSource};
use super::to_slash;

/// Identifier → path of the first document that declared it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for `path` unless it is already taken. Returns the
    /// previously registered path on conflict; the registry is unchanged.
    pub fn claim(&mut self, id: &str, path: &str) -> Result<(), String> {
        match self.entries.get(id) {
            Some(previous) => Err(previous.clone()),
            None => {
                self.entries.insert(id.to_string(), path.to_string());
                Ok(())
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Path that declared `id`, if any.
    pub fn path_of(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A document that declared an identifier, with its outgoing links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFile {
    pub path: String,
    pub id: String,
    pub links: Vec<String>,
}

/// Everything pass 2 needs, plus the violations found so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutcome {
    pub registry: Registry,
    pub files: Vec<RecordedFile>,
    pub violations: Vec<Violation>,
    /// Number of documents validated.
    pub documents: usize,
}

/// Scan the three category directories under `root` in fixed order.
pub fn scan<S: DocumentSource + ?Sized>(
    source: &S,
    root: &Path,
) -> Result<ScanOutcome, ExecutionError> {
    let mut outcome = ScanOutcome::default();

    for category in Category::ALL {
        let dir = root.join(category.dir_name());
        let target = to_slash(&dir);

        match source.probe_dir(&dir)? {
            DirState::Missing => {
                info!(category = %category, dir = %target, "category directory missing");
                outcome.violations.push(Violation::new(
                    target,
                    RuleKey::MissingDirectory,
                    "required directory does not exist",
                ));
                continue;
            }
            DirState::NotADirectory => {
                info!(category = %category, dir = %target, "category path is not a directory");
                outcome.violations.push(Violation::new(
                    target,
                    RuleKey::MissingDirectory,
                    "required directory path is not a directory",
                ));
                continue;
            }
            DirState::Directory => {}
        }

        let before = outcome.documents;
        for path in source.list_files(&dir)? {
            let is_document = path
                .file_name()
                .map(|name| is_document_name(&name.to_string_lossy()))
                .unwrap_or(false);
            if !is_document {
                continue;
            }
            record(&mut outcome, validate_file(source, category, &path)?);
        }
        debug!(
            category = %category,
            documents = outcome.documents - before,
            "category scanned"
        );
    }

    Ok(outcome)
}

fn record(outcome: &mut ScanOutcome, report: super::file::FileReport) {
    outcome.documents += 1;
    outcome.violations.extend(report.violations);

    let Some(id) = report.id else {
        return;
    };

    if let Err(previous) = outcome.registry.claim(&id, &report.path) {
        debug!(id = %id, path = %report.path, first = %previous, "duplicate id");
        outcome.violations.push(Violation::new(
            report.path.clone(),
            RuleKey::DuplicateId,
            format!("id {} already declared in {}", id, previous),
        ));
    }

    outcome.files.push(RecordedFile {
        path: report.path,
        id,
        links: report.links,
    });
}

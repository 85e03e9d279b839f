//! Per-file validation.

use std::path::Path;

use tracing::debug;

use crate::category::{classify, Category, Classification};
use crate::document::{check_body, split_front_matter, validate_front_matter};
use crate::error::ExecutionError;
use crate::violation::{RuleKey, Violation};

use super::source::DocumentSource;
use super::to_slash;

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Document path with forward slashes.
    pub path: String,
    /// Declared identifier, when one could be established.
    pub id: Option<String>,
    /// Syntactically valid link targets.
    pub links: Vec<String>,
    pub violations: Vec<Violation>,
}

/// Read and validate the document at `path`.
///
/// Only a read failure is an error; every content problem is reported in the
/// returned [`FileReport`].
pub fn validate_file<S: DocumentSource + ?Sized>(
    source: &S,
    category: Category,
    path: &Path,
) -> Result<FileReport, ExecutionError> {
    let base_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = source.read(path)?;
    Ok(validate_document(
        category,
        &base_name,
        &to_slash(path),
        &content,
    ))
}

/// Validate a document whose content is already in memory.
pub fn validate_document(
    category: Category,
    base_name: &str,
    target: &str,
    content: &str,
) -> FileReport {
    let mut violations = Vec::new();

    let classification = classify(category, base_name);
    let expected_id = classification.expected_id().map(str::to_string);
    if let Classification::Invalid(v) = classification {
        violations.push(v);
    }

    let (block, body) = match split_front_matter(content) {
        Ok(parts) => parts,
        Err(e) => {
            debug!(path = target, error = %e, "front matter not found");
            violations.push(Violation::untargeted(
                RuleKey::FrontMatterMissing,
                e.to_string(),
            ));
            return FileReport {
                path: target.to_string(),
                id: None,
                links: Vec::new(),
                violations: stamp(violations, target),
            };
        }
    };

    let metadata = validate_front_matter(&block, expected_id.as_deref());
    violations.extend(metadata.violations);
    violations.extend(check_body(category, &body));

    FileReport {
        path: target.to_string(),
        id: metadata.id,
        links: metadata.links,
        violations: stamp(violations, target),
    }
}

fn stamp(violations: Vec<Violation>, target: &str) -> Vec<Violation> {
    violations.into_iter().map(|v| v.at(target)).collect()
}

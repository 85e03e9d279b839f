//! Whole-workspace validation.
//!
//! A run has two stages joined by one owned value:
//!
//! 1. [`scan`] walks `hls`, `lls` and `tc` under the root in that order,
//!    validates every document, and builds the [`Registry`] of declared
//!    identifiers along with each identified document's links.
//! 2. [`resolve_links`] checks every recorded link against the finished
//!    registry, so links to documents visited later still resolve.
//!
//! Content problems come back as violations. I/O failures abort the run with
//! an [`ExecutionError`] and no partial report.

mod file;
mod resolve;
mod scan;
mod source;

use std::path::Path;

use tracing::{info, warn};

use crate::error::ExecutionError;
use crate::report::sort_violations;
use crate::violation::Violation;

pub use file::{validate_document, validate_file, FileReport};
pub use resolve::resolve_links;
pub use scan::{scan, RecordedFile, Registry, ScanOutcome};
pub use source::{DirState, DocumentSource, FsSource, InMemorySource};

/// Result of a completed validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceReport {
    /// All violations, in report order.
    pub violations: Vec<Violation>,
    /// Number of documents validated.
    pub documents: usize,
    /// Number of distinct identifiers declared.
    pub identifiers: usize,
}

impl WorkspaceReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate the workspace rooted at `root` on disk.
pub fn validate_workspace(root: &Path) -> Result<WorkspaceReport, ExecutionError> {
    validate_workspace_with(&FsSource, root)
}

/// Validate the workspace rooted at `root` in `source`.
pub fn validate_workspace_with<S: DocumentSource + ?Sized>(
    source: &S,
    root: &Path,
) -> Result<WorkspaceReport, ExecutionError> {
    info!(root = %to_slash(root), "validating workspace");

    let ScanOutcome {
        registry,
        files,
        mut violations,
        documents,
    } = scan(source, root)?;

    if documents > 0 && registry.is_empty() {
        warn!(documents, "no document declared a usable id");
    }

    violations.extend(resolve_links(&registry, &files));
    sort_violations(&mut violations);

    info!(
        documents,
        identifiers = registry.len(),
        violations = violations.len(),
        "validation finished"
    );

    Ok(WorkspaceReport {
        violations,
        documents,
        identifiers: registry.len(),
    })
}

/// Render a path with forward slashes for use as a violation target.
pub fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        return text.into_owned();
    }
    text.replace(std::path::MAIN_SEPARATOR, "/")
}

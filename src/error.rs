//! Run-level failures.
//!
//! Content problems are reported as [`crate::violation::Violation`]s. The
//! errors here are I/O failures that abort a validation run without a report.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExecutionError {
    /// Probing a category directory failed for a reason other than not-found.
    Stat { path: PathBuf, source: io::Error },
    /// Listing a category directory failed.
    Walk { path: PathBuf, source: io::Error },
    /// Reading a document failed.
    Read { path: PathBuf, source: io::Error },
}

impl ExecutionError {
    /// Path of the entry the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            ExecutionError::Stat { path, .. }
            | ExecutionError::Walk { path, .. }
            | ExecutionError::Read { path, .. } => path.as_path(),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Stat { path, source } => {
                write!(f, "stat {}: {}", path.display(), source)
            }
            ExecutionError::Walk { path, source } => {
                write!(f, "walk {}: {}", path.display(), source)
            }
            ExecutionError::Read { path, source } => {
                write!(f, "read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Stat { source, .. }
            | ExecutionError::Walk { source, .. }
            | ExecutionError::Read { source, .. } => Some(source),
        }
    }
}

//! Where documents come from.
//!
//! The scanner only talks to a [`DocumentSource`], so the same engine runs
//! against the real file system or an in-memory document set.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ExecutionError;

/// What exists at a category directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    Missing,
    NotADirectory,
    Directory,
}

/// A storage backend for workspace documents.
pub trait DocumentSource {
    /// Check what exists at `path`. Only "not found" maps to
    /// [`DirState::Missing`]; other failures are execution errors.
    fn probe_dir(&self, path: &Path) -> Result<DirState, ExecutionError>;

    /// Every non-directory entry below `dir`, recursively, in sorted
    /// traversal order (siblings by file name, directories descended in
    /// place).
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ExecutionError>;

    /// Read a document as text. Invalid UTF-8 is replaced, not rejected.
    fn read(&self, path: &Path) -> Result<String, ExecutionError>;
}

/// File-system backed source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn probe_dir(&self, path: &Path) -> Result<DirState, ExecutionError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(DirState::Directory),
            Ok(_) => Ok(DirState::NotADirectory),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DirState::Missing),
            Err(source) => Err(ExecutionError::Stat {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ExecutionError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ExecutionError::Walk {
                path: e.path().unwrap_or(dir).to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            files.push(entry.into_path());
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String, ExecutionError> {
        let bytes = fs::read(path).map_err(|source| ExecutionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory source for tests and embedding.
///
/// Directories are implied by the files below them; empty directories can be
/// declared with [`InMemorySource::with_dir`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Declare an (otherwise empty) directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Add a file whose reads fail with a permission error.
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }
}

impl DocumentSource for InMemorySource {
    fn probe_dir(&self, path: &Path) -> Result<DirState, ExecutionError> {
        if self.files.contains_key(path) {
            return Ok(DirState::NotADirectory);
        }
        let is_dir = self.dirs.iter().any(|d| d.starts_with(path))
            || self.files.keys().any(|f| f.starts_with(path));
        Ok(if is_dir {
            DirState::Directory
        } else {
            DirState::Missing
        })
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ExecutionError> {
        // BTreeMap orders PathBuf component-wise, which matches a sorted walk.
        Ok(self
            .files
            .keys()
            .filter(|f| f.starts_with(dir) && f.as_path() != dir)
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> Result<String, ExecutionError> {
        if self.unreadable.contains(path) {
            return Err(ExecutionError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ExecutionError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }
}

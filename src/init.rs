//! Workspace scaffolding.
//!
//! Creates the category directories plus `shared` under the workspace root.
//! Every path is checked before anything is created, so a conflicting file
//! leaves the workspace untouched.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::category::Category;
use crate::workspace::to_slash;

/// Directory for material shared across categories.
pub const SHARED_DIR: &str = "shared";

/// Why initialization stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitRule {
    PathConflict,
    StatFailed,
    MkdirFailed,
}

impl InitRule {
    pub fn as_str(self) -> &'static str {
        match self {
            InitRule::PathConflict => "path-conflict",
            InitRule::StatFailed => "stat-failed",
            InitRule::MkdirFailed => "mkdir-failed",
        }
    }
}

impl fmt::Display for InitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct InitError {
    pub target: String,
    pub rule: InitRule,
    pub message: String,
}

impl InitError {
    fn new(path: &Path, rule: InitRule, message: impl Into<String>) -> Self {
        Self {
            target: to_slash(path),
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.target, self.rule, self.message)
    }
}

impl std::error::Error for InitError {}

/// What happened to one required directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitDirStatus {
    pub path: String,
    pub created: bool,
}

/// Required directories under `root`, in creation order.
pub fn required_dirs(root: &Path) -> Vec<PathBuf> {
    Category::ALL
        .iter()
        .map(|c| root.join(c.dir_name()))
        .chain(std::iter::once(root.join(SHARED_DIR)))
        .collect()
}

/// Create any missing workspace directories under `root`.
pub fn init_workspace(root: &Path) -> Result<Vec<InitDirStatus>, InitError> {
    let dirs = required_dirs(root);

    for dir in &dirs {
        preflight(dir)?;
    }

    let mut statuses = Vec::with_capacity(dirs.len());
    for dir in &dirs {
        let exists = preflight(dir)?;
        if !exists {
            fs::create_dir_all(dir)
                .map_err(|e| InitError::new(dir, InitRule::MkdirFailed, e.to_string()))?;
            info!(path = %to_slash(dir), "created directory");
        }
        statuses.push(InitDirStatus {
            path: to_slash(dir),
            created: !exists,
        });
    }

    Ok(statuses)
}

/// Returns whether `dir` already exists as a directory.
fn preflight(dir: &Path) -> Result<bool, InitError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(InitError::new(
            dir,
            InitRule::PathConflict,
            "required path exists and is not a directory",
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(InitError::new(dir, InitRule::StatFailed, e.to_string())),
    }
}

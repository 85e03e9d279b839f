//! Default values and configuration sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::ReportFormat;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_root, PathBuf, PathBuf::from(super::DEFAULT_ROOT));

/// Where the documentation workspace lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Workspace root containing hls/, lls/ and tc/ (default: spec)
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// How check results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// text or json (default: text)
    #[serde(default)]
    pub format: ReportFormat,
}

//! Configuration for specguard.
//!
//! Config files are markdown with YAML front matter, the same shape as the
//! documents being checked. Merge order (later overrides earlier):
//! 1. Global config (`~/.config/specguard/config.md`)
//! 2. Project config (`.specguard/config.md`)
//! 3. Command-line flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::split_front_matter;
use crate::report::ReportFormat;

pub mod defaults;

pub use defaults::*;

/// Workspace root used when nothing else is configured.
pub const DEFAULT_ROOT: &str = "spec";

/// Project config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".specguard/config.md";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load the global and project configs from their default locations.
    /// Either file may be absent.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Some(Path::new(PROJECT_CONFIG_PATH)),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) =
            split_front_matter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str::<Option<Config>>(&frontmatter)
            .context("Failed to parse config frontmatter")
            .map(Option::unwrap_or_default)
    }

    /// Load and merge configs from the given paths. Paths that do not exist
    /// are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let global_config = load_partial(global_path)?;
        let project_config = load_partial(project_path)?;

        Ok(global_config.merge_with(project_config))
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn with_overrides(mut self, root: Option<PathBuf>, format: Option<ReportFormat>) -> Self {
        if let Some(root) = root {
            self.workspace.root = root;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        self
    }
}

/// Returns the path to the global config file at ~/.config/specguard/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/specguard/config.md"))
}

fn load_partial(path: Option<&Path>) -> Result<PartialConfig> {
    match path.filter(|p| p.exists()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            PartialConfig::load_from(path)
        }
        None => Ok(PartialConfig::default()),
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub workspace: Option<PartialWorkspaceConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialWorkspaceConfig {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<ReportFormat>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) =
            split_front_matter(content).context("Failed to extract frontmatter from config")?;

        // An empty front matter block deserializes to None
        serde_yaml::from_str::<Option<PartialConfig>>(&frontmatter)
            .context("Failed to parse config frontmatter")
            .map(Option::unwrap_or_default)
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_workspace = self.workspace.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_workspace = project.workspace.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            workspace: WorkspaceConfig {
                // Project value > global value > default
                root: project_workspace
                    .root
                    .or(global_workspace.root)
                    .unwrap_or_else(defaults::default_root),
            },
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
            },
        }
    }
}

//! `specguard check`

use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use specguard::config::Config;
use specguard::report::{ReportFormat, Reporter};
use specguard::workspace::validate_workspace;

use super::{use_color, EXIT_ERROR, EXIT_OK, EXIT_VIOLATIONS};

pub fn cmd_check(root: Option<PathBuf>, format: Option<ReportFormat>) -> Result<ExitCode> {
    let config = Config::load()?.with_overrides(root, format);

    let report = match validate_workspace(&config.workspace.root) {
        Ok(report) => report,
        Err(e) => {
            // No partial report on execution errors
            debug!(path = %e.path().display(), "validation aborted");
            eprintln!("{} execution error: {}", "Error:".red(), e);
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };

    let reporter = Reporter::new(config.output.format)
        .with_color(config.output.format == ReportFormat::Text && use_color());
    reporter
        .write_to(&mut io::stdout().lock(), &report)
        .context("Failed to write report")?;

    Ok(ExitCode::from(if report.is_clean() {
        EXIT_OK
    } else {
        EXIT_VIOLATIONS
    }))
}

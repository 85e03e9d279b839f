//! Violation ordering and rendering.
//!
//! Output is a pure function of the violation set: the same workspace always
//! renders to the same bytes.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::violation::Violation;
use crate::workspace::WorkspaceReport;

/// Line printed when a check finds nothing.
pub const CLEAN_MESSAGE: &str = "OK spec check passed";

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `ERROR <target> <rule>: <message>` line per violation
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Sort violations by target, rule key, then message.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort();
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    count: usize,
    documents: usize,
    violations: &'a [Violation],
}

/// Renders a [`WorkspaceReport`] in one format.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: ReportFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    /// Enable ANSI colour in text output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the report as a string.
    pub fn render(&self, report: &WorkspaceReport) -> String {
        let mut violations = report.violations.clone();
        sort_violations(&mut violations);

        match self.format {
            ReportFormat::Text => self.render_text(&violations),
            ReportFormat::Json => render_json(report.documents, &violations),
        }
    }

    /// Render the report to `out`.
    pub fn write_to(&self, out: &mut dyn Write, report: &WorkspaceReport) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())?;
        out.flush()
    }

    fn render_text(&self, violations: &[Violation]) -> String {
        if violations.is_empty() {
            let ok = if self.color {
                CLEAN_MESSAGE.green().to_string()
            } else {
                CLEAN_MESSAGE.to_string()
            };
            return format!("{}\n", ok);
        }

        let label = if self.color {
            "ERROR".red().bold().to_string()
        } else {
            "ERROR".to_string()
        };

        let mut out = String::new();
        for v in violations {
            let rule = if self.color {
                v.rule.as_str().yellow().to_string()
            } else {
                v.rule.as_str().to_string()
            };
            out.push_str(&format!("{} {} {}: {}\n", label, v.target, rule, v.message));
        }
        out
    }
}

fn render_json(documents: usize, violations: &[Violation]) -> String {
    let report = JsonReport {
        ok: violations.is_empty(),
        count: violations.len(),
        documents,
        violations,
    };
    // Serializing plain strings and integers cannot fail
    let mut json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

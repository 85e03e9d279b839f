//! `specguard init`

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use specguard::config::Config;
use specguard::init::init_workspace;

use super::{use_color, EXIT_ERROR, EXIT_OK};

pub fn cmd_init(root: Option<PathBuf>) -> Result<ExitCode> {
    let config = Config::load()?.with_overrides(root, None);
    let color = use_color();

    let statuses = match init_workspace(&config.workspace.root) {
        Ok(statuses) => statuses,
        Err(e) => {
            let label = if color {
                "ERROR".red().bold().to_string()
            } else {
                "ERROR".to_string()
            };
            println!("{} {} {}: {}", label, e.target, e.rule, e.message);
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };

    for status in &statuses {
        let label = match (status.created, color) {
            (true, true) => "CREATED".green().to_string(),
            (true, false) => "CREATED".to_string(),
            (false, true) => "EXISTS".dimmed().to_string(),
            (false, false) => "EXISTS".to_string(),
        };
        println!("{} {}", label, status.path);
    }
    println!("OK spec init complete");

    Ok(ExitCode::from(EXIT_OK))
}

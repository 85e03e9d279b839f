//! CLI entry point for specguard.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use specguard::report::ReportFormat;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("SPECGUARD_GIT_SHA"),
    ")"
);

#[derive(Parser)]
#[command(name = "specguard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Lint HLS/LLS/TC spec workspaces", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    specguard init                 Create spec/hls, spec/lls, spec/tc and spec/shared\n    specguard check                Validate the workspace under spec/\n    specguard check --format json  Machine-readable results\n\nEXIT CODES:\n    0  no violations\n    1  violations found\n    2  execution or usage error"
)]
struct Cli {
    /// Log engine progress to stderr (overridden by SPECGUARD_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every document in the workspace
    Check {
        /// Workspace root (default: from config, else "spec")
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Create the workspace directory layout
    Init {
        /// Workspace root (default: from config, else "spec")
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::from(cmd::EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Check { root, format } => cmd::check::cmd_check(root, format),
        Commands::Init { root } => cmd::init::cmd_init(root),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Logs go to stderr so stdout stays a clean report.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "specguard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SPECGUARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn cmd_completion(shell: Shell) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "specguard", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

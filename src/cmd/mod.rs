//! Command module structure for specguard CLI

use std::io::IsTerminal;

pub mod check;
pub mod init;

/// Workspace is clean.
pub const EXIT_OK: u8 = 0;
/// Violations were found.
pub const EXIT_VIOLATIONS: u8 = 1;
/// Execution error (I/O, config) or bad usage.
pub const EXIT_ERROR: u8 = 2;

/// Whether stdout should get ANSI colour.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

//! # specguard - spec workspace linter
//!
//! specguard checks a documentation workspace of high-level specs (HLS),
//! low-level specs (LLS) and test cases (TC). Every document is a markdown
//! file with YAML front matter; specguard enforces naming, metadata and
//! cross-reference integrity and reports every violation in one pass.
//!
//! ## Modules
//!
//! - [`category`] - Document categories, identifier grammar, filename rules
//! - [`document`] - Front matter extraction, field rules, body conventions
//! - [`workspace`] - Two-pass workspace validation (scan, then resolve links)
//! - [`report`] - Violation ordering and text/JSON rendering
//! - [`init`] - Workspace scaffolding
//! - [`config`] - Layered configuration
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use specguard::report::{ReportFormat, Reporter};
//! use specguard::workspace::validate_workspace;
//!
//! let report = validate_workspace(Path::new("spec")).expect("I/O failure");
//! print!("{}", Reporter::new(ReportFormat::Text).render(&report));
//! ```

pub mod category;
pub mod config;
pub mod document;
pub mod error;
pub mod init;
pub mod report;
pub mod violation;
pub mod workspace;

pub use error::ExecutionError;
pub use violation::{RuleKey, Violation};

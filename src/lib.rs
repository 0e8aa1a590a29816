//! rplint core library.
//!
//! This crate checks containerized R analysis projects against a fixed set
//! of conventions before they are packaged.
//!
//! High-level modules:
//! - `lint`: The `Linter` engine and its check sequence.
//! - `checks`: Pure convention checks (files, Dockerfile, manifest, conda).
//! - `dockerfile`: Logical instructions, `FROM` and `LABEL` parsing.
//! - `project`: One-shot scan of the project root.
//! - `models`: Findings, report, conventions and the conda descriptor.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Human/JSON report printers.
//! - `error`: Fatal input errors.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod dockerfile;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod project;
pub mod utils;

pub use error::LintError;
pub use lint::Linter;
pub use models::{Finding, Report, Rule, Status};

//! Fatal errors raised by the lint engine.
//!
//! Convention violations are never errors; they are recorded in the
//! report. Only inputs the engine cannot read or parse at all end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a lint pass.
#[derive(Debug, Error)]
pub enum LintError {
    /// The project root does not exist.
    #[error("project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The project root exists but is not a directory.
    #[error("project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A file that exists could not be read (or the root could not be listed).
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The conda descriptor is not valid YAML for an environment file.
    #[error("failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A convention regex did not compile.
    #[error("invalid pattern for `{field}`: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The rplint configuration file could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LintError>;

impl LintError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }
}

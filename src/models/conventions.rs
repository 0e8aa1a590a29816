//! Convention tables driving every check.
//!
//! Defaults describe the QBiC R-container layout. Each field can be
//! overridden from `[conventions]` in `rplint.toml|yaml`; see `config`.
//! Regex fields are compiled once into `Rules` before a lint pass.

use crate::error::{LintError, Result};
use regex::Regex;
use serde::Serialize;

/// Number of existence records produced by the default checklist.
pub const MAX_PASS_CHECKS: usize = 7;

pub const DEFAULT_REQUIRED_FILES: &[&str] = &["Dockerfile", "environment.yml"];
pub const DEFAULT_RECOMMENDED_FILES: &[&str] =
    &["rpackages.txt", "README.md", "LICENSE", "scripts/", "data/"];
pub const DEFAULT_BASE_IMAGES: &[&str] = &["r-base", "rocker/r-base"];
pub const DEFAULT_REQUIRED_LABELS: &[&str] =
    &["name", "maintainer", "version", "organization", "github"];
pub const DEFAULT_RECOMMENDED_CHANNELS: &[&str] = &["bioconda", "r", "defaults"];

pub const DEFAULT_MANIFEST_LINE_PATTERN: &str =
    r"^[A-Za-z][A-Za-z0-9.]*[A-Za-z0-9](\s*==?\s*\d+(\.\d+)*(-\d+)?)?$";
pub const DEFAULT_ENV_NAME_PATTERN: &str =
    r"^qbicsoftware-Q[A-Z0-9]{4}-[A-Za-z0-9_]+-\d+\.\d+(\.\d+)?$";
pub const DEFAULT_RBASE_VERSION_PATTERN: &str = r"^\d+\.\d+(\.\d+)?$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Effective convention tables for one lint run.
pub struct Conventions {
    /// Items whose absence fails the project. A trailing `/` requires a directory.
    pub required_files: Vec<String>,
    /// Items whose absence only warns.
    pub recommended_files: Vec<String>,
    pub dockerfile: String,
    /// Accepted `FROM` image names (tag and digest are not compared).
    pub base_images: Vec<String>,
    pub required_labels: Vec<String>,
    pub manifest: String,
    pub manifest_line_pattern: String,
    pub conda_file: String,
    pub env_name_pattern: String,
    pub recommended_channels: Vec<String>,
    pub rbase_package: String,
    pub rbase_version_pattern: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Conventions {
    fn default() -> Self {
        Conventions {
            required_files: owned(DEFAULT_REQUIRED_FILES),
            recommended_files: owned(DEFAULT_RECOMMENDED_FILES),
            dockerfile: "Dockerfile".into(),
            base_images: owned(DEFAULT_BASE_IMAGES),
            required_labels: owned(DEFAULT_REQUIRED_LABELS),
            manifest: "rpackages.txt".into(),
            manifest_line_pattern: DEFAULT_MANIFEST_LINE_PATTERN.into(),
            conda_file: "environment.yml".into(),
            env_name_pattern: DEFAULT_ENV_NAME_PATTERN.into(),
            recommended_channels: owned(DEFAULT_RECOMMENDED_CHANNELS),
            rbase_package: "r-base".into(),
            rbase_version_pattern: DEFAULT_RBASE_VERSION_PATTERN.into(),
        }
    }
}

impl Conventions {
    /// Size of the existence checklist, i.e. records per `check_files_exist`.
    pub fn checklist_len(&self) -> usize {
        self.required_files.len() + self.recommended_files.len()
    }

    /// Compile the regex-bearing fields.
    pub fn compile(&self) -> Result<Rules> {
        Ok(Rules {
            conventions: self.clone(),
            manifest_line: compile("manifest_line_pattern", &self.manifest_line_pattern)?,
            env_name: compile("env_name_pattern", &self.env_name_pattern)?,
            rbase_version: compile("rbase_version_pattern", &self.rbase_version_pattern)?,
        })
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| LintError::InvalidPattern { field, source })
}

#[derive(Debug, Clone)]
/// Conventions with their patterns compiled, as consumed by the checks.
pub struct Rules {
    pub conventions: Conventions,
    pub manifest_line: Regex,
    pub env_name: Regex,
    pub rbase_version: Regex,
}

impl Rules {
    /// Compiled default conventions.
    pub fn defaults() -> Result<Self> {
        Conventions::default().compile()
    }
}

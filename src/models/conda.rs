//! Conda environment descriptor (`environment.yml`) and dependency specs.

use serde::Deserialize;
use std::path::Path;

use crate::error::{LintError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// The recognized top-level keys of a conda environment file.
///
/// Unknown keys (`prefix`, `variables`, ...) are accepted and ignored.
pub struct CondaEnvironment {
    #[serde(default)]
    pub name: Option<String>,
    /// Kept as raw YAML so a malformed list is a finding, not a parse error.
    #[serde(default)]
    pub channels: Option<serde_yaml::Value>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// One entry of `dependencies`.
pub enum Dependency {
    /// A conda match spec such as `r-base=3.5.1`.
    Spec(String),
    /// Nested sections such as `- pip: [...]`; never inspected.
    Nested(serde_yaml::Value),
}

impl CondaEnvironment {
    /// Parse descriptor text. An empty document is an empty descriptor.
    pub fn from_yaml_str(src: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if src.trim().is_empty() {
            return Ok(CondaEnvironment::default());
        }
        serde_yaml::from_str(src)
    }

    /// Read and parse a descriptor file; any failure is fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
        Self::from_yaml_str(&src).map_err(|source| LintError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Channel names, when `channels` is a sequence of strings.
    pub fn channel_names(&self) -> Option<Vec<&str>> {
        self.channels
            .as_ref()?
            .as_sequence()?
            .iter()
            .map(serde_yaml::Value::as_str)
            .collect()
    }

    /// String match specs in declaration order.
    pub fn specs(&self) -> impl Iterator<Item = MatchSpec<'_>> {
        self.dependencies.iter().filter_map(|d| match d {
            Dependency::Spec(s) => Some(MatchSpec::parse(s)),
            Dependency::Nested(_) => None,
        })
    }

    /// First match spec naming `package`.
    pub fn find(&self, package: &str) -> Option<MatchSpec<'_>> {
        self.specs().find(|m| m.name == package)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the version part of a match spec constrains the package.
pub enum Constraint {
    /// `name` alone.
    Unpinned,
    /// `name=ver`, `name==ver` or `name ver`.
    Exact,
    /// `>=`, `<=`, `>`, `<`, `!=`, `~=`.
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A loosely parsed conda match spec: `[channel::]name[op]version[=build]`.
/// Channel prefix and build string are accepted but not kept.
pub struct MatchSpec<'a> {
    pub raw: &'a str,
    pub name: &'a str,
    pub constraint: Constraint,
    pub version: Option<&'a str>,
}

const RANGE_OPS: &[&str] = &[">=", "<=", "!=", "~=", ">", "<"];

impl<'a> MatchSpec<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let spec = raw.trim();
        let spec = spec.split_once("::").map_or(spec, |(_, rest)| rest.trim());
        let name_end = spec
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
            .unwrap_or(spec.len());
        let name = &spec[..name_end];
        let rest = spec[name_end..].trim_start();

        let (constraint, tail) = if rest.is_empty() {
            (Constraint::Unpinned, "")
        } else if let Some(op) = RANGE_OPS.iter().find(|op| rest.starts_with(*op)) {
            (Constraint::Range, rest[op.len()..].trim_start())
        } else if let Some(t) = rest.strip_prefix("==") {
            (Constraint::Exact, t.trim_start())
        } else if let Some(t) = rest.strip_prefix('=') {
            (Constraint::Exact, t.trim_start())
        } else {
            (Constraint::Exact, rest)
        };

        let version = if tail.is_empty() {
            None
        } else {
            Some(
                tail.split_once(|c: char| c == '=' || c.is_whitespace())
                    .map_or(tail, |(v, _)| v),
            )
        };
        let constraint = if version.is_none() && constraint == Constraint::Exact {
            Constraint::Unpinned
        } else {
            constraint
        };

        MatchSpec {
            raw,
            name,
            constraint,
            version,
        }
    }
}

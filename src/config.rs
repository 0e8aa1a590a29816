//! Configuration discovery and effective settings resolution.
//!
//! rplint reads `rplint.toml|yaml|yml` from the project root or the closest
//! ancestor (up to the enclosing `.git` directory), unless a file is named
//! explicitly. Defaults:
//! - `output`: `human`
//! - `strict`: false
//! - `[conventions]`: see `models::conventions::Conventions::default`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LintError, Result};
use crate::models::conventions::Conventions;

const CONFIG_NAMES: &[&str] = &["rplint.toml", "rplint.yaml", "rplint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `rplint.toml|yaml`.
pub struct RplintConfig {
    pub output: Option<String>,
    pub strict: Option<bool>,
    #[serde(default)]
    pub conventions: Option<ConventionsCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// `[conventions]` overrides; unset fields keep their defaults.
pub struct ConventionsCfg {
    pub required_files: Option<Vec<String>>,
    pub recommended_files: Option<Vec<String>>,
    pub dockerfile: Option<String>,
    pub base_images: Option<Vec<String>>,
    pub required_labels: Option<Vec<String>>,
    pub manifest: Option<String>,
    pub manifest_line_pattern: Option<String>,
    pub conda_file: Option<String>,
    pub env_name_pattern: Option<String>,
    pub recommended_channels: Option<Vec<String>>,
    pub rbase_package: Option<String>,
    pub rbase_version_pattern: Option<String>,
}

impl ConventionsCfg {
    /// Apply the set fields on top of `base`.
    pub fn merge_into(self, base: Conventions) -> Conventions {
        Conventions {
            required_files: self.required_files.unwrap_or(base.required_files),
            recommended_files: self.recommended_files.unwrap_or(base.recommended_files),
            dockerfile: self.dockerfile.unwrap_or(base.dockerfile),
            base_images: self.base_images.unwrap_or(base.base_images),
            required_labels: self.required_labels.unwrap_or(base.required_labels),
            manifest: self.manifest.unwrap_or(base.manifest),
            manifest_line_pattern: self
                .manifest_line_pattern
                .unwrap_or(base.manifest_line_pattern),
            conda_file: self.conda_file.unwrap_or(base.conda_file),
            env_name_pattern: self.env_name_pattern.unwrap_or(base.env_name_pattern),
            recommended_channels: self
                .recommended_channels
                .unwrap_or(base.recommended_channels),
            rbase_package: self.rbase_package.unwrap_or(base.rbase_package),
            rbase_version_pattern: self
                .rbase_version_pattern
                .unwrap_or(base.rbase_version_pattern),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub project: PathBuf,
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub strict: bool,
    pub conventions: Conventions,
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding a `.git` entry.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load `RplintConfig` from a TOML or YAML file, chosen by extension.
pub fn load_config(path: &Path) -> Result<RplintConfig> {
    let s = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if s.trim().is_empty() {
        Ok(RplintConfig::default())
    } else if is_yaml {
        serde_yaml::from_str::<RplintConfig>(&s).map_err(|e| e.to_string())
    } else {
        toml::from_str::<RplintConfig>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| LintError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_project: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
    cli_strict: Option<bool>,
) -> Result<Effective> {
    let project = PathBuf::from(cli_project.unwrap_or("."));
    let config_path = match cli_config {
        Some(p) => Some(PathBuf::from(p)),
        None => find_config(&project),
    };
    let cfg = match config_path.as_deref() {
        Some(p) => {
            log::debug!("using config {}", p.display());
            load_config(p)?
        }
        None => RplintConfig::default(),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        log::warn!("unknown output mode '{}', falling back to human", output);
    }
    let strict = cli_strict.or(cfg.strict).unwrap_or(false);
    let conventions = cfg
        .conventions
        .unwrap_or_default()
        .merge_into(Conventions::default());

    Ok(Effective {
        project,
        config_path,
        output,
        strict,
        conventions,
    })
}

//! Lint engine for one R container project.
//!
//! A `Linter` is built for a single project directory and a single pass.
//! Checks can run individually or all at once via `lint_rproject`; every
//! evaluation appends to `report`, which is never reset. Build a fresh
//! `Linter` for a clean report.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checks;
use crate::error::{LintError, Result};
use crate::models::conda::CondaEnvironment;
use crate::models::conventions::{Conventions, Rules};
use crate::models::{Finding, Report};
use crate::project::ProjectSnapshot;

pub struct Linter {
    /// Project root this engine inspects.
    pub path: PathBuf,
    /// Entry names found in the project root when the engine was built.
    pub files: BTreeSet<String>,
    /// Raw Dockerfile lines; empty until `check_dockerfile` finds one.
    pub dockerfile_lines: Vec<String>,
    /// Parsed conda descriptor. Set it before `check_conda_environment` to
    /// validate a descriptor that has no backing file.
    pub conda_config: Option<CondaEnvironment>,
    pub report: Report,
    snapshot: ProjectSnapshot,
    rules: Rules,
}

impl Linter {
    /// Engine with the default conventions.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_conventions(path, &Conventions::default())
    }

    /// Engine with custom conventions. Fails when the project root cannot
    /// be listed or a convention pattern does not compile.
    pub fn with_conventions(path: impl AsRef<Path>, conventions: &Conventions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let rules = conventions.compile()?;
        let snapshot = ProjectSnapshot::scan(&path)?;
        Ok(Linter {
            files: snapshot.entries.keys().cloned().collect(),
            path,
            dockerfile_lines: Vec::new(),
            conda_config: None,
            report: Report::default(),
            snapshot,
            rules,
        })
    }

    pub fn conventions(&self) -> &Conventions {
        &self.rules.conventions
    }

    pub fn passed(&self) -> &[Finding] {
        &self.report.passed
    }

    pub fn warned(&self) -> &[Finding] {
        &self.report.warned
    }

    pub fn failed(&self) -> &[Finding] {
        &self.report.failed
    }

    /// Run every check group in order. Convention violations never stop the
    /// pass; only fatal input errors do.
    pub fn lint_rproject(&mut self) -> Result<()> {
        log::info!("linting {}", self.path.display());
        self.check_files_exist();
        self.check_dockerfile()?;
        self.check_conda_environment()?;
        let s = self.report.summary();
        log::info!(
            "finished {}: passed={} warned={} failed={}",
            self.path.display(),
            s.passed,
            s.warned,
            s.failed
        );
        Ok(())
    }

    /// One record per required or recommended checklist item.
    pub fn check_files_exist(&mut self) {
        let outcomes = checks::files::check(&self.snapshot, self.conventions());
        self.report.extend(outcomes);
    }

    /// Base image, labels, and the package manifest when one exists.
    ///
    /// A missing Dockerfile yields one failure and skips the rest.
    pub fn check_dockerfile(&mut self) -> Result<()> {
        let conv = &self.rules.conventions;
        if !self.snapshot.has_file(&conv.dockerfile) {
            self.dockerfile_lines.clear();
            let outcome = checks::dockerfile::missing(conv);
            self.report.record(outcome);
            return Ok(());
        }

        // Nothing is recorded until both inputs are read.
        let path = self.snapshot.path_of(&conv.dockerfile);
        let text = fs::read_to_string(&path).map_err(|e| LintError::io(&path, e))?;
        let manifest = if self.snapshot.has_file(&conv.manifest) {
            let path = self.snapshot.path_of(&conv.manifest);
            Some(fs::read_to_string(&path).map_err(|e| LintError::io(&path, e))?)
        } else {
            log::debug!("no {}; manifest rules not evaluated", conv.manifest);
            None
        };

        self.dockerfile_lines = text.lines().map(str::to_string).collect();
        log::debug!(
            "read {} ({} lines)",
            path.display(),
            self.dockerfile_lines.len()
        );
        let outcomes = checks::dockerfile::check(&self.dockerfile_lines, conv);
        self.report.extend(outcomes);
        if let Some(content) = manifest {
            let outcomes = checks::manifest::check(&conv.manifest, &content, &self.rules.manifest_line);
            self.report.extend(outcomes);
        }
        Ok(())
    }

    /// Name, channels and R-base rules over `conda_config`, loading the
    /// descriptor file first when nothing was injected.
    pub fn check_conda_environment(&mut self) -> Result<()> {
        if self.conda_config.is_none() {
            let name = &self.rules.conventions.conda_file;
            if !self.snapshot.has_file(name) {
                let outcome = checks::conda::missing(name);
                self.report.record(outcome);
                return Ok(());
            }
            let env = CondaEnvironment::from_path(&self.snapshot.path_of(name))?;
            log::debug!("parsed {}: {:?}", name, env.name);
            self.conda_config = Some(env);
        }
        if let Some(env) = self.conda_config.as_ref() {
            let outcomes = checks::conda::check(env, &self.rules);
            self.report.extend(outcomes);
        }
        Ok(())
    }
}

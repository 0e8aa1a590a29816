//! Shared data models: rule identifiers, findings and the lint report.

pub mod conda;
pub mod conventions;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Classification of a single rule evaluation.
pub enum Status {
    Passed,
    Warned,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Identifier of the rule that produced a finding.
pub enum Rule {
    #[serde(rename = "files.required")]
    RequiredFile,
    #[serde(rename = "files.recommended")]
    RecommendedFile,
    #[serde(rename = "dockerfile.present")]
    DockerfilePresent,
    #[serde(rename = "dockerfile.base-image")]
    BaseImage,
    #[serde(rename = "dockerfile.labels")]
    Labels,
    #[serde(rename = "manifest.content")]
    ManifestContent,
    #[serde(rename = "manifest.format")]
    ManifestFormat,
    #[serde(rename = "conda.present")]
    CondaPresent,
    #[serde(rename = "conda.name")]
    CondaName,
    #[serde(rename = "conda.channels")]
    CondaChannels,
    #[serde(rename = "conda.r-base")]
    CondaRBase,
}

impl Rule {
    /// Stable dotted identifier, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::RequiredFile => "files.required",
            Rule::RecommendedFile => "files.recommended",
            Rule::DockerfilePresent => "dockerfile.present",
            Rule::BaseImage => "dockerfile.base-image",
            Rule::Labels => "dockerfile.labels",
            Rule::ManifestContent => "manifest.content",
            Rule::ManifestFormat => "manifest.format",
            Rule::CondaPresent => "conda.present",
            Rule::CondaName => "conda.name",
            Rule::CondaChannels => "conda.channels",
            Rule::CondaRBase => "conda.r-base",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A result record: the rule that ran and a human-readable message.
pub struct Finding {
    pub rule: Rule,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a pure check function returns for one rule evaluation.
pub struct Outcome {
    pub status: Status,
    pub finding: Finding,
}

impl Outcome {
    pub fn passed(rule: Rule, message: impl Into<String>) -> Self {
        Self::new(Status::Passed, rule, message)
    }

    pub fn warned(rule: Rule, message: impl Into<String>) -> Self {
        Self::new(Status::Warned, rule, message)
    }

    pub fn failed(rule: Rule, message: impl Into<String>) -> Self {
        Self::new(Status::Failed, rule, message)
    }

    fn new(status: Status, rule: Rule, message: impl Into<String>) -> Self {
        Outcome {
            status,
            finding: Finding {
                rule,
                message: message.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Append-only accumulator of findings, one list per status.
///
/// Lists grow for the whole lifetime of the report; recording the same
/// evaluation twice yields two records.
pub struct Report {
    pub passed: Vec<Finding>,
    pub warned: Vec<Finding>,
    pub failed: Vec<Finding>,
}

impl Report {
    /// Route one outcome into the list matching its status.
    pub fn record(&mut self, outcome: Outcome) {
        log::debug!(
            "{:?} {} {}",
            outcome.status,
            outcome.finding.rule,
            outcome.finding.message
        );
        match outcome.status {
            Status::Passed => self.passed.push(outcome.finding),
            Status::Warned => self.warned.push(outcome.finding),
            Status::Failed => self.failed.push(outcome.finding),
        }
    }

    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }

    /// Total number of rule evaluations recorded.
    pub fn len(&self) -> usize {
        self.passed.len() + self.warned.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.passed.len(),
            warned: self.warned.len(),
            failed: self.failed.len(),
        }
    }

    /// Whether a CI pipeline should accept the project.
    ///
    /// With `strict`, warnings reject the project as well.
    pub fn is_success(&self, strict: bool) -> bool {
        self.failed.is_empty() && (!strict || self.warned.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Per-status record counts used by printers.
pub struct Summary {
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_routes_by_status() {
        let mut report = Report::default();
        report.record(Outcome::passed(Rule::Labels, "ok"));
        report.record(Outcome::warned(Rule::CondaChannels, "no channels"));
        report.record(Outcome::failed(Rule::BaseImage, "wrong image"));
        report.record(Outcome::failed(Rule::CondaName, "bad name"));
        assert_eq!(report.passed.len(), 1);
        assert_eq!(report.warned.len(), 1);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.len(), 4);
        assert_eq!(report.failed[1].rule, Rule::CondaName);
    }

    #[test]
    fn test_is_success_strict() {
        let mut report = Report::default();
        report.record(Outcome::warned(Rule::RecommendedFile, "data/ missing"));
        assert!(report.is_success(false));
        assert!(!report.is_success(true));
        report.record(Outcome::failed(Rule::RequiredFile, "Dockerfile missing"));
        assert!(!report.is_success(false));
    }

    #[test]
    fn test_rule_serializes_as_dotted_id() {
        let finding = Finding {
            rule: Rule::CondaRBase,
            message: "pinned".into(),
        };
        let v = serde_json::to_value(&finding).unwrap();
        assert_eq!(v["rule"], "conda.r-base");
        assert_eq!(v["rule"], Rule::CondaRBase.id());
    }
}

//! Lint runs over the example projects in `tests/fixtures`.
//!
//!     tests/fixtures/
//!         complete_project/      every convention satisfied
//!         minimal_project/       no scripts/ or data/
//!         bad_example/           ubuntu base image, bad environment name
//!         ...

use std::path::PathBuf;

use rplint::models::conda::CondaEnvironment;
use rplint::models::conventions::MAX_PASS_CHECKS;
use rplint::{Linter, Rule};

/// Records from a full pass over a conforming project: the existence
/// checklist, base image + labels, two manifest records, three conda rules.
const FULL_PASS_CHECKS: usize = MAX_PASS_CHECKS + 2 + 2 + 3;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn linter(name: &str) -> Linter {
    Linter::new(fixture(name)).unwrap()
}

/// Compare list sizes, dumping the lists on mismatch.
fn assess_lint_status(lint: &Linter, passed: usize, warned: usize, failed: usize) {
    let observed = (lint.passed().len(), lint.warned().len(), lint.failed().len());
    assert_eq!(
        observed,
        (passed, warned, failed),
        "expected (passed, warned, failed) = {:?}, found {:?}\n{:#?}",
        (passed, warned, failed),
        observed,
        lint.report
    );
}

#[test]
fn test_complete_project_passes_everything() {
    let mut lint = linter("complete_project");
    lint.lint_rproject().unwrap();
    assess_lint_status(&lint, FULL_PASS_CHECKS, 0, 0);
    assert_eq!(lint.report.len(), FULL_PASS_CHECKS);
}

#[test]
fn test_minimal_project_warns_for_optional_directories() {
    let mut lint = linter("minimal_project");
    lint.lint_rproject().unwrap();
    assess_lint_status(&lint, FULL_PASS_CHECKS - 2, 2, 0);
    let warned: Vec<&str> = lint.warned().iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        warned,
        vec!["scripts/ not found (recommended)", "data/ not found (recommended)"]
    );
}

#[test]
fn test_manifest_rules_pass_for_minimal_project() {
    let mut lint = linter("minimal_project");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 4, 0, 0);
    assert!(!lint.dockerfile_lines.is_empty());
}

#[test]
fn test_dockerfile_with_wrong_base_image() {
    let mut lint = linter("bad_example");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 3, 0, 1);
    assert_eq!(lint.failed()[0].rule, Rule::BaseImage);
}

#[test]
fn test_dockerfile_without_base_image() {
    let mut lint = linter("corrupt_dockerfile");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 3, 0, 1);
    assert_eq!(lint.failed()[0].message, "Dockerfile has no FROM instruction");
}

#[test]
fn test_missing_dockerfile_fails_once() {
    let mut lint = linter("no_dockerfile");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 0, 0, 1);
    assert_eq!(lint.failed()[0].rule, Rule::DockerfilePresent);

    // the other groups still run in a full pass
    let mut lint = linter("no_dockerfile");
    lint.lint_rproject().unwrap();
    assess_lint_status(&lint, MAX_PASS_CHECKS - 1 + 3, 0, 2);
}

#[test]
fn test_labels_are_defined_properly_fail() {
    let mut lint = linter("missing_label_dockerfile");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 1, 0, 1);
    assert_eq!(
        lint.failed()[0].message,
        "Missing LABEL keys: organization, github"
    );
}

#[test]
fn test_rpackage_empty_warn() {
    let mut lint = linter("empty_manifest");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 2, 1, 0);
    assert_eq!(lint.warned()[0].rule, Rule::ManifestContent);
}

#[test]
fn test_rpackage_malformed_fail() {
    let mut lint = linter("malformed_manifest");
    lint.check_dockerfile().unwrap();
    assess_lint_status(&lint, 3, 0, 1);
    assert_eq!(lint.failed()[0].rule, Rule::ManifestFormat);
}

#[test]
fn test_conda_env_file_for_name_and_fail() {
    let mut lint = linter("bad_example");
    lint.check_conda_environment().unwrap();
    assess_lint_status(&lint, 2, 0, 1);
    assert_eq!(lint.failed()[0].rule, Rule::CondaName);
    assert_eq!(
        lint.conda_config.as_ref().and_then(|c| c.name.as_deref()),
        Some("my-analysis")
    );
}

fn injected(deps: &str) -> CondaEnvironment {
    CondaEnvironment::from_yaml_str(&format!(
        r#"
name: qbicsoftware-QTEST-ranalyses-1.0
channels:
    - bioconda
    - r
    - defaults
dependencies:
{}
"#,
        deps
    ))
    .unwrap()
}

#[test]
fn test_conda_env_file_no_rversion_tag() {
    let mut lint = linter("bad_example");
    lint.check_files_exist();
    lint.conda_config = Some(injected("    - r-base\n    - r-ggplot2"));
    lint.check_conda_environment().unwrap();
    assess_lint_status(&lint, MAX_PASS_CHECKS + 2, 1, 0);
    assert_eq!(lint.warned()[0].rule, Rule::CondaRBase);
}

#[test]
fn test_conda_env_file_wrong_rversion_tag() {
    let mut lint = linter("bad_example");
    lint.check_files_exist();
    lint.conda_config = Some(injected("    - r-base=1.0dev\n    - r-ggplot2"));
    lint.check_conda_environment().unwrap();
    assess_lint_status(&lint, MAX_PASS_CHECKS + 2, 0, 1);
    assert_eq!(lint.failed()[0].rule, Rule::CondaRBase);
}

#[test]
fn test_injected_config_without_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut lint = Linter::new(dir.path()).unwrap();
    lint.conda_config = Some(injected("    - r-base=4.3.1"));
    lint.check_conda_environment().unwrap();
    assess_lint_status(&lint, 3, 0, 0);
}

#[test]
fn test_checks_are_not_idempotent() {
    let mut lint = linter("complete_project");
    lint.check_files_exist();
    lint.check_files_exist();
    assess_lint_status(&lint, 2 * MAX_PASS_CHECKS, 0, 0);
}

#[test]
fn test_repeated_runs_are_deterministic() {
    for name in ["complete_project", "bad_example", "missing_label_dockerfile"] {
        let mut first = linter(name);
        first.lint_rproject().unwrap();
        let mut second = linter(name);
        second.lint_rproject().unwrap();
        assert_eq!(first.report, second.report, "{}", name);
    }
}

#[test]
fn test_full_pass_over_bad_example() {
    let mut lint = linter("bad_example");
    lint.lint_rproject().unwrap();
    assess_lint_status(&lint, MAX_PASS_CHECKS + 3 + 2, 0, 2);
    let failed: Vec<Rule> = lint.failed().iter().map(|f| f.rule).collect();
    assert_eq!(failed, vec![Rule::BaseImage, Rule::CondaName]);
}

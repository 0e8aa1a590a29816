use assert_cmd::Command;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rplint() -> Command {
    let mut cmd = Command::cargo_bin("rplint").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_clean_project_exits_zero_with_json_report() {
    let out = rplint()
        .args(["lint", "--output", "json"])
        .arg(fixture("complete_project"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["summary"]["failed"], 0);
    assert_eq!(report["summary"]["warned"], 0);
    assert_eq!(report["passed"][0]["rule"], "files.required");
}

#[test]
fn test_failures_exit_one() {
    let out = rplint()
        .arg("lint")
        .arg(fixture("bad_example"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✖ ⟦fail⟧ ❲dockerfile.base-image❳"));
    assert!(stdout.contains("— Summary — passed=12 warned=0 failed=2"));
}

#[test]
fn test_strict_turns_warnings_into_failure() {
    let out = rplint()
        .arg("lint")
        .arg(fixture("minimal_project"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));

    let out = rplint()
        .args(["lint", "--strict"])
        .arg(fixture("minimal_project"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_missing_project_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let out = rplint()
        .arg("lint")
        .arg(dir.path().join("does-not-exist"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("project directory not found"));
}

#[test]
fn test_config_overrides_conventions() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("rplint.toml");
    std::fs::write(
        &cfg,
        "[conventions]\nbase_images = [\"ubuntu\"]\nenv_name_pattern = \"^my-\"\n",
    )
    .unwrap();
    let out = rplint()
        .args(["lint", "--config"])
        .arg(&cfg)
        .arg(fixture("bad_example"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("info: Using config"));
}

#[test]
fn test_conventions_prints_toml() {
    let out = rplint()
        .arg("conventions")
        .arg(fixture("complete_project"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let parsed: toml::Table = toml::from_str(&stdout).unwrap();
    assert_eq!(parsed["conda_file"].as_str(), Some("environment.yml"));
    assert_eq!(parsed["required_labels"].as_array().map(Vec::len), Some(5));
}

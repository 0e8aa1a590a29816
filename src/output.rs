//! Report rendering.
//!
//! Supports `human` (default) and `json` outputs. The JSON form lists the
//! three record lists and a top-level summary.

use crate::models::{Finding, Report, Status};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Print a lint report in the requested format.
pub fn print_report(project: &Path, report: &Report, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_report_json(project, report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            for line in render_human(report, use_colors(output)) {
                println!("{}", line);
            }
        }
    }
}

/// Human-readable lines: passes, then warnings, then failures, then a summary.
pub fn render_human(report: &Report, color: bool) -> Vec<String> {
    let groups = [
        (Status::Passed, &report.passed),
        (Status::Warned, &report.warned),
        (Status::Failed, &report.failed),
    ];
    let mut lines: Vec<String> = groups
        .iter()
        .flat_map(|(status, findings)| findings.iter().map(move |f| render_finding(*status, f, color)))
        .collect();
    let s = report.summary();
    let summary = format!(
        "— Summary — passed={} warned={} failed={}",
        s.passed, s.warned, s.failed
    );
    lines.push(if color {
        summary.bold().to_string()
    } else {
        summary
    });
    lines
}

fn render_finding(status: Status, f: &Finding, color: bool) -> String {
    let (icon, tag) = match status {
        Status::Passed => ("✔", "⟦pass⟧"),
        Status::Warned => ("▲", "⟦warn⟧"),
        Status::Failed => ("✖", "⟦fail⟧"),
    };
    if !color {
        return format!("{} {} ❲{}❳ — {}", icon, tag, f.rule, f.message);
    }
    let (icon, tag) = match status {
        Status::Passed => (icon.green().to_string(), tag.green().bold().to_string()),
        Status::Warned => (icon.yellow().to_string(), tag.yellow().bold().to_string()),
        Status::Failed => (icon.red().to_string(), tag.red().bold().to_string()),
    };
    format!("{} {} ❲{}❳ — {}", icon, tag, f.rule.bold(), f.message)
}

/// Compose the report JSON object (pure) for testing purposes.
pub fn compose_report_json(project: &Path, report: &Report) -> JsonVal {
    json!({
        "project": project.to_string_lossy(),
        "passed": report.passed,
        "warned": report.warned,
        "failed": report.failed,
        "summary": report.summary(),
    })
}

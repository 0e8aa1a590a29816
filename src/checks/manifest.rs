//! R-package manifest (`rpackages.txt`) rules.
//!
//! One package per line, `name` or `name==version`. Blank lines and `#`
//! comments are ignored.

use regex::Regex;

use crate::models::{Outcome, Rule};

/// Content and format outcomes for the manifest text.
///
/// An empty manifest yields a single warning; otherwise a content record
/// and a format record are returned.
pub fn check(file_name: &str, content: &str, line_pattern: &Regex) -> Vec<Outcome> {
    let entries: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line.split_once('#').map_or(line, |(head, _)| head);
            (i + 1, line.trim())
        })
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if entries.is_empty() {
        return vec![Outcome::warned(
            Rule::ManifestContent,
            format!("{} is empty; declare the R packages the image needs", file_name),
        )];
    }

    let content_outcome = Outcome::passed(
        Rule::ManifestContent,
        format!("{} declares {} package(s)", file_name, entries.len()),
    );

    let malformed: Vec<String> = entries
        .iter()
        .filter(|(_, line)| !line_pattern.is_match(line))
        .map(|(n, line)| format!("{}: '{}'", n, line))
        .collect();
    let format_outcome = if malformed.is_empty() {
        Outcome::passed(
            Rule::ManifestFormat,
            format!("All {} lines are well-formed", file_name),
        )
    } else {
        Outcome::failed(
            Rule::ManifestFormat,
            format!("Malformed lines in {}: {}", file_name, malformed.join("; ")),
        )
    };

    vec![content_outcome, format_outcome]
}

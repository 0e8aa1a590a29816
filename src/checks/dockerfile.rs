//! Base image and label rules over a parsed Dockerfile.

use std::collections::HashMap;

use super::join;
use crate::dockerfile::{instructions, label_pairs, ImageRef, Instruction};
use crate::models::conventions::Conventions;
use crate::models::{Outcome, Rule};

/// The single outcome emitted when there is no Dockerfile to inspect.
pub fn missing(conventions: &Conventions) -> Outcome {
    Outcome::failed(
        Rule::DockerfilePresent,
        format!(
            "{} not found; base image and label checks skipped",
            conventions.dockerfile
        ),
    )
}

/// Base-image and label-completeness outcomes, in that order.
pub fn check(lines: &[String], conventions: &Conventions) -> Vec<Outcome> {
    let parsed = instructions(lines);
    vec![
        check_base_image(&parsed, conventions),
        check_labels(&parsed, conventions),
    ]
}

fn check_base_image(parsed: &[Instruction], conventions: &Conventions) -> Outcome {
    let Some(from) = parsed.iter().find(|i| i.keyword == "FROM") else {
        return Outcome::failed(
            Rule::BaseImage,
            format!("{} has no FROM instruction", conventions.dockerfile),
        );
    };
    let Some(image) = ImageRef::from_args(&from.args) else {
        return Outcome::failed(
            Rule::BaseImage,
            format!("FROM on line {} names no image", from.line),
        );
    };
    let name = image.canonical_name();
    let stage = image
        .alias
        .as_deref()
        .map(|a| format!(" (stage '{}')", a))
        .unwrap_or_default();
    let accepted = conventions
        .base_images
        .iter()
        .any(|allowed| ImageRef::parse(allowed).canonical_name() == name);
    if accepted {
        Outcome::passed(
            Rule::BaseImage,
            format!(
                "Base image {}{}{}",
                name,
                image.tag.map(|t| format!(":{}", t)).unwrap_or_default(),
                stage
            ),
        )
    } else {
        Outcome::failed(
            Rule::BaseImage,
            format!(
                "Base image '{}'{} on line {} is not an R base image (expected one of: {})",
                name,
                stage,
                from.line,
                join(&conventions.base_images)
            ),
        )
    }
}

fn check_labels(parsed: &[Instruction], conventions: &Conventions) -> Outcome {
    // Later LABELs override earlier ones, as in docker build.
    let labels: HashMap<String, String> = parsed
        .iter()
        .filter(|i| i.keyword == "LABEL")
        .flat_map(|i| label_pairs(&i.args))
        .collect();
    let missing: Vec<&str> = conventions
        .required_labels
        .iter()
        .filter(|key| labels.get(key.as_str()).map_or(true, |v| v.trim().is_empty()))
        .map(String::as_str)
        .collect();
    if missing.is_empty() {
        Outcome::passed(
            Rule::Labels,
            format!("All required labels set: {}", join(&conventions.required_labels)),
        )
    } else {
        Outcome::failed(Rule::Labels, format!("Missing LABEL keys: {}", join(&missing)))
    }
}

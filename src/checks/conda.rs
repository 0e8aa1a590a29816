//! Conda environment rules: name, channels, pinned R version.

use super::join;
use crate::models::conda::{CondaEnvironment, Constraint};
use crate::models::conventions::Rules;
use crate::models::{Outcome, Rule};

/// Outcome emitted when there is no descriptor file and none was injected.
pub fn missing(file_name: &str) -> Outcome {
    Outcome::failed(
        Rule::CondaPresent,
        format!("{} not found; conda checks skipped", file_name),
    )
}

/// Name, channels and R-base outcomes, in that order.
pub fn check(env: &CondaEnvironment, rules: &Rules) -> Vec<Outcome> {
    vec![
        check_name(env, rules),
        check_channels(env, rules),
        check_rbase(env, rules),
    ]
}

fn check_name(env: &CondaEnvironment, rules: &Rules) -> Outcome {
    match env.name.as_deref() {
        Some(name) if rules.env_name.is_match(name) => {
            Outcome::passed(Rule::CondaName, format!("Environment name '{}'", name))
        }
        Some(name) => Outcome::failed(
            Rule::CondaName,
            format!(
                "Environment name '{}' does not match {}",
                name,
                rules.env_name.as_str()
            ),
        ),
        None => Outcome::failed(Rule::CondaName, "Environment has no name"),
    }
}

fn check_channels(env: &CondaEnvironment, rules: &Rules) -> Outcome {
    let recommended = join(&rules.conventions.recommended_channels);
    match (env.channels.as_ref(), env.channel_names()) {
        (_, Some(channels)) if !channels.is_empty() => {
            Outcome::passed(Rule::CondaChannels, format!("Channels: {}", join(&channels)))
        }
        (Some(value), None) if !value.is_null() => Outcome::warned(
            Rule::CondaChannels,
            format!(
                "channels must be a list of channel names (recommended: {})",
                recommended
            ),
        ),
        _ => Outcome::warned(
            Rule::CondaChannels,
            format!("No channels declared (recommended: {})", recommended),
        ),
    }
}

fn check_rbase(env: &CondaEnvironment, rules: &Rules) -> Outcome {
    let package = rules.conventions.rbase_package.as_str();
    let Some(spec) = env.find(package) else {
        return Outcome::warned(
            Rule::CondaRBase,
            format!("No {} dependency; the R version is not pinned", package),
        );
    };
    match (spec.constraint, spec.version) {
        (Constraint::Unpinned, _) | (_, None) => Outcome::warned(
            Rule::CondaRBase,
            format!("{} is not pinned to a version", package),
        ),
        (Constraint::Range, Some(_)) => Outcome::failed(
            Rule::CondaRBase,
            format!("'{}' must pin an exact version, not a range", spec.raw.trim()),
        ),
        (Constraint::Exact, Some(version)) if rules.rbase_version.is_match(version) => {
            Outcome::passed(Rule::CondaRBase, format!("{} pinned to {}", package, version))
        }
        (Constraint::Exact, Some(version)) => Outcome::failed(
            Rule::CondaRBase,
            format!(
                "Invalid {} version '{}' (expected {})",
                package,
                version,
                rules.rbase_version.as_str()
            ),
        ),
    }
}

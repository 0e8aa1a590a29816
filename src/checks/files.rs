//! Required and recommended project entries.

use crate::models::conventions::Conventions;
use crate::models::{Outcome, Rule};
use crate::project::{EntryKind, ProjectSnapshot};

/// One outcome per checklist item, required items first.
pub fn check(snapshot: &ProjectSnapshot, conventions: &Conventions) -> Vec<Outcome> {
    let required = conventions
        .required_files
        .iter()
        .map(|item| (item, Rule::RequiredFile));
    let recommended = conventions
        .recommended_files
        .iter()
        .map(|item| (item, Rule::RecommendedFile));

    required
        .chain(recommended)
        .map(|(item, rule)| check_item(snapshot, item, rule))
        .collect()
}

fn check_item(snapshot: &ProjectSnapshot, item: &str, rule: Rule) -> Outcome {
    let (name, expected) = match item.strip_suffix('/') {
        Some(dir) => (dir, EntryKind::Dir),
        None => (item, EntryKind::File),
    };
    let problem = match snapshot.kind(name) {
        Some(kind) if kind == expected => None,
        Some(kind) => Some(format!(
            "{} is a {}, expected a {}",
            item,
            kind.describe(),
            expected.describe()
        )),
        None => Some(format!("{} not found", item)),
    };
    match (problem, rule) {
        (None, _) => Outcome::passed(rule, format!("Found {}", item)),
        (Some(msg), Rule::RequiredFile) => Outcome::failed(rule, msg),
        (Some(msg), _) => Outcome::warned(rule, format!("{} (recommended)", msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use std::fs;
    use tempfile::tempdir;

    fn statuses(outcomes: &[Outcome]) -> (usize, usize, usize) {
        let count = |s: Status| outcomes.iter().filter(|o| o.status == s).count();
        (
            count(Status::Passed),
            count(Status::Warned),
            count(Status::Failed),
        )
    }

    #[test]
    fn test_empty_project_fails_required_and_warns_recommended() {
        let dir = tempdir().unwrap();
        let snap = ProjectSnapshot::scan(dir.path()).unwrap();
        let out = check(&snap, &Conventions::default());
        assert_eq!(statuses(&out), (0, 5, 2));
        assert_eq!(out[0].finding.message, "Dockerfile not found");
        assert_eq!(out[0].finding.rule, Rule::RequiredFile);
    }

    #[test]
    fn test_missing_readme_only_warns() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for f in ["Dockerfile", "environment.yml", "rpackages.txt", "LICENSE"] {
            fs::write(root.join(f), "").unwrap();
        }
        fs::create_dir(root.join("scripts")).unwrap();
        fs::create_dir(root.join("data")).unwrap();
        let snap = ProjectSnapshot::scan(root).unwrap();
        let out = check(&snap, &Conventions::default());
        assert_eq!(statuses(&out), (6, 1, 0));
        let warned = out.iter().find(|o| o.status == Status::Warned).unwrap();
        assert_eq!(warned.finding.rule, Rule::RecommendedFile);
        assert_eq!(warned.finding.message, "README.md not found (recommended)");
    }

    #[test]
    fn test_wrong_kind_counts_as_missing() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for f in ["Dockerfile", "environment.yml", "README.md", "rpackages.txt", "LICENSE"] {
            fs::write(root.join(f), "").unwrap();
        }
        fs::write(root.join("scripts"), "not a dir").unwrap();
        fs::create_dir(root.join("data")).unwrap();
        let snap = ProjectSnapshot::scan(root).unwrap();
        let out = check(&snap, &Conventions::default());
        assert_eq!(statuses(&out), (6, 1, 0));
        let warned = out.iter().find(|o| o.status == Status::Warned).unwrap();
        assert_eq!(
            warned.finding.message,
            "scripts/ is a file, expected a directory (recommended)"
        );
    }
}

//! Schema validation for `SkillMatrix` records.
//!
//! Both producers go through here: the deterministic pipeline asserts its own
//! output, and model output is parsed and checked before it is trusted.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::skill_matrix::{SkillBucket, SkillMatrix};

/// Upper bound on whitespace-delimited words in `summary`.
pub const MAX_SUMMARY_WORDS: usize = 60;

/// A single schema violation, addressed by a dotted path (`skills.devops.2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("skill matrix failed validation: {}", render_issues(.issues, usize::MAX))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Compact `path: message; ...` rendering of the first `limit` issues,
    /// suitable for embedding in a repair prompt.
    pub fn hint(&self, limit: usize) -> String {
        render_issues(&self.issues, limit)
    }
}

fn render_issues(issues: &[ValidationIssue], limit: usize) -> String {
    issues
        .iter()
        .take(limit)
        .map(|i| format!("{}: {}", i.path, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Counts whitespace-delimited words the same way the summary bound is checked.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Checks every schema constraint and reports all violations at once.
pub fn validate(matrix: &SkillMatrix) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    check_text("title", &matrix.title, &mut issues);

    // A skill belongs to exactly one bucket
    let mut seen: HashMap<&str, SkillBucket> = HashMap::new();
    for (bucket, skills) in matrix.skills.iter() {
        let prefix = format!("skills.{}", bucket.as_str());
        check_list(&prefix, skills, &mut issues);

        for (i, skill) in skills.iter().enumerate() {
            match seen.get(skill.as_str()) {
                Some(&first) if first == bucket => issues.push(ValidationIssue::new(
                    format!("{prefix}.{i}"),
                    format!("duplicate entry '{skill}'"),
                )),
                Some(&first) => issues.push(ValidationIssue::new(
                    format!("{prefix}.{i}"),
                    format!("'{skill}' already listed in {}", first.as_str()),
                )),
                None => {
                    seen.insert(skill.as_str(), bucket);
                }
            }
        }
    }

    check_list("mustHave", &matrix.must_have, &mut issues);
    check_list("niceToHave", &matrix.nice_to_have, &mut issues);

    if let Some(salary) = &matrix.salary {
        if salary.min == Some(0) {
            issues.push(ValidationIssue::new(
                "salary.min",
                "must be a positive integer",
            ));
        }
        if salary.max == Some(0) {
            issues.push(ValidationIssue::new(
                "salary.max",
                "must be a positive integer",
            ));
        }
        if let (Some(min), Some(max)) = (salary.min, salary.max) {
            if min > max {
                issues.push(ValidationIssue::new(
                    "salary.min",
                    "salary.min cannot be greater than salary.max",
                ));
            }
        }
    }

    if word_count(&matrix.summary) > MAX_SUMMARY_WORDS {
        issues.push(ValidationIssue::new(
            "summary",
            format!("summary must be {MAX_SUMMARY_WORDS} words or fewer"),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

/// Parses untrusted JSON into a validated `SkillMatrix`.
///
/// Syntax and type errors surface as a single `<root>` issue. String fields are
/// trimmed before the constraint checks run.
pub fn parse_skill_matrix(raw: &str) -> Result<SkillMatrix, ValidationError> {
    let matrix: SkillMatrix = serde_json::from_str(raw).map_err(|e| ValidationError {
        issues: vec![ValidationIssue::new("<root>", e.to_string())],
    })?;
    let matrix = matrix.trimmed();
    validate(&matrix)?;
    Ok(matrix)
}

fn check_text(path: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "must not be empty"));
    } else if value.trim() != value {
        issues.push(ValidationIssue::new(
            path,
            "must not have leading or trailing whitespace",
        ));
    }
}

fn check_list(prefix: &str, values: &[String], issues: &mut Vec<ValidationIssue>) {
    for (i, value) in values.iter().enumerate() {
        check_text(&format!("{prefix}.{i}"), value, issues);
    }
}

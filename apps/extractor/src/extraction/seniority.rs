use lazy_static::lazy_static;
use regex::Regex;

use crate::models::skill_matrix::Seniority;

lazy_static! {
    /// Checked in order; the first rule that matches anywhere in the text wins,
    /// so "Senior ... mid-sized team" stays senior.
    static ref SENIORITY_RULES: Vec<(Regex, Seniority)> = vec![
        (Regex::new(r"(?i)lead|staff|principal").unwrap(), Seniority::Lead),
        (Regex::new(r"(?i)senior|sr\.").unwrap(), Seniority::Senior),
        (Regex::new(r"(?i)\bmid\b|middle|intermediate").unwrap(), Seniority::Mid),
        (Regex::new(r"(?i)junior|jr\.").unwrap(), Seniority::Junior),
    ];
}

/// Maps the whole text to a seniority level, `Unknown` when no rule fires.
pub fn infer_seniority(text: &str) -> Seniority {
    SENIORITY_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, level)| *level)
        .unwrap_or_default()
}

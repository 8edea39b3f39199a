//! The deterministic extraction pipeline.

use tracing::debug;

use crate::extraction::lists::parse_lists;
use crate::extraction::normalizer::normalize_phrases;
use crate::extraction::salary::parse_salary;
use crate::extraction::seniority::infer_seniority;
use crate::extraction::skills::{bucket_skills, tokenize};
use crate::extraction::summary::summarize;
use crate::extraction::title::extract_title;
use crate::models::skill_matrix::SkillMatrix;
use crate::validation::validate;

/// Builds a `SkillMatrix` from raw job description text.
///
/// Total over all strings: malformed input degrades to defaults (unknown
/// seniority, "Unknown Title", empty lists, no salary, placeholder summary).
///
/// # Panics
///
/// Panics if the assembled record fails schema validation. Every stage
/// guarantees its own constraints, so this is unreachable short of a bug.
pub fn fallback_extract(jd_text: &str) -> SkillMatrix {
    let text = normalize_phrases(jd_text);

    let title = extract_title(&text);
    let seniority = infer_seniority(&text);
    let tokens = tokenize(&text);
    let skills = bucket_skills(&tokens);
    let lists = parse_lists(&text);
    let salary = parse_salary(&text);
    let summary = summarize(&text);

    debug!(
        title = %title,
        ?seniority,
        tokens = tokens.len(),
        must_have = lists.must_have.len(),
        nice_to_have = lists.nice_to_have.len(),
        has_salary = salary.is_some(),
        "fallback extraction complete"
    );

    let matrix = SkillMatrix {
        title,
        seniority,
        skills,
        must_have: lists.must_have,
        nice_to_have: lists.nice_to_have,
        salary,
        summary,
    };

    if let Err(e) = validate(&matrix) {
        panic!("fallback extractor produced an invalid record: {e}");
    }
    matrix
}

//! Tokenizer and skill classifier.
//!
//! Tokens are maximal runs of `[a-z0-9+.#/-]` over the lowercased text. Each
//! token is reduced to a canonical skill form, then bucketed by vocabulary
//! lookup. Unknown tokens land in `other` unless they look like noise.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::vocabulary::{alias_of, bucket_of, is_stopword};
use crate::models::skill_matrix::{SkillBucket, SkillBuckets};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"[a-z0-9+.#/-]+").unwrap();
    static ref PLAIN_NUMBER: Regex = Regex::new(r"^[0-9]+([,.][0-9]+)?$").unwrap();
    static ref THOUSANDS: Regex = Regex::new(r"^[0-9]+k$").unwrap();
    static ref SKILL_SHAPE: Regex = Regex::new(r"^[a-z][a-z0-9.+/-]*$").unwrap();
}

/// Distinct tokens of `text`, lowercased, in first-seen order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// Reduces a token to the form it is reported under: sentence periods dropped,
/// known aliases resolved, and `react.js` / `nodejs` folded onto `react` / `node`.
pub fn canonical_skill(token: &str) -> &str {
    let token = token.trim_end_matches('.');
    if bucket_of(token).is_some() {
        return token;
    }
    if let Some(target) = alias_of(token) {
        return target;
    }
    for suffix in [".js", "js"] {
        if let Some(base) = token.strip_suffix(suffix) {
            if bucket_of(base).is_some() {
                return base;
            }
        }
    }
    token
}

/// True when an unclassified token should be dropped instead of landing in `other`.
pub fn is_noise(token: &str) -> bool {
    is_stopword(token)
        || PLAIN_NUMBER.is_match(token)
        || THOUSANDS.is_match(token)
        || !token.chars().any(|c| c.is_ascii_alphanumeric())
        || token.chars().count() < 2
        || !SKILL_SHAPE.is_match(token)
}

/// Buckets tokens by vocabulary priority. A skill lands in at most one bucket
/// and each bucket keeps first-seen order without duplicates.
pub fn bucket_skills<S: AsRef<str>>(tokens: &[S]) -> SkillBuckets {
    let mut buckets = SkillBuckets::default();
    for token in tokens {
        let skill = canonical_skill(token.as_ref());
        match bucket_of(skill) {
            Some(bucket) => buckets.push_unique(bucket, skill),
            None if !is_noise(skill) => buckets.push_unique(SkillBucket::Other, skill),
            None => {}
        }
    }
    buckets
}

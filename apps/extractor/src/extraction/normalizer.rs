//! Collapses multi-word technology phrases into single tokens so the
//! tokenizer sees them as atomic skills.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Phrase pattern and its canonical single-token replacement, applied in order.
    static ref PHRASES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\bgithub\s+actions\b").unwrap(), "github-actions"),
        (Regex::new(r"(?i)\bgitlab\s+ci\b").unwrap(), "gitlab-ci"),
        (Regex::new(r"(?i)\bci\s*/\s*cd\b").unwrap(), "ci/cd"),
    ];
}

/// Rewrites known phrases case-insensitively, leaving all other text as is.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in PHRASES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

use crate::validation::MAX_SUMMARY_WORDS;

pub const EMPTY_SUMMARY: &str = "Role summary not provided.";

/// Whitespace-collapsed text capped at `MAX_SUMMARY_WORDS` words.
///
/// The truncation marker is glued onto the last kept word (`word...`) so the
/// result never exceeds the word bound it is validated against.
pub fn summarize(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    if words.len() <= MAX_SUMMARY_WORDS {
        return words.join(" ");
    }
    let mut summary = words[..MAX_SUMMARY_WORDS].join(" ");
    summary.push_str("...");
    summary
}

//! Role title extraction: an explicit `Title:` / `Role:` / `Position:` label
//! wins, otherwise the opening line is used when it looks like a heading.

use lazy_static::lazy_static;
use regex::Regex;

pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Labeled titles are capped to this many characters.
const MAX_LABELED_TITLE_CHARS: usize = 80;
/// The opening line qualifies as a title only within (MIN, MAX) characters.
const MIN_HEADING_CHARS: usize = 4;
const MAX_HEADING_CHARS: usize = 120;

lazy_static! {
    static ref LABELED_TITLE: Regex = Regex::new(r"(?i)(?:title|role|position)\s*:\s*(.+)").unwrap();
}

/// Returns a non-empty, trimmed title. Never fails.
pub fn extract_title(text: &str) -> String {
    if let Some(title) = labeled_title(text) {
        return title;
    }

    // Leading blank lines are common in pasted descriptions.
    let heading = text.trim_start().lines().next().unwrap_or("").trim();
    let len = heading.chars().count();
    if len > MIN_HEADING_CHARS && len < MAX_HEADING_CHARS {
        heading.to_string()
    } else {
        UNKNOWN_TITLE.to_string()
    }
}

fn labeled_title(text: &str) -> Option<String> {
    let captured = LABELED_TITLE.captures(text)?.get(1)?.as_str().trim();
    let capped: String = captured.chars().take(MAX_LABELED_TITLE_CHARS).collect();
    let capped = capped.trim_end();
    if capped.is_empty() {
        None
    } else {
        Some(capped.to_string())
    }
}

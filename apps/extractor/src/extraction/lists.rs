//! Must-have / nice-to-have list parsing.
//!
//! A single pass over the lines: a header line switches the active section,
//! bullet lines are collected into whichever section is active. Plain lines
//! are skipped without leaving the section, so a header can cover several
//! paragraphs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MUST_HEADER: Regex = Regex::new(r"(?i)must[-\s]?have").unwrap();
    static ref NICE_HEADER: Regex = Regex::new(r"(?i)nice[-\s]?to[-\s]?have|bonus").unwrap();
    static ref BULLET: Regex = Regex::new(r"^[-*•]\s*(.+)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    MustHave,
    NiceToHave,
}

/// Items found under the two section kinds, in source order with raw casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementLists {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
}

pub fn parse_lists(text: &str) -> RequirementLists {
    let (_, lists) = text.lines().map(str::trim).fold(
        (Section::None, RequirementLists::default()),
        |(section, mut lists), line| {
            if MUST_HEADER.is_match(line) {
                return (Section::MustHave, lists);
            }
            if NICE_HEADER.is_match(line) {
                return (Section::NiceToHave, lists);
            }
            if let Some(item) = bullet_item(line) {
                match section {
                    Section::MustHave => lists.must_have.push(item),
                    Section::NiceToHave => lists.nice_to_have.push(item),
                    Section::None => {}
                }
            }
            (section, lists)
        },
    );
    lists
}

fn bullet_item(line: &str) -> Option<String> {
    let item = BULLET.captures(line)?.get(1)?.as_str().trim();
    (!item.is_empty()).then(|| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_items_under_headers() {
        let text = "Must-have\n- React.js\n- TypeScript\n\nNice-to-have\n* Kubernetes\n• AWS\n";
        let lists = parse_lists(text);
        assert_eq!(lists.must_have, vec!["React.js", "TypeScript"]);
        assert_eq!(lists.nice_to_have, vec!["Kubernetes", "AWS"]);
    }

    #[test]
    fn test_bullets_before_any_header_are_ignored() {
        let text = "- Free snacks\nMust have:\n- Go";
        let lists = parse_lists(text);
        assert_eq!(lists.must_have, vec!["Go"]);
        assert!(lists.nice_to_have.is_empty());
    }

    #[test]
    fn test_plain_lines_do_not_reset_section() {
        let text = "Must have\nWe expect the following.\n\n- Rust\nMore prose here.\n- Tokio";
        assert_eq!(parse_lists(text).must_have, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_header_variants() {
        for header in ["MUST HAVE", "musthave", "Must-have skills:"] {
            let lists = parse_lists(&format!("{header}\n- SQL"));
            assert_eq!(lists.must_have, vec!["SQL"], "header {header:?}");
        }
        for header in ["Nice to have", "nice-to-have", "Bonus points"] {
            let lists = parse_lists(&format!("{header}\n- Helm"));
            assert_eq!(lists.nice_to_have, vec!["Helm"], "header {header:?}");
        }
    }

    #[test]
    fn test_header_lines_are_consumed_even_when_bulleted() {
        let text = "Nice to have\n- bonus: conference budget\n- Terraform";
        let lists = parse_lists(text);
        assert_eq!(lists.nice_to_have, vec!["Terraform"]);
    }

    #[test]
    fn test_indented_bullets_and_crlf() {
        let text = "Must-have\r\n    -   Docker  \r\n\t* PostgreSQL\r\n";
        assert_eq!(parse_lists(text).must_have, vec!["Docker", "PostgreSQL"]);
    }

    #[test]
    fn test_bare_bullet_marker_is_skipped() {
        let text = "Must-have\n-\n- \n- Kafka";
        assert_eq!(parse_lists(text).must_have, vec!["Kafka"]);
    }

    #[test]
    fn test_no_headers_yields_empty_lists() {
        let lists = parse_lists("Just a paragraph.\n- a stray bullet");
        assert_eq!(lists, RequirementLists::default());
    }
}

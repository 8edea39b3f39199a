// Prompt constants for skill matrix extraction through a model backend.

/// System instruction describing the exact JSON shape to return.
pub const SKILL_MATRIX_SYSTEM: &str = r#"Return STRICT JSON only, matching this TypeScript shape exactly (no extra fields):
{
  "title": string,
  "seniority": "junior"|"mid"|"senior"|"lead"|"unknown",
  "skills": {
    "frontend": string[],
    "backend": string[],
    "devops": string[],
    "web3": string[],
    "other": string[]
  },
  "mustHave": string[],
  "niceToHave": string[],
  "salary"?: { "currency": "USD"|"EUR"|"PLN"|"GBP", "min"?: number, "max"?: number },
  "summary": string
}
"web3" must include EVM terms if present. "summary" <= 60 words.
Salary bounds are positive whole numbers and "min" must not exceed "max".
Do NOT use markdown code fences. Only output the JSON, no prose."#;

/// Validation issues embedded in a repair request.
pub const MAX_REPAIR_ISSUES: usize = 5;

/// Repair request: the validation hint followed by the rejected output.
pub fn repair_prompt(issues: &str, previous: &str) -> String {
    format!(
        "Fix this to match the schema strictly and return JSON only: validation errors: {issues}\n\n{previous}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_prompt_embeds_issues_and_previous_output() {
        let prompt = repair_prompt("title: must not be empty", "{\"title\": \"\"}");
        assert!(prompt.contains("validation errors: title: must not be empty"));
        assert!(prompt.ends_with("\n\n{\"title\": \"\"}"));
    }

    #[test]
    fn test_repair_prompt_keeps_placeholder_text_in_issues() {
        let prompt = repair_prompt("skills.other.1: duplicate entry '{previous}'", "{}");
        assert!(prompt.contains("duplicate entry '{previous}'"));
        assert_eq!(prompt.matches("{}").count(), 1);
        assert!(prompt.ends_with("\n\n{}"));
    }
}

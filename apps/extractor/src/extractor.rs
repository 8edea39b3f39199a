//! Skill matrix extraction with an optional model backend.
//!
//! Flow: model answer → validate → (one repair round-trip) → validate →
//!       deterministic fallback.
//!
//! The returned matrix is always schema-valid. Backend failures never reach
//! the caller; they are logged and the deterministic pipeline answers instead.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::extraction::fallback_extract;
use crate::model::prompts::{repair_prompt, MAX_REPAIR_ISSUES, SKILL_MATRIX_SYSTEM};
use crate::model::{strip_json_fences, BackendError, ModelBackend};
use crate::models::skill_matrix::SkillMatrix;
use crate::validation::{parse_skill_matrix, ValidationError};

/// Which producer answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Model,
    RepairedModel,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub matrix: SkillMatrix,
    pub source: ExtractionSource,
}

/// Entry point for callers. Without a backend it is a thin async wrapper
/// over `fallback_extract`.
#[derive(Clone, Default)]
pub struct SkillMatrixExtractor {
    backend: Option<Arc<dyn ModelBackend>>,
}

impl SkillMatrixExtractor {
    pub fn deterministic() -> Self {
        Self { backend: None }
    }

    pub fn with_backend(backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn extract(&self, jd_text: &str) -> Extraction {
        if let Some(backend) = &self.backend {
            if let Some(extraction) = extract_with_model(backend.as_ref(), jd_text).await {
                return extraction;
            }
        }

        Extraction {
            matrix: fallback_extract(jd_text),
            source: ExtractionSource::Fallback,
        }
    }
}

/// `None` means the model path gave up and the caller should fall back.
async fn extract_with_model(backend: &dyn ModelBackend, jd_text: &str) -> Option<Extraction> {
    let first = match request(backend, jd_text).await {
        Ok(text) => text,
        Err(e) => {
            warn!("{} extraction failed, using fallback: {e}", backend.name());
            return None;
        }
    };

    let issues = match parse_reply(&first) {
        Ok(matrix) => {
            info!("{} extraction accepted", backend.name());
            return Some(Extraction {
                matrix,
                source: ExtractionSource::Model,
            });
        }
        Err(e) => e,
    };

    let hint = issues.hint(MAX_REPAIR_ISSUES);
    warn!(
        "{} output failed validation ({} issues), requesting repair: {hint}",
        backend.name(),
        issues.issues.len()
    );

    let repaired = match request(backend, &repair_prompt(&hint, &first)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("{} repair request failed, using fallback: {e}", backend.name());
            return None;
        }
    };

    match parse_reply(&repaired) {
        Ok(matrix) => {
            info!("{} extraction accepted after repair", backend.name());
            Some(Extraction {
                matrix,
                source: ExtractionSource::RepairedModel,
            })
        }
        Err(e) => {
            warn!("{} repaired output still invalid, using fallback: {e}", backend.name());
            None
        }
    }
}

async fn request(backend: &dyn ModelBackend, prompt: &str) -> Result<String, BackendError> {
    let reply = backend.complete(prompt, SKILL_MATRIX_SYSTEM).await?;
    if reply.trim().is_empty() {
        return Err(BackendError::EmptyContent);
    }
    debug!("{} replied with {} bytes", backend.name(), reply.len());
    Ok(reply)
}

fn parse_reply(reply: &str) -> Result<SkillMatrix, ValidationError> {
    parse_skill_matrix(strip_json_fences(reply))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::skill_matrix::{Currency, Seniority};

    const JD: &str = "Senior Solidity Engineer\nMust-have\n- Solidity\nSalary: $150k-200k";

    const VALID_REPLY: &str = r#"{
        "title": "Senior Solidity Engineer",
        "seniority": "senior",
        "skills": {"frontend": [], "backend": [], "devops": [], "web3": ["solidity", "evm"], "other": []},
        "mustHave": ["Solidity"],
        "niceToHave": [],
        "salary": {"currency": "USD", "min": 150000, "max": 200000},
        "summary": "Smart contract engineering role."
    }"#;

    const INVALID_REPLY: &str = r#"{
        "title": "",
        "seniority": "senior",
        "skills": {"frontend": [], "backend": [], "devops": [], "web3": [], "other": []},
        "mustHave": [],
        "niceToHave": [],
        "salary": {"currency": "USD", "min": 200000, "max": 150000},
        "summary": "x"
    }"#;

    /// Replays canned replies in order and records every prompt it receives.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String, BackendError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, BackendError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str, system: &str) -> Result<String, BackendError> {
            assert_eq!(system, SKILL_MATRIX_SYSTEM);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(BackendError::Unavailable("script exhausted".to_string())))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_no_backend_uses_fallback() {
        let extractor = SkillMatrixExtractor::deterministic();
        assert!(!extractor.has_backend());
        let out = extractor.extract(JD).await;
        assert_eq!(out.source, ExtractionSource::Fallback);
        assert_eq!(out.matrix, fallback_extract(JD));
    }

    #[tokio::test]
    async fn test_valid_model_reply_is_accepted() {
        let backend = ScriptedBackend::new(vec![Ok(VALID_REPLY.to_string())]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::Model);
        assert_eq!(out.matrix.skills.web3, vec!["solidity", "evm"]);
        assert_eq!(backend.prompts(), vec![JD.to_string()]);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_accepted() {
        let fenced = format!("```json\n{VALID_REPLY}\n```");
        let backend = ScriptedBackend::new(vec![Ok(fenced)]);
        let out = SkillMatrixExtractor::with_backend(backend).extract(JD).await;
        assert_eq!(out.source, ExtractionSource::Model);
        assert_eq!(out.matrix.seniority, Seniority::Senior);
    }

    #[tokio::test]
    async fn test_invalid_reply_is_repaired_once() {
        let backend = ScriptedBackend::new(vec![
            Ok(INVALID_REPLY.to_string()),
            Ok(VALID_REPLY.to_string()),
        ]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::RepairedModel);
        assert_eq!(out.matrix.salary.unwrap().currency, Currency::Usd);

        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("title: must not be empty"));
        assert!(prompts[1].contains("salary.min cannot be greater than salary.max"));
        assert!(
            prompts[1].ends_with(INVALID_REPLY),
            "repair prompt must carry the rejected output"
        );
    }

    #[tokio::test]
    async fn test_skill_in_several_buckets_triggers_repair() {
        let overlapping = VALID_REPLY.replace(r#""other": []"#, r#""other": ["solidity"]"#);
        let backend = ScriptedBackend::new(vec![Ok(overlapping), Ok(VALID_REPLY.to_string())]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::RepairedModel);
        assert!(out.matrix.skills.other.is_empty());
        assert!(backend.prompts()[1].contains("skills.other.0: 'solidity' already listed in web3"));
    }

    #[tokio::test]
    async fn test_invalid_twice_falls_back() {
        let backend = ScriptedBackend::new(vec![
            Ok(INVALID_REPLY.to_string()),
            Ok("not json at all".to_string()),
            Ok(VALID_REPLY.to_string()),
        ]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::Fallback);
        assert_eq!(out.matrix, fallback_extract(JD));
        assert_eq!(backend.prompts().len(), 2, "at most one repair round-trip");
    }

    #[tokio::test]
    async fn test_backend_error_falls_back_without_repair() {
        let backend = ScriptedBackend::new(vec![Err(BackendError::Api {
            status: 500,
            message: "boom".to_string(),
        })]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::Fallback);
        assert_eq!(backend.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back_without_repair() {
        let backend = ScriptedBackend::new(vec![Ok("   ".to_string())]);
        let out = SkillMatrixExtractor::with_backend(backend.clone())
            .extract(JD)
            .await;
        assert_eq!(out.source, ExtractionSource::Fallback);
        assert_eq!(backend.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_repair_request_error_falls_back() {
        let backend = ScriptedBackend::new(vec![
            Ok(INVALID_REPLY.to_string()),
            Err(BackendError::Timeout),
        ]);
        let out = SkillMatrixExtractor::with_backend(backend).extract(JD).await;
        assert_eq!(out.source, ExtractionSource::Fallback);
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&ExtractionSource::RepairedModel).unwrap();
        assert_eq!(json, "\"repaired_model\"");
    }
}

/// Model backend — the seam through which an alternate producer (a remote
/// language model) supplies skill matrix JSON.
///
/// No network client lives in this crate. Embedding applications implement
/// `ModelBackend` over their transport of choice; `SkillMatrixExtractor`
/// owns the repair round-trip and the fallback to the deterministic pipeline.
use async_trait::async_trait;
use thiserror::Error;

pub mod prompts;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,

    #[error("model backend unavailable: {0}")]
    Unavailable(String),

    #[error("model request timed out")]
    Timeout,
}

/// A text-completion backend. Implementations own their timeout and retry
/// policy; callers treat any error as "no answer".
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Sends one prompt under a system instruction and returns the raw text reply.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, BackendError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "model"
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

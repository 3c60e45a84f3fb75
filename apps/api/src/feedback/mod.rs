//! Feedback Composer — turns analysis output into recruiter-style feedback.
//!
//! Two strategies behind one capability trait: a remote generative-text call
//! (when a credential is configured) and a deterministic local template. The
//! composer itself never fails; any remote error is logged and absorbed by
//! falling back to the local strategy.

pub mod local;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::feedback::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM, MAX_RESUME_CHARS};
use crate::llm_client::{LlmClient, LlmError};

/// Inputs shared by both feedback strategies.
#[derive(Debug)]
pub struct FeedbackRequest<'a> {
    pub resume_text: &'a str,
    pub job_title: &'a str,
    pub missing_sections: &'a [String],
    pub missing_keywords: &'a [String],
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),
}

/// A feedback generation strategy. Implement this to swap backends without
/// touching the composer or handlers; tests substitute fakes.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn generate(&self, request: &FeedbackRequest<'_>) -> Result<String, FeedbackError>;
}

/// Which strategy produced the feedback text, surfaced in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSource {
    Remote,
    Fallback,
}

/// Composed feedback plus provenance. `notice` carries the soft message shown
/// when the composer ran in fallback mode; it is never an error.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedFeedback {
    pub text: String,
    pub source: FeedbackSource,
    pub notice: Option<String>,
}

/// Remote strategy: a structured prompt against the LLM client.
pub struct LlmFeedbackGenerator {
    llm: LlmClient,
}

impl LlmFeedbackGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FeedbackGenerator for LlmFeedbackGenerator {
    async fn generate(&self, request: &FeedbackRequest<'_>) -> Result<String, FeedbackError> {
        let resume_excerpt = truncate_chars(request.resume_text, MAX_RESUME_CHARS);
        let prompt = FEEDBACK_PROMPT_TEMPLATE
            .replace("{job_title}", request.job_title)
            .replace("{resume_text}", resume_excerpt)
            .replace("{missing_sections}", &request.missing_sections.join(", "))
            .replace("{missing_keywords}", &request.missing_keywords.join(", "));

        let text = self.llm.call(&prompt, FEEDBACK_SYSTEM).await?;
        Ok(text)
    }
}

/// Chooses between the remote strategy and the local fallback.
///
/// Built once at startup; `remote` is `None` when no credential is
/// configured. Cheap to clone into request handlers.
#[derive(Clone)]
pub struct FeedbackComposer {
    remote: Option<Arc<dyn FeedbackGenerator>>,
}

impl FeedbackComposer {
    pub fn new(remote: Option<Arc<dyn FeedbackGenerator>>) -> Self {
        Self { remote }
    }

    /// Composes feedback for one review. Infallible: a remote failure is
    /// logged at warn level and the local strategy takes over.
    pub async fn compose(&self, request: &FeedbackRequest<'_>) -> ComposedFeedback {
        if let Some(remote) = &self.remote {
            match remote.generate(request).await {
                Ok(text) => {
                    return ComposedFeedback {
                        text: text.trim().to_string(),
                        source: FeedbackSource::Remote,
                        notice: None,
                    }
                }
                Err(e) => {
                    warn!("Remote feedback unavailable, falling back to local strategy: {e}");
                }
            }
        }

        let notice = if self.remote.is_some() {
            "AI feedback is temporarily unavailable; showing basic suggestions."
        } else {
            "Feedback is running in fallback mode; no AI credential is configured."
        };

        ComposedFeedback {
            text: local::compose_local(request),
            source: FeedbackSource::Fallback,
            notice: Some(notice.to_string()),
        }
    }
}

/// Truncates on a char boundary so multi-byte resumes cannot split a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl FeedbackGenerator for CannedGenerator {
        async fn generate(&self, _request: &FeedbackRequest<'_>) -> Result<String, FeedbackError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl FeedbackGenerator for FailingGenerator {
        async fn generate(&self, _request: &FeedbackRequest<'_>) -> Result<String, FeedbackError> {
            Err(FeedbackError::Llm(LlmError::EmptyContent))
        }
    }

    fn request<'a>(
        missing_sections: &'a [String],
        missing_keywords: &'a [String],
    ) -> FeedbackRequest<'a> {
        FeedbackRequest {
            resume_text: "skills and experience",
            job_title: "Data Scientist",
            missing_sections,
            missing_keywords,
        }
    }

    #[tokio::test]
    async fn test_no_remote_uses_fallback_with_notice() {
        let composer = FeedbackComposer::new(None);
        let composed = composer.compose(&request(&[], &[])).await;
        assert_eq!(composed.source, FeedbackSource::Fallback);
        assert!(composed.notice.is_some());
        assert!(!composed.text.is_empty());
    }

    #[tokio::test]
    async fn test_remote_success_returns_trimmed_text() {
        let composer = FeedbackComposer::new(Some(Arc::new(CannedGenerator(
            "  Looks strong overall.  ",
        ))));
        let composed = composer.compose(&request(&[], &[])).await;
        assert_eq!(composed.source, FeedbackSource::Remote);
        assert_eq!(composed.text, "Looks strong overall.");
        assert!(composed.notice.is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_without_error() {
        let composer = FeedbackComposer::new(Some(Arc::new(FailingGenerator)));
        let composed = composer.compose(&request(&[], &[])).await;
        assert_eq!(composed.source, FeedbackSource::Fallback);
        assert!(composed.notice.is_some());
        assert!(!composed.text.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_is_deterministic() {
        let composer = FeedbackComposer::new(None);
        let missing = vec!["Projects".to_string()];
        let a = composer.compose(&request(&missing, &[])).await;
        let b = composer.compose(&request(&missing, &[])).await;
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}

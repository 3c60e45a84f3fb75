//! Review pipeline: extract → analyze → compose → report.
//!
//! Each review is request-scoped and sequential; nothing persists across
//! invocations.

pub mod analyzer;
pub mod handlers;
pub mod keywords;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::feedback::{ComposedFeedback, FeedbackRequest};
use crate::report::build_report;
use crate::review::analyzer::{analyze, AnalysisResult};
use crate::state::AppState;

/// Everything one review produces. Handlers shape this into JSON or a
/// downloadable report.
pub struct ReviewOutcome {
    pub job_title: String,
    pub analysis: AnalysisResult,
    pub feedback: ComposedFeedback,
    pub report: String,
}

/// Runs the full pipeline for one uploaded resume.
///
/// Extraction failure short-circuits: analysis never runs on an unreadable
/// document. Feedback composition cannot fail (remote errors fall back to the
/// local strategy inside the composer).
pub async fn run_review(
    state: &AppState,
    file: Vec<u8>,
    job_title: String,
) -> Result<ReviewOutcome, AppError> {
    let text = extract_text(file).await?;
    let analysis = analyze(&text, &job_title);

    let feedback = state
        .composer
        .compose(&FeedbackRequest {
            resume_text: &text,
            job_title: &job_title,
            missing_sections: &analysis.missing_sections,
            missing_keywords: &analysis.missing_keywords,
        })
        .await;

    let report = build_report(&job_title, &analysis, &feedback.text);

    Ok(ReviewOutcome {
        job_title,
        analysis,
        feedback,
        report,
    })
}

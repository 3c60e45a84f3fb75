//! Axum route handlers for the Review API.

use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feedback::FeedbackSource;
use crate::report::pdf::render_pdf;
use crate::review::analyzer::AnalysisResult;
use crate::review::run_review;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub job_title: String,
    pub analysis: AnalysisResult,
    pub feedback: String,
    pub feedback_source: FeedbackSource,
    /// Soft notice when feedback ran in fallback mode; never an error.
    pub notice: Option<String>,
    pub report: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Txt,
    Pdf,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reviews
///
/// Multipart form: `file` (the PDF resume, required) and `job_title` (free
/// text, optional; unknown or empty titles use the default keyword list).
/// Returns the analysis, feedback, and the plain-text report in one JSON body.
pub async fn handle_create_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    let (file, job_title) = read_submission(multipart).await?;
    let outcome = run_review(&state, file, job_title).await?;

    Ok(Json(ReviewResponse {
        job_title: outcome.job_title,
        analysis: outcome.analysis,
        feedback: outcome.feedback.text,
        feedback_source: outcome.feedback.source,
        notice: outcome.feedback.notice,
        report: outcome.report,
    }))
}

/// POST /api/v1/reviews/report?format=txt|pdf
///
/// Same multipart input as the review endpoint, but returns the report as a
/// download. With no persistence, the pipeline re-runs per request.
pub async fn handle_review_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (file, job_title) = read_submission(multipart).await?;
    let outcome = run_review(&state, file, job_title).await?;

    let (content_type, filename, body) = match query.format {
        ReportFormat::Txt => (
            "text/plain; charset=utf-8",
            "resume_review_report.txt",
            outcome.report.into_bytes(),
        ),
        ReportFormat::Pdf => (
            "application/pdf",
            "resume_review_report.pdf",
            render_pdf(&outcome.report)?,
        ),
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Pulls the resume bytes and job title out of the multipart form.
/// A missing file is a validation error; a missing job title is not (it
/// resolves to the default keyword list downstream).
async fn read_submission(mut multipart: Multipart) -> Result<(Vec<u8>, String), AppError> {
    let mut file: Option<Vec<u8>> = None;
    let mut job_title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read file field: {e}")))?;
                file = Some(bytes.to_vec());
            }
            Some("job_title") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read job_title field: {e}"))
                })?;
                job_title = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;
    if file.is_empty() {
        return Err(AppError::Validation("'file' field is empty".to_string()));
    }

    Ok((file, job_title.unwrap_or_default()))
}

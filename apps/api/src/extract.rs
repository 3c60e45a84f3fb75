//! Text Extractor — converts an uploaded PDF byte stream into plain text.
//!
//! Contract: page texts in page order, newline-separated, trimmed. A page
//! with no extractable text (e.g. a scanned image) contributes nothing and is
//! not an error, but a document that yields no text overall is reported the
//! same way as a parse failure: callers must treat that as "extraction
//! failed", never as an empty resume.

use anyhow::anyhow;

use crate::errors::AppError;

/// Extracts plain text from PDF bytes.
///
/// `pdf-extract` walks pages synchronously, so the parse runs on a blocking
/// task. Parse errors and overall-empty output both map to
/// [`AppError::DocumentUnreadable`]; analysis must not run on either.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))?
        .map_err(|e| AppError::DocumentUnreadable(format!("could not parse PDF: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::DocumentUnreadable(
            "document yielded no extractable text".to_string(),
        ));
    }

    Ok(text)
}

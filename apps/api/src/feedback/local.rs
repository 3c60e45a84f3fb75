//! Local feedback strategy: deterministic, dependency-free rule-based
//! composition. Always available; same inputs always produce the same text.

use crate::feedback::FeedbackRequest;
use crate::review::analyzer::has_section;

/// Strengths shown at most.
const MAX_STRENGTHS: usize = 3;
/// Improvements shown at most, sections and keywords combined.
const MAX_IMPROVEMENTS: usize = 5;
/// Missing keywords folded into improvement suggestions.
const MAX_KEYWORD_SUGGESTIONS: usize = 3;
/// Word count above which a resume counts as substantial.
const SUBSTANTIAL_WORD_COUNT: usize = 200;

pub const VERDICT_READY: &str = "Ready to apply.";
pub const VERDICT_NEEDS_WORK: &str = "Needs improvements before applying.";

/// Composes the four-part fallback feedback: opening, strengths,
/// improvements, verdict.
pub fn compose_local(request: &FeedbackRequest<'_>) -> String {
    let mut strengths = Vec::new();
    if has_section(request.resume_text, "experience") {
        strengths.push("Includes an experience section, showing practical background.");
    }
    if has_section(request.resume_text, "skills") {
        strengths.push("Has a skills section, good for quick scanning.");
    }
    if request.resume_text.split_whitespace().count() > SUBSTANTIAL_WORD_COUNT {
        strengths.push("Contains substantial content, likely detailed enough.");
    }

    let mut improvements: Vec<String> = request
        .missing_sections
        .iter()
        .map(|s| format!("Add a {s} section with concise, bullet-pointed content."))
        .collect();
    for keyword in request.missing_keywords.iter().take(MAX_KEYWORD_SUGGESTIONS) {
        improvements.push(format!(
            "Include the keyword '{keyword}' in an achievements or skills bullet."
        ));
    }

    let verdict = if request.missing_sections.is_empty() && request.missing_keywords.is_empty() {
        VERDICT_READY
    } else {
        VERDICT_NEEDS_WORK
    };

    let mut text = String::from("**Opening:**\nYour resume has a solid foundation.\n\n**Strengths:**\n");
    for strength in strengths.iter().take(MAX_STRENGTHS) {
        text.push_str(&format!("- {strength}\n"));
    }
    text.push_str("\n**Improvements:**\n");
    for improvement in improvements.iter().take(MAX_IMPROVEMENTS) {
        text.push_str(&format!("- {improvement}\n"));
    }
    text.push_str(&format!("\n**Verdict:** {verdict}"));
    text
}

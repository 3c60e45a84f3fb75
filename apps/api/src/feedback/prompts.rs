// Prompt constants for the remote feedback strategy.
// Placeholders are filled with str::replace before the call.

/// Cap on resume characters embedded in the prompt. Keeps token usage bounded
/// for unusually long documents.
pub const MAX_RESUME_CHARS: usize = 12_000;

pub const FEEDBACK_SYSTEM: &str = "You are an expert recruiter and career coach. \
    Respond with plain text only, no markdown code fences.";

pub const FEEDBACK_PROMPT_TEMPLATE: &str = "\
Provide a concise, structured review of the following resume for the job title: {job_title}.

Resume text:
{resume_text}

Missing sections: {missing_sections}
Missing keywords: {missing_keywords}

Respond with:
- Short encouraging opening (1-2 lines)
- 3 strengths (bullet points)
- 3 actionable improvements (bullet points, with sample wording or examples)
- One-sentence final verdict (ready / needs improvement / major overhaul)";

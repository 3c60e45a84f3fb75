//! Resume Analyzer — pure lexical analysis of extracted resume text.
//!
//! Section detection uses case-insensitive whole-word matching; keyword
//! detection uses plain lowercase substring matching. The asymmetry is
//! deliberate and load-bearing: keywords like "Node.js" appear inside
//! compound terms, while "skillset" must not count as a skills section.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::review::keywords::keywords_for;

/// Canonical resume sections, in fixed reporting order.
pub const SECTION_CATALOG: [&str; 6] = [
    "skills",
    "education",
    "experience",
    "projects",
    "certifications",
    "contact",
];

/// Section coverage carries 70% of the score, keyword coverage 30%.
const SECTION_WEIGHT: f64 = 70.0;
const KEYWORD_WEIGHT: f64 = 30.0;

/// One compiled word-boundary pattern per catalog section.
static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SECTION_CATALOG
        .iter()
        .map(|section| {
            let pattern = Regex::new(&format!(r"(?i)\b{section}\b"))
                .expect("section patterns are valid regex");
            (*section, pattern)
        })
        .collect()
});

/// Result of analyzing one resume against one job title.
///
/// `found_sections` and `missing_sections` partition [`SECTION_CATALOG`]
/// exactly, in catalog order. `missing_keywords` is a subsequence of the
/// keyword list selected for the job title. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
    /// Composite coverage score in [0, 100].
    pub score: f64,
    pub missing_keywords: Vec<String>,
}

/// Analyzes resume text against the expectations for a job title.
///
/// Pure function of its inputs: no I/O, deterministic, and safe to call from
/// any number of requests concurrently.
pub fn analyze(text: &str, job_title: &str) -> AnalysisResult {
    let mut found_sections = Vec::new();
    let mut missing_sections = Vec::new();

    for (section, pattern) in SECTION_PATTERNS.iter() {
        if pattern.is_match(text) {
            found_sections.push(capitalize(section));
        } else {
            missing_sections.push(capitalize(section));
        }
    }

    let keywords = keywords_for(job_title);
    let text_lower = text.to_lowercase();
    let missing_keywords: Vec<String> = keywords
        .iter()
        .filter(|kw| !text_lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect();

    let section_score =
        (found_sections.len() as f64 / SECTION_CATALOG.len() as f64) * SECTION_WEIGHT;
    let kw_covered = if keywords.is_empty() {
        1.0
    } else {
        (keywords.len() - missing_keywords.len()) as f64 / keywords.len() as f64
    };
    let score = (section_score + kw_covered * KEYWORD_WEIGHT).clamp(0.0, 100.0);

    AnalysisResult {
        found_sections,
        missing_sections,
        score,
        missing_keywords,
    }
}

/// Whole-word, case-insensitive presence check for a catalog section.
/// Shared with the local feedback strategy so both use identical semantics.
pub fn has_section(text: &str, section: &str) -> bool {
    SECTION_PATTERNS
        .iter()
        .any(|(name, pattern)| *name == section && pattern.is_match(text))
}

/// Display form of a section name: first letter uppercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::keywords::DEFAULT_KEYWORDS;

    // Resume fixture: three sections present (case-varied), none of the data
    // scientist keywords.
    const PARTIAL_RESUME: &str = "\
        SKILLS: gardening, woodworking\n\
        Education: BSc Horticulture\n\
        Work experience: ten years of landscaping\n";

    const FULL_WEB_RESUME: &str = "\
        Contact: dev@example.com\n\
        Skills: HTML, CSS, JavaScript, React, Node.js\n\
        Experience: frontend work\n\
        Education: BSc CS\n\
        Projects: portfolio site\n\
        Certifications: AWS CCP\n";

    #[test]
    fn test_partial_resume_data_scientist_scenario() {
        let result = analyze(PARTIAL_RESUME, "Data Scientist");
        assert_eq!(result.found_sections, vec!["Skills", "Education", "Experience"]);
        assert_eq!(
            result.missing_sections,
            vec!["Projects", "Certifications", "Contact"]
        );
        assert_eq!(result.missing_keywords.len(), 5);
        // (3/6) * 70 + 0 * 30
        assert_eq!(result.score, 35.0);
    }

    #[test]
    fn test_full_resume_web_developer_scores_100() {
        let result = analyze(FULL_WEB_RESUME, "Web Developer");
        assert!(result.missing_sections.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let result = analyze("", "Data Scientist");
        assert!(result.found_sections.is_empty());
        assert_eq!(result.missing_sections.len(), SECTION_CATALOG.len());
        assert_eq!(result.missing_keywords.len(), 5);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_sections_partition_catalog() {
        for text in ["", PARTIAL_RESUME, FULL_WEB_RESUME, "skills skills skills"] {
            let result = analyze(text, "Web Developer");
            assert_eq!(
                result.found_sections.len() + result.missing_sections.len(),
                SECTION_CATALOG.len()
            );
            for found in &result.found_sections {
                assert!(!result.missing_sections.contains(found));
            }
        }
    }

    #[test]
    fn test_section_match_requires_word_boundary() {
        // "skillset" contains "skills" as a substring but not as a word.
        let result = analyze("My skillset is broad", "anything");
        assert!(!result.found_sections.contains(&"Skills".to_string()));
    }

    #[test]
    fn test_keyword_match_is_plain_substring() {
        // "Node.js" inside a compound phrase still counts.
        let result = analyze("Built node.js-based services", "Web Developer");
        assert!(!result.missing_keywords.contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_unknown_and_empty_titles_use_default_keywords() {
        for title in ["Chief Vibes Officer", ""] {
            let result = analyze("no relevant words here", title);
            assert_eq!(
                result.missing_keywords,
                DEFAULT_KEYWORDS
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let a = analyze(PARTIAL_RESUME, "Data Scientist");
        let b = analyze(PARTIAL_RESUME, "Data Scientist");
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_monotone_in_found_sections() {
        // Same keyword coverage (zero), increasing section coverage.
        let none = analyze("nothing relevant", "Data Scientist");
        let one = analyze("skills", "Data Scientist");
        let two = analyze("skills and education", "Data Scientist");
        assert!(none.score <= one.score);
        assert!(one.score <= two.score);
    }

    #[test]
    fn test_score_monotone_in_keyword_coverage() {
        // Same sections (none), increasing keyword coverage.
        let zero = analyze("nothing relevant", "Data Scientist");
        let some = analyze("python and pandas", "Data Scientist");
        let all = analyze(
            "python machine learning data analysis pandas sql",
            "Data Scientist",
        );
        assert!(zero.score <= some.score);
        assert!(some.score <= all.score);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        for text in ["", "skills", FULL_WEB_RESUME] {
            for title in ["", "Web Developer", "nonsense"] {
                let score = analyze(text, title).score;
                assert!((0.0..=100.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_has_section_matches_analyze() {
        assert!(has_section(PARTIAL_RESUME, "experience"));
        assert!(has_section(PARTIAL_RESUME, "skills"));
        assert!(!has_section(PARTIAL_RESUME, "projects"));
    }

    #[test]
    fn test_capitalize_display_form() {
        assert_eq!(capitalize("certifications"), "Certifications");
        assert_eq!(capitalize(""), "");
    }
}

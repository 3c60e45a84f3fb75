//! Report assembly: the plain-text review report and its optional PDF export.

pub mod pdf;

use crate::review::analyzer::AnalysisResult;

const REPORT_HEADER: &str = "Resume Reviewer - Report";

/// Builds the downloadable plain-text report from one review.
pub fn build_report(job_title: &str, analysis: &AnalysisResult, feedback: &str) -> String {
    let mut report = String::new();
    report.push_str(REPORT_HEADER);
    report.push('\n');
    report.push_str(&format!("Job Title: {job_title}\n"));
    report.push_str(&format!("Score: {:.1}%\n\n", analysis.score));

    report.push_str("Found Sections:\n");
    for section in &analysis.found_sections {
        report.push_str(&format!("- {section}\n"));
    }

    report.push_str("\nMissing Sections:\n");
    for section in &analysis.missing_sections {
        report.push_str(&format!("- {section}\n"));
    }

    report.push_str("\nMissing Keywords:\n");
    for keyword in &analysis.missing_keywords {
        report.push_str(&format!("- {keyword}\n"));
    }

    report.push_str("\nFeedback:\n");
    report.push_str(feedback);
    report.push('\n');

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            found_sections: vec!["Skills".to_string(), "Experience".to_string()],
            missing_sections: vec!["Projects".to_string()],
            score: 35.0,
            missing_keywords: vec!["Python".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn test_report_contains_all_fields() {
        let report = build_report("Data Scientist", &sample_analysis(), "Solid foundation.");
        assert!(report.contains("Resume Reviewer - Report"));
        assert!(report.contains("Job Title: Data Scientist"));
        assert!(report.contains("Score: 35.0%"));
        assert!(report.contains("- Skills"));
        assert!(report.contains("- Projects"));
        assert!(report.contains("- Python"));
        assert!(report.contains("Solid foundation."));
    }

    #[test]
    fn test_score_rendered_to_one_decimal() {
        let mut analysis = sample_analysis();
        analysis.score = 76.66666666666667;
        let report = build_report("Web Developer", &analysis, "");
        assert!(report.contains("Score: 76.7%"));
    }
}

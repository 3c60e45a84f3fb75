//! Static job-title → expected-keyword table.
//!
//! Lookup is by trimmed, lowercased title. Any miss, including the empty
//! title, resolves to [`DEFAULT_KEYWORDS`].

/// Fallback keyword list for job titles with no table entry.
pub const DEFAULT_KEYWORDS: &[&str] = &["Teamwork", "Problem Solving", "Communication"];

/// Returns the expected keyword list for a job title.
pub fn keywords_for(job_title: &str) -> &'static [&'static str] {
    match job_title.trim().to_lowercase().as_str() {
        "data scientist" => &[
            "Python",
            "Machine Learning",
            "Data Analysis",
            "Pandas",
            "SQL",
        ],
        "ai engineer" => &[
            "Neural Networks",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "Computer Vision",
        ],
        "web developer" => &["HTML", "CSS", "JavaScript", "React", "Node.js"],
        "software engineer" => &["Java", "OOP", "APIs", "Agile", "System Design"],
        _ => DEFAULT_KEYWORDS,
    }
}

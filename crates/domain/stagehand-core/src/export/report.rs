use std::fmt::Write as _;

use crate::result::AnalysisResult;

/// Submission context the report header needs but the service does not echo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMeta {
    pub file_name: String,
    pub intended_emotion: String,
}

impl ReportMeta {
    pub fn new(file_name: impl Into<String>, intended_emotion: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            intended_emotion: intended_emotion.into(),
        }
    }
}

pub fn render_report(result: &AnalysisResult, meta: &ReportMeta) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Video Emotion Analysis");
    let _ = writeln!(out, "File: {}", meta.file_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Intended Emotion: {}", meta.intended_emotion.trim());
    let _ = writeln!(out, "Predicted Emotion: {}", result.predicted_label());
    let _ = writeln!(out, "Confidence: {}", result.confidence_percent());
    let _ = writeln!(out, "Match: {}", result.match_token());
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    let _ = writeln!(out, "{}", result.recommendation_text());
    out
}

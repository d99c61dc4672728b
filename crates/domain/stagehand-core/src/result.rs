use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub const NO_OUTPUT_PLACEHOLDER: &str = "No output available.";
pub const UNKNOWN_EMOTION: &str = "unknown";
pub const NO_CONFIDENCE: &str = "n/a";
pub const NO_RECOMMENDATIONS: &str = "No recommendations.";

/// Decodes an optional field, treating a value of the wrong type like a
/// missing one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Supervisor verdict reported by the script service after its rewrite loop.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewOutcome {
    pub iteration: Option<u32>,
    pub ready: Option<bool>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransformResult {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub structured_script: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub final_script: Option<String>,
    #[serde(rename = "result", default, deserialize_with = "lenient")]
    pub review: Option<ReviewOutcome>,
    #[serde(default, deserialize_with = "lenient")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub extracted_text_preview: Option<String>,
}

impl TransformResult {
    /// The script body shown and exported: structured form first, then the
    /// free-form one, then a placeholder.
    pub fn script_text(&self) -> &str {
        self.script().unwrap_or(NO_OUTPUT_PLACEHOLDER)
    }

    pub fn script(&self) -> Option<&str> {
        [&self.structured_script, &self.final_script]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

/// Recommendation payload, resolved once at decode time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<WireRecommendations>")]
pub enum Recommendations {
    #[default]
    Missing,
    Text(String),
    Structured {
        full_recommendation: String,
        key_summary: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireRecommendations {
    Text(String),
    Structured {
        full_recommendation: Option<String>,
        key_summary: Option<String>,
    },
    #[allow(dead_code)]
    Other(serde_json::Value),
}

impl From<Option<WireRecommendations>> for Recommendations {
    fn from(wire: Option<WireRecommendations>) -> Self {
        match wire {
            Some(WireRecommendations::Text(text)) => Recommendations::Text(text),
            Some(WireRecommendations::Structured {
                full_recommendation: Some(full_recommendation),
                key_summary,
            }) => Recommendations::Structured {
                full_recommendation,
                key_summary,
            },
            _ => Recommendations::Missing,
        }
    }
}

impl Recommendations {
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Recommendations::Missing => return None,
            Recommendations::Text(text) => text,
            Recommendations::Structured {
                full_recommendation,
                ..
            } => full_recommendation,
        };
        Some(text.as_str()).filter(|t| !t.trim().is_empty())
    }

    pub fn key_summary(&self) -> Option<&str> {
        match self {
            Recommendations::Structured {
                key_summary: Some(summary),
                ..
            } => Some(summary.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient")]
    pub predicted_emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_emotion: Option<String>,
    #[serde(rename = "match", default, deserialize_with = "lenient")]
    pub is_match: Option<bool>,
    #[serde(default)]
    pub recommendations: Recommendations,
    #[serde(default, deserialize_with = "lenient")]
    pub clip_duration_seconds: Option<f64>,
}

impl AnalysisResult {
    pub fn predicted_label(&self) -> &str {
        self.predicted_emotion
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNKNOWN_EMOTION)
    }

    pub fn confidence_percent(&self) -> String {
        format_confidence(self.confidence)
    }

    pub fn matched(&self) -> bool {
        self.is_match.unwrap_or(false)
    }

    pub fn match_token(&self) -> &'static str {
        if self.matched() {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn recommendation_text(&self) -> &str {
        self.recommendations.text().unwrap_or(NO_RECOMMENDATIONS)
    }
}

/// `0.8734` renders as `87.34%`.
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) if c.is_finite() => format!("{:.2}%", c * 100.0),
        _ => NO_CONFIDENCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_script_wins_over_final_script() {
        let r: TransformResult = serde_json::from_str(
            r#"{"structured_script":"STRUCTURED","final_script":"FINAL"}"#,
        )
        .unwrap();
        assert_eq!(r.script_text(), "STRUCTURED");

        let r: TransformResult =
            serde_json::from_str(r#"{"structured_script":"","final_script":"FINAL"}"#).unwrap();
        assert_eq!(r.script_text(), "FINAL");

        let r: TransformResult = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(r.script_text(), NO_OUTPUT_PLACEHOLDER);
        assert!(r.script().is_none());
    }

    #[test]
    fn review_outcome_is_read_from_result_field() {
        let r: TransformResult = serde_json::from_str(
            r#"{"status":"success","result":{"iteration":2,"ready":false,"message":"Max iterations reached without approval."},"structured_script":"x","file_path":"output/final.md"}"#,
        )
        .unwrap();
        let review = r.review.unwrap();
        assert_eq!(review.iteration, Some(2));
        assert_eq!(review.ready, Some(false));
        assert_eq!(r.file_path.as_deref(), Some("output/final.md"));
    }

    #[test]
    fn recommendations_resolve_object_and_string_forms() {
        let r: AnalysisResult = serde_json::from_str(
            r#"{"predicted_emotion":"sadness","confidence":0.5,"match":false,"recommendations":{"full_recommendation":"Try X","key_summary":"Lift"}}"#,
        )
        .unwrap();
        assert_eq!(r.recommendation_text(), "Try X");
        assert_eq!(r.recommendations.key_summary(), Some("Lift"));

        let r: AnalysisResult =
            serde_json::from_str(r#"{"match":false,"recommendations":"Slow down"}"#).unwrap();
        assert_eq!(
            r.recommendations,
            Recommendations::Text("Slow down".to_string())
        );
    }

    #[test]
    fn null_or_odd_recommendations_become_missing() {
        let r: AnalysisResult =
            serde_json::from_str(r#"{"match":true,"recommendations":null}"#).unwrap();
        assert_eq!(r.recommendations, Recommendations::Missing);
        assert_eq!(r.recommendation_text(), NO_RECOMMENDATIONS);

        let r: AnalysisResult = serde_json::from_str(r#"{"recommendations":42}"#).unwrap();
        assert_eq!(r.recommendations, Recommendations::Missing);

        let r: AnalysisResult =
            serde_json::from_str(r#"{"recommendations":{"key_summary":"only"}}"#).unwrap();
        assert_eq!(r.recommendations, Recommendations::Missing);
    }

    #[test]
    fn missing_fields_get_render_time_defaults() {
        let r: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(r.predicted_label(), UNKNOWN_EMOTION);
        assert_eq!(r.confidence_percent(), NO_CONFIDENCE);
        assert_eq!(r.match_token(), "No");
    }

    #[test]
    fn confidence_renders_two_decimals() {
        assert_eq!(format_confidence(Some(0.8734)), "87.34%");
        assert_eq!(format_confidence(Some(1.0)), "100.00%");
        assert_eq!(format_confidence(Some(0.0)), "0.00%");
        assert_eq!(format_confidence(None), "n/a");
    }
}

use serde_json::Value;
use thiserror::Error;

use crate::input::WorkflowKind;
use crate::request::RawResponse;

pub const TRANSFORM_VALIDATION_MESSAGE: &str = "Please provide script text or upload a PDF.";
pub const ANALYSIS_VALIDATION_MESSAGE: &str =
    "Please upload a video and enter your intended emotion.";
pub const TRANSFORM_UNREACHABLE_MESSAGE: &str =
    "Could not reach the script service. It may be unavailable right now; please try again later.";
pub const ANALYSIS_UNREACHABLE_MESSAGE: &str =
    "Failed to analyze video: the emotion analysis service is unreachable. Ensure it is running and public.";

/// Every way a submission can end in `Failed`. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),
    #[error("Server error: {status}{}", detail_suffix(.detail))]
    Service { status: u16, detail: Option<String> },
    #[error("{message}")]
    Transport { message: &'static str },
    #[error("The service returned an unreadable response.")]
    MalformedResult { detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionErrorKind {
    Validation,
    Service,
    Transport,
    MalformedResult,
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" {d}"),
        None => String::new(),
    }
}

impl SubmissionError {
    pub fn kind(&self) -> SubmissionErrorKind {
        match self {
            SubmissionError::Validation(_) => SubmissionErrorKind::Validation,
            SubmissionError::Service { .. } => SubmissionErrorKind::Service,
            SubmissionError::Transport { .. } => SubmissionErrorKind::Transport,
            SubmissionError::MalformedResult { .. } => SubmissionErrorKind::MalformedResult,
        }
    }

    pub fn validation(kind: WorkflowKind) -> Self {
        SubmissionError::Validation(
            match kind {
                WorkflowKind::Transformation => TRANSFORM_VALIDATION_MESSAGE,
                WorkflowKind::Analysis => ANALYSIS_VALIDATION_MESSAGE,
            }
            .to_string(),
        )
    }

    pub fn unreachable(kind: WorkflowKind) -> Self {
        SubmissionError::Transport {
            message: match kind {
                WorkflowKind::Transformation => TRANSFORM_UNREACHABLE_MESSAGE,
                WorkflowKind::Analysis => ANALYSIS_UNREACHABLE_MESSAGE,
            },
        }
    }

    /// Builds the error for a non-success response. Never fails: each step of
    /// the detail chain degrades to the next one.
    pub fn from_response(response: &RawResponse) -> Self {
        let detail = extract_detail(&response.body).or_else(|| {
            response
                .reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
        });
        SubmissionError::Service {
            status: response.status,
            detail,
        }
    }
}

/// Structured message field first, then the JSON body itself, then the raw text.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = message_field(&value) {
            return Some(message);
        }
        match value {
            Value::Null => {}
            Value::String(s) if s.trim().is_empty() => {}
            Value::String(s) => return Some(s.trim().to_string()),
            other => return Some(other.to_string()),
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn message_field(value: &Value) -> Option<String> {
    let obj = value.as_object()?;

    if let Some(detail) = obj.get("detail") {
        match detail {
            Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(o) => o.get("msg").and_then(Value::as_str).map(String::from),
                        _ => None,
                    })
                    .collect();
                if !msgs.is_empty() {
                    return Some(msgs.join("; "));
                }
            }
            _ => {}
        }
    }

    ["error", "message"].into_iter().find_map(|key| {
        obj.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn response(status: u16, reason: Option<&str>, body: &'static [u8]) -> RawResponse {
        RawResponse {
            status,
            reason: reason.map(String::from),
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn detail_field_wins() {
        let err = SubmissionError::from_response(&response(
            400,
            Some("Bad Request"),
            br#"{"detail":"No text could be extracted from the PDF."}"#,
        ));
        assert_eq!(
            err.to_string(),
            "Server error: 400 No text could be extracted from the PDF."
        );
        assert_eq!(err.kind(), SubmissionErrorKind::Service);
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let err = SubmissionError::from_response(&response(
            422,
            None,
            br#"{"detail":[{"loc":["body","genre"],"msg":"field required"},{"msg":"value is not a string"}]}"#,
        ));
        assert_eq!(
            err.to_string(),
            "Server error: 422 field required; value is not a string"
        );
    }

    #[test]
    fn error_then_message_fields() {
        let err =
            SubmissionError::from_response(&response(409, None, br#"{"error":"duplicate"}"#));
        assert_eq!(err.to_string(), "Server error: 409 duplicate");

        let err =
            SubmissionError::from_response(&response(503, None, br#"{"message":"warming up"}"#));
        assert_eq!(err.to_string(), "Server error: 503 warming up");
    }

    #[test]
    fn unrecognised_json_is_compacted() {
        let err = SubmissionError::from_response(&response(500, None, b"{ \"code\" : 7 }"));
        assert_eq!(err.to_string(), r#"Server error: 500 {"code":7}"#);
    }

    #[test]
    fn unparsable_body_falls_back_to_raw_text() {
        let err = SubmissionError::from_response(&response(
            500,
            Some("Internal Server Error"),
            b"<html>upstream exploded</html>\n",
        ));
        assert_eq!(
            err.to_string(),
            "Server error: 500 <html>upstream exploded</html>"
        );
    }

    #[test]
    fn empty_body_falls_back_to_reason_then_status() {
        let err =
            SubmissionError::from_response(&response(502, Some("Bad Gateway"), b"   "));
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");

        let err = SubmissionError::from_response(&response(599, None, b""));
        assert_eq!(err.to_string(), "Server error: 599");
    }

    #[test]
    fn invalid_utf8_body_does_not_panic() {
        let err = SubmissionError::from_response(&response(500, None, &[0xff, 0xfe, 0x41]));
        assert!(err.to_string().starts_with("Server error: 500"));
    }

    #[test]
    fn transport_messages_are_distinct_per_workflow() {
        let t = SubmissionError::unreachable(WorkflowKind::Transformation);
        let a = SubmissionError::unreachable(WorkflowKind::Analysis);
        assert_ne!(t, a);
        assert_eq!(t.kind(), SubmissionErrorKind::Transport);
        assert!(a.to_string().contains("unreachable"));
    }
}

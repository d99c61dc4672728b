//! Per-workflow rules: which endpoint a bundle goes to, how it is encoded and
//! how a successful body is decoded.

use serde::de::DeserializeOwned;
use serde_json::Value;
use stagehand_config::{fields, Endpoints};

use crate::error::SubmissionError;
use crate::input::{InputBundle, Payload, WorkflowKind};
use crate::request::{MultipartForm, RequestBody, SubmissionRequest};
use crate::result::{AnalysisResult, TransformResult};

pub trait Workflow: Send + Sync + 'static {
    type Output: Clone + std::fmt::Debug + Send + Sync + 'static;

    fn kind(&self) -> WorkflowKind;

    /// Chooses exactly one endpoint variant and encodes the bundle for it.
    fn build_request(&self, bundle: &InputBundle) -> Result<SubmissionRequest, SubmissionError>;

    fn parse_output(&self, body: &[u8]) -> Result<Self::Output, SubmissionError>;

    fn validate(&self, bundle: &InputBundle) -> Result<(), SubmissionError> {
        if bundle.kind() != self.kind() {
            return Err(SubmissionError::validation(self.kind()));
        }
        bundle.validate()
    }

    fn transport_failure(&self) -> SubmissionError {
        SubmissionError::unreachable(self.kind())
    }
}

/// Decodes a JSON object body; anything else is a malformed result.
fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, SubmissionError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| SubmissionError::MalformedResult {
            detail: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(SubmissionError::MalformedResult {
            detail: format!("expected a JSON object, got {value}"),
        });
    }
    serde_json::from_value(value).map_err(|e| SubmissionError::MalformedResult {
        detail: e.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct TransformWorkflow {
    text_url: String,
    document_url: String,
}

impl TransformWorkflow {
    pub fn new(endpoints: &Endpoints) -> Self {
        Self {
            text_url: endpoints.script_text_url(),
            document_url: endpoints.script_document_url(),
        }
    }
}

impl Workflow for TransformWorkflow {
    type Output = TransformResult;

    fn kind(&self) -> WorkflowKind {
        WorkflowKind::Transformation
    }

    fn build_request(&self, bundle: &InputBundle) -> Result<SubmissionRequest, SubmissionError> {
        let genre = bundle.genre().unwrap_or_default().as_str().to_string();
        let request = match bundle.payload() {
            Payload::File(file) => SubmissionRequest {
                url: self.document_url.clone(),
                body: RequestBody::Multipart(MultipartForm {
                    file_field: fields::DOCUMENT.to_string(),
                    file: file.clone(),
                    fields: vec![(fields::GENRE.to_string(), genre)],
                }),
            },
            Payload::Text(text) => {
                let mut body = serde_json::Map::new();
                body.insert(fields::ORIGINAL_SCRIPT.into(), Value::String(text.clone()));
                body.insert(fields::GENRE.into(), Value::String(genre));
                SubmissionRequest {
                    url: self.text_url.clone(),
                    body: RequestBody::Json(Value::Object(body)),
                }
            }
        };
        Ok(request)
    }

    fn parse_output(&self, body: &[u8]) -> Result<TransformResult, SubmissionError> {
        parse_object(body)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisWorkflow {
    predict_url: String,
}

impl AnalysisWorkflow {
    pub fn new(endpoints: &Endpoints) -> Self {
        Self {
            predict_url: endpoints.emotion_predict_url(),
        }
    }
}

impl Workflow for AnalysisWorkflow {
    type Output = AnalysisResult;

    fn kind(&self) -> WorkflowKind {
        WorkflowKind::Analysis
    }

    fn build_request(&self, bundle: &InputBundle) -> Result<SubmissionRequest, SubmissionError> {
        let Some(file) = bundle.file() else {
            return Err(SubmissionError::validation(WorkflowKind::Analysis));
        };

        let mut form_fields = vec![(
            fields::USER_EMOTION.to_string(),
            bundle.hint().unwrap_or_default().to_string(),
        )];
        let clip = bundle.clip();
        if let Some(start) = clip.start {
            form_fields.push((fields::START_TIME.to_string(), start.to_string()));
        }
        if let Some(end) = clip.end {
            form_fields.push((fields::END_TIME.to_string(), end.to_string()));
        }

        Ok(SubmissionRequest {
            url: self.predict_url.clone(),
            body: RequestBody::Multipart(MultipartForm {
                file_field: fields::VIDEO.to_string(),
                file: file.clone(),
                fields: form_fields,
            }),
        })
    }

    fn parse_output(&self, body: &[u8]) -> Result<AnalysisResult, SubmissionError> {
        parse_object(body)
    }
}

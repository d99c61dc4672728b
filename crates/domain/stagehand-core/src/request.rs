//! Transport-neutral description of an outgoing submission and the reply it got.

use bytes::Bytes;

use crate::input::BinaryBlob;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub url: String,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartForm {
    pub file_field: String,
    pub file: BinaryBlob,
    pub fields: Vec<(String, String)>,
}

impl MultipartForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl SubmissionRequest {
    pub fn is_multipart(&self) -> bool {
        matches!(self.body, RequestBody::Multipart(_))
    }
}

/// Whatever came back once a response was obtained, success or not.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, when the transport knows one.
    pub reason: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn ok_json(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            reason: Some("OK".into()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

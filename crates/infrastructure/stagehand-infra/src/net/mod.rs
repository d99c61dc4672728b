use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use stagehand_core::{MultipartForm, RawResponse, RequestBody, SubmissionRequest};
use thiserror::Error;
use tracing::{debug, warn};

/// No response was obtained. The message is for logs only.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build request for {url}: {source}")]
    Build {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed: {source}")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Shared client: a user agent and a connect timeout, no overall request timeout.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("stagehand/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(stagehand_config::CONNECT_TIMEOUT_SECS))
        .build()
}

/// Executes submission requests over HTTP. Status codes are not interpreted here.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
}

impl HttpGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn execute(&self, req: &SubmissionRequest) -> Result<RawResponse, TransportError> {
        let builder = self.client.post(&req.url);
        let builder = match &req.body {
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(form) => {
                let form = build_form(form).map_err(|source| TransportError::Build {
                    url: req.url.clone(),
                    source,
                })?;
                builder.multipart(form)
            }
        };

        debug!(url = %req.url, multipart = req.is_multipart(), "Dispatching submission");
        let resp = builder.send().await.map_err(|source| {
            warn!(url = %req.url, error = %source, "Submission transport failure");
            TransportError::Send {
                url: req.url.clone(),
                source,
            }
        })?;

        let status = resp.status();
        debug!(url = %req.url, status = status.as_u16(), "Submission response received");

        let body = resp.bytes().await.map_err(|source| {
            warn!(url = %req.url, error = %source, "Failed to read response body");
            TransportError::Body {
                url: req.url.clone(),
                source,
            }
        })?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

fn build_form(form: &MultipartForm) -> reqwest::Result<Form> {
    let part = Part::bytes(form.file.bytes.to_vec())
        .file_name(form.file.name.clone())
        .mime_str(&form.file.content_type)?;

    let mut out = Form::new().part(form.file_field.clone(), part);
    for (name, value) in &form.fields {
        out = out.text(name.clone(), value.clone());
    }
    Ok(out)
}

use std::path::PathBuf;

use async_trait::async_trait;
use stagehand_config::Endpoints;
use stagehand_core::{
    Artifact, AuthResponse, Credentials, RawResponse, SignupRequest, SubmissionRequest,
};
use stagehand_infra::{HttpGateway, IdentityClient, IdentityError};

use crate::ports::{ArtifactSink, IdentityFailure, IdentityPort, InferenceGateway, SaveOutcome};

pub struct HttpInferenceGateway {
    inner: HttpGateway,
}

impl HttpInferenceGateway {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            inner: HttpGateway::new(client),
        }
    }
}

#[async_trait]
impl InferenceGateway for HttpInferenceGateway {
    async fn send(&self, request: &SubmissionRequest) -> anyhow::Result<RawResponse> {
        Ok(self.inner.execute(request).await?)
    }
}

pub struct HttpIdentityPort {
    inner: IdentityClient,
}

impl HttpIdentityPort {
    pub fn new(client: reqwest::Client, endpoints: &Endpoints) -> Self {
        Self {
            inner: IdentityClient::new(client, endpoints),
        }
    }
}

fn to_failure(err: IdentityError) -> IdentityFailure {
    match err {
        IdentityError::Rejected { body, .. } => IdentityFailure::Rejected(body),
        other => IdentityFailure::Unavailable(other.into()),
    }
}

#[async_trait]
impl IdentityPort for HttpIdentityPort {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityFailure> {
        self.inner.login(credentials).await.map_err(to_failure)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, IdentityFailure> {
        self.inner.signup(request).await.map_err(to_failure)
    }
}

/// Saves every artifact into one directory under its suggested name.
#[derive(Debug, Clone)]
pub struct DirectoryArtifactSink {
    dir: PathBuf,
}

impl DirectoryArtifactSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectoryArtifactSink {
    fn save(&self, artifact: &Artifact) -> anyhow::Result<SaveOutcome> {
        let path = stagehand_infra::write_artifact(&self.dir, artifact)?;
        Ok(SaveOutcome::Saved(path))
    }
}

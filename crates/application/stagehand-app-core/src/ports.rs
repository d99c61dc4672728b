use std::path::PathBuf;

use async_trait::async_trait;
use stagehand_core::{
    Artifact, AuthResponse, Credentials, IdentityErrorBody, RawResponse, SignupRequest,
    SubmissionRequest,
};

/// Remote inference boundary. `Err` means no response was obtained at all;
/// any HTTP status, including errors, comes back as `Ok`.
#[async_trait]
pub trait InferenceGateway: Send + Sync + 'static {
    async fn send(&self, request: &SubmissionRequest) -> anyhow::Result<RawResponse>;
}

#[derive(Debug)]
pub enum IdentityFailure {
    /// The service answered and refused.
    Rejected(IdentityErrorBody),
    Unavailable(anyhow::Error),
}

#[async_trait]
pub trait IdentityPort: Send + Sync + 'static {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityFailure>;
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, IdentityFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Local file-save boundary.
pub trait ArtifactSink {
    fn save(&self, artifact: &Artifact) -> anyhow::Result<SaveOutcome>;
}

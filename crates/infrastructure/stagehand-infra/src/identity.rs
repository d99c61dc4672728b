use reqwest::Client;
use stagehand_config::Endpoints;
use stagehand_core::{AuthResponse, Credentials, IdentityErrorBody, SignupRequest};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity service rejected the request with status {status}")]
    Rejected { status: u16, body: IdentityErrorBody },
    #[error("identity service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("identity service returned an unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IdentityError {
    pub fn rejection(&self) -> Option<&IdentityErrorBody> {
        match self {
            IdentityError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Credential exchange with the identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: Client,
    login_url: String,
    signup_url: String,
}

impl IdentityClient {
    pub fn new(client: Client, endpoints: &Endpoints) -> Self {
        Self {
            client,
            login_url: endpoints.login_url(),
            signup_url: endpoints.signup_url(),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityError> {
        self.post(&self.login_url, credentials).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, IdentityError> {
        self.post(&self.signup_url, request).await
    }

    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<AuthResponse, IdentityError> {
        debug!(%url, "Sending identity request");
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .inspect_err(|e| warn!(%url, error = %e, "Identity transport failure"))?;

        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<IdentityErrorBody>(&bytes).unwrap_or_default();
            debug!(%url, status = status.as_u16(), "Identity request rejected");
            return Err(IdentityError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

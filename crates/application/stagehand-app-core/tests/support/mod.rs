#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stagehand_app_core::ports::{IdentityFailure, IdentityPort, InferenceGateway};
use stagehand_core::{
    AuthResponse, Credentials, IdentityErrorBody, RawResponse, SignupRequest, SubmissionRequest,
    UserProfile,
};
use tokio::sync::Notify;

#[derive(Clone)]
pub enum Reply {
    Status(u16, &'static str),
    Unreachable,
}

struct Shared {
    calls: AtomicUsize,
    requests: Mutex<Vec<SubmissionRequest>>,
    reply: Mutex<Reply>,
    gate: Option<Arc<Notify>>,
}

/// In-memory inference boundary that records every request it sees.
#[derive(Clone)]
pub struct FakeGateway {
    shared: Arc<Shared>,
}

impl FakeGateway {
    pub fn replying(reply: Reply) -> Self {
        Self::build(reply, None)
    }

    /// Every call waits for `gate` to be notified before replying.
    pub fn held(reply: Reply, gate: Arc<Notify>) -> Self {
        Self::build(reply, Some(gate))
    }

    fn build(reply: Reply, gate: Option<Arc<Notify>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                reply: Mutex::new(reply),
                gate,
            }),
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.shared.reply.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> usize {
        self.shared.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.shared.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceGateway for FakeGateway {
    async fn send(&self, request: &SubmissionRequest) -> anyhow::Result<RawResponse> {
        self.shared.calls.fetch_add(1, Ordering::SeqCst);
        self.shared.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.shared.gate {
            gate.notified().await;
        }

        let reply = self.shared.reply.lock().unwrap().clone();
        match reply {
            Reply::Status(status, body) => Ok(RawResponse {
                status,
                reason: None,
                body: body.as_bytes().to_vec().into(),
            }),
            Reply::Unreachable => Err(anyhow::anyhow!("connection refused")),
        }
    }
}

/// Accepts exactly one password; everything else is rejected like the real service.
#[derive(Clone, Default)]
pub struct FakeIdentity {
    calls: Arc<AtomicUsize>,
}

impl FakeIdentity {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityPort for FakeIdentity {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if credentials.password == "hunter2" {
            Ok(AuthResponse {
                token: "tok".into(),
                user: UserProfile {
                    id: Some("u1".into()),
                    name: Some("Ada".into()),
                    email: Some(credentials.email.clone()),
                },
            })
        } else {
            Err(IdentityFailure::Rejected(IdentityErrorBody {
                error: Some("Invalid credentials".into()),
                message: None,
            }))
        }
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<AuthResponse, IdentityFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(IdentityFailure::Unavailable(anyhow::anyhow!("connection refused")))
    }
}

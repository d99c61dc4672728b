use std::sync::{Arc, Mutex};

use stagehand_core::identity::{LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use stagehand_core::{Credentials, SessionContext, SignupRequest};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::app_core::RunId;
use crate::ports::{IdentityFailure, IdentityPort};

/// Explicit holder of the signed-in identity. Cloning shares the same session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Option<SessionContext>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, ctx: SessionContext) {
        *self.inner.lock().unwrap() = Some(ctx);
    }

    pub fn current(&self) -> Option<SessionContext> {
        self.inner.lock().unwrap().clone()
    }

    pub fn end(&self) {
        *self.inner.lock().unwrap() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().unwrap().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Idle,
    Pending {
        run_id: RunId,
    },
    Failed(String),
}

impl AuthState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthState::Pending { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted { run_id: RunId },
    Ignored,
    Rejected(&'static str),
}

#[derive(Debug)]
enum AuthEvent {
    Succeeded { run_id: RunId, session: SessionContext },
    Failed { run_id: RunId, message: String },
}

impl AuthEvent {
    fn run_id(&self) -> RunId {
        match self {
            AuthEvent::Succeeded { run_id, .. } | AuthEvent::Failed { run_id, .. } => *run_id,
        }
    }
}

/// Login and signup, one request at a time. A success begins the session.
pub struct AuthController<P: IdentityPort> {
    port: Arc<P>,
    session: SessionStore,
    state: AuthState,

    tx: mpsc::Sender<AuthEvent>,
    rx: mpsc::Receiver<AuthEvent>,
}

impl<P: IdentityPort> AuthController<P> {
    pub fn new(port: Arc<P>, session: SessionStore) -> Self {
        let (tx, rx) = mpsc::channel(4);
        Self {
            port,
            session,
            state: AuthState::Idle,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Clears a stale error, e.g. when switching between login and signup.
    pub fn reset(&mut self) {
        if !self.state.is_pending() {
            self.state = AuthState::Idle;
        }
    }

    pub fn login(&mut self, credentials: Credentials) -> AuthOutcome {
        if self.state.is_pending() {
            return AuthOutcome::Ignored;
        }
        if let Err(msg) = credentials.validate() {
            self.state = AuthState::Failed(msg.to_string());
            return AuthOutcome::Rejected(msg);
        }

        let port = self.port.clone();
        self.spawn(LOGIN_FAILED_MESSAGE, move || async move {
            match port.login(&credentials).await {
                Ok(resp) => Ok(SessionContext::from(resp)),
                Err(IdentityFailure::Rejected(body)) => Err(body.login_message()),
                Err(IdentityFailure::Unavailable(e)) => {
                    warn!("Login request failed: {e:#}");
                    Err(LOGIN_FAILED_MESSAGE.to_string())
                }
            }
        })
    }

    pub fn signup(&mut self, request: SignupRequest) -> AuthOutcome {
        if self.state.is_pending() {
            return AuthOutcome::Ignored;
        }
        let request = match request.normalized() {
            Ok(r) => r,
            Err(msg) => {
                self.state = AuthState::Failed(msg.to_string());
                return AuthOutcome::Rejected(msg);
            }
        };

        let port = self.port.clone();
        self.spawn(SIGNUP_FAILED_MESSAGE, move || async move {
            match port.signup(&request).await {
                Ok(resp) => Ok(SessionContext::from(resp)),
                Err(IdentityFailure::Rejected(body)) => Err(body.signup_message()),
                Err(IdentityFailure::Unavailable(e)) => {
                    warn!("Signup request failed: {e:#}");
                    Err(SIGNUP_FAILED_MESSAGE.to_string())
                }
            }
        })
    }

    fn spawn<F, Fut>(&mut self, fallback: &'static str, make: F) -> AuthOutcome
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<SessionContext, String>> + Send + 'static,
    {
        let run_id: RunId = uuid::Uuid::new_v4();
        self.state = AuthState::Pending { run_id };

        let rt = match crate::async_runtime::runtime() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to start async runtime: {e}");
                self.state = AuthState::Failed(fallback.to_string());
                return AuthOutcome::Accepted { run_id };
            }
        };

        let tx = self.tx.clone();
        let fut = make();
        debug!(%run_id, "Identity request started");
        rt.spawn(async move {
            let ev = match fut.await {
                Ok(session) => AuthEvent::Succeeded { run_id, session },
                Err(message) => AuthEvent::Failed { run_id, message },
            };
            let _ = tx.send(ev).await;
        });

        AuthOutcome::Accepted { run_id }
    }

    /// Applies finished requests. Returns `true` when a session was just established.
    pub fn tick(&mut self) -> bool {
        let mut signed_in = false;
        while let Ok(ev) = self.rx.try_recv() {
            signed_in |= self.apply(ev);
        }
        signed_in
    }

    pub async fn settled(&mut self) -> bool {
        let mut signed_in = false;
        while self.state.is_pending() {
            match self.rx.recv().await {
                Some(ev) => signed_in |= self.apply(ev),
                None => break,
            }
        }
        signed_in
    }

    fn apply(&mut self, ev: AuthEvent) -> bool {
        if self.state != (AuthState::Pending { run_id: ev.run_id() }) {
            return false;
        }
        match ev {
            AuthEvent::Succeeded { session, .. } => {
                info!(user = session.user.display_name(), "Signed in");
                self.session.begin(session);
                self.state = AuthState::Idle;
                true
            }
            AuthEvent::Failed { message, .. } => {
                self.state = AuthState::Failed(message);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.end();
        self.state = AuthState::Idle;
        info!("Signed out");
    }
}

use std::sync::Arc;

use stagehand_config::Endpoints;
use stagehand_core::{
    export_document, export_report, AnalysisResult, AnalysisWorkflow, Artifact, Credentials,
    InputSelector, ReportMeta, SessionContext, SignupRequest, TransformResult, TransformWorkflow,
};
use tracing::{info, warn};

use crate::app_core::SubmissionState;
use crate::controller::{SubmissionController, SubmitOutcome};
use crate::domain::{AppState, ExportNotice, Route};
use crate::gateway::{HttpIdentityPort, HttpInferenceGateway};
use crate::ports::{ArtifactSink, IdentityPort, InferenceGateway, SaveOutcome};
use crate::session::{AuthController, AuthOutcome, AuthState, SessionStore};

/// Facade the view layer drives. Views read state through accessors and view
/// models and request changes through the methods below.
pub struct StudioApplication<G = HttpInferenceGateway, I = HttpIdentityPort>
where
    G: InferenceGateway,
    I: IdentityPort,
{
    pub state: AppState,
    pub transform_input: InputSelector,
    pub analysis_input: InputSelector,

    endpoints: Endpoints,
    gateway: Arc<G>,
    session: SessionStore,
    auth: AuthController<I>,
    transform: SubmissionController<TransformWorkflow, G>,
    analysis: SubmissionController<AnalysisWorkflow, G>,
}

impl StudioApplication {
    pub fn new() -> Self {
        Self::from_endpoints(&Endpoints::from_env())
    }

    pub fn from_endpoints(endpoints: &Endpoints) -> Self {
        let client = stagehand_infra::default_http_client().unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {e}");
            reqwest::Client::new()
        });
        Self::with_ports(
            endpoints,
            HttpInferenceGateway::new(client.clone()),
            HttpIdentityPort::new(client, endpoints),
        )
    }
}

impl Default for StudioApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: InferenceGateway, I: IdentityPort> StudioApplication<G, I> {
    pub fn with_ports(endpoints: &Endpoints, gateway: G, identity: I) -> Self {
        let gateway = Arc::new(gateway);
        let session = SessionStore::new();
        Self {
            state: AppState::default(),
            transform_input: InputSelector::transformation(),
            analysis_input: InputSelector::analysis(),
            auth: AuthController::new(Arc::new(identity), session.clone()),
            session,
            transform: SubmissionController::new(
                TransformWorkflow::new(endpoints),
                gateway.clone(),
            ),
            analysis: SubmissionController::new(
                AnalysisWorkflow::new(endpoints),
                gateway.clone(),
            ),
            endpoints: endpoints.clone(),
            gateway,
        }
    }

    // --- Identity ---

    pub fn login(&mut self, credentials: Credentials) -> AuthOutcome {
        self.auth.login(credentials)
    }

    pub fn signup(&mut self, request: SignupRequest) -> AuthOutcome {
        self.auth.signup(request)
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.leave(self.state.route);
        self.state.route = Route::Login;
        self.state.export_notice = None;
    }

    pub fn auth_state(&self) -> &AuthState {
        self.auth.state()
    }

    pub fn session(&self) -> Option<SessionContext> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // --- Navigation ---

    /// Protected routes fall back to `Login` without a session.
    pub fn navigate(&mut self, route: Route) {
        let target = if route.requires_session() && !self.session.is_authenticated() {
            Route::Login
        } else {
            route
        };
        if matches!(target, Route::Login | Route::Signup) && target != self.state.route {
            self.auth.reset();
        }
        if target != self.state.route {
            self.leave(self.state.route);
        }
        self.state.export_notice = None;
        self.state.route = target;
    }

    /// Each visit to a workflow page starts from a fresh instance. A request
    /// still in flight for the old instance finishes unobserved.
    fn leave(&mut self, route: Route) {
        match route {
            Route::ScriptTransformer => {
                self.transform_input = InputSelector::transformation();
                self.transform = SubmissionController::new(
                    TransformWorkflow::new(&self.endpoints),
                    self.gateway.clone(),
                );
            }
            Route::VideoAnalyzer => {
                self.analysis_input = InputSelector::analysis();
                self.analysis = SubmissionController::new(
                    AnalysisWorkflow::new(&self.endpoints),
                    self.gateway.clone(),
                );
            }
            _ => {}
        }
    }

    // --- Submissions ---

    pub fn submit_transform(&mut self) -> SubmitOutcome {
        let bundle = self.transform_input.current_bundle();
        let outcome = self.transform.submit(bundle);
        self.on_submitted(&outcome);
        outcome
    }

    pub fn submit_analysis(&mut self) -> SubmitOutcome {
        let bundle = self.analysis_input.current_bundle();
        let outcome = self.analysis.submit(bundle);
        self.on_submitted(&outcome);
        outcome
    }

    /// An export notice belongs to the result it was saved from.
    fn on_submitted(&mut self, outcome: &SubmitOutcome) {
        if matches!(outcome, SubmitOutcome::Accepted { .. }) {
            self.state.export_notice = None;
        }
    }

    pub fn transform_state(&self) -> SubmissionState<TransformResult> {
        self.transform.state()
    }

    pub fn analysis_state(&self) -> SubmissionState<AnalysisResult> {
        self.analysis.state()
    }

    pub fn is_busy(&self) -> bool {
        self.transform.is_pending() || self.analysis.is_pending() || self.auth.state().is_pending()
    }

    /// Call this from the UI loop to apply finished requests.
    pub fn handle_events(&mut self) {
        if self.auth.tick() {
            self.state.route = Route::Home;
        }
        self.transform.tick();
        self.analysis.tick();
    }

    /// Waits for every in-flight request and applies its result.
    pub async fn settle(&mut self) {
        if self.auth.settled().await {
            self.state.route = Route::Home;
        }
        self.transform.settled().await;
        self.analysis.settled().await;
    }

    // --- Export ---

    pub fn transform_artifact(&self) -> anyhow::Result<Option<Artifact>> {
        let state = self.transform.state();
        let Some(result) = state.result() else {
            return Ok(None);
        };
        let genre = self
            .transform
            .submitted()
            .and_then(|b| b.genre())
            .unwrap_or_default();
        Ok(Some(export_document(result, genre)?))
    }

    pub fn analysis_artifact(&self) -> Option<Artifact> {
        let state = self.analysis.state();
        let result = state.result()?;
        let bundle = self.analysis.submitted()?;
        let meta = ReportMeta::new(
            bundle.file().map(|f| f.name.clone()).unwrap_or_default(),
            bundle.hint().unwrap_or_default(),
        );
        Some(export_report(result, &meta))
    }

    pub fn export_transform(&mut self, sink: &dyn ArtifactSink) -> anyhow::Result<SaveOutcome> {
        let artifact = self.transform_artifact()?;
        self.save(artifact, sink)
    }

    pub fn export_analysis(&mut self, sink: &dyn ArtifactSink) -> anyhow::Result<SaveOutcome> {
        let artifact = self.analysis_artifact();
        self.save(artifact, sink)
    }

    fn save(
        &mut self,
        artifact: Option<Artifact>,
        sink: &dyn ArtifactSink,
    ) -> anyhow::Result<SaveOutcome> {
        let Some(artifact) = artifact else {
            anyhow::bail!("Nothing to export yet");
        };
        match sink.save(&artifact) {
            Ok(SaveOutcome::Saved(path)) => {
                info!(file = %artifact.file_name, "Exported artifact");
                self.state.export_notice = Some(ExportNotice::Saved(path.clone()));
                Ok(SaveOutcome::Saved(path))
            }
            Ok(SaveOutcome::Cancelled) => Ok(SaveOutcome::Cancelled),
            Err(e) => {
                warn!(file = %artifact.file_name, "Export failed: {e:#}");
                self.state.export_notice = Some(ExportNotice::Failed(e.to_string()));
                Err(e)
            }
        }
    }
}

use std::sync::Arc;

use stagehand_core::{InputBundle, SubmissionError, Workflow};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::app_core::{RunId, SubmissionEvent, SubmissionState, SubmissionStore};
use crate::ports::InferenceGateway;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { run_id: RunId },
    /// A request is already in flight for this instance.
    Ignored,
    /// The bundle failed validation; nothing was sent.
    Rejected(SubmissionError),
}

/// Owns one workflow instance: at most one request in flight, all state
/// transitions go through the store.
pub struct SubmissionController<W: Workflow, G: InferenceGateway> {
    store: SubmissionStore<W::Output>,
    workflow: Arc<W>,
    gateway: Arc<G>,
    submitted: Option<InputBundle>,

    tx: mpsc::Sender<SubmissionEvent<W::Output>>,
    rx: mpsc::Receiver<SubmissionEvent<W::Output>>,
}

impl<W: Workflow, G: InferenceGateway> SubmissionController<W, G> {
    pub fn new(workflow: W, gateway: Arc<G>) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            store: SubmissionStore::default(),
            workflow: Arc::new(workflow),
            gateway,
            submitted: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> SubmissionState<W::Output> {
        self.store.state()
    }

    pub fn is_pending(&self) -> bool {
        self.store.is_pending()
    }

    /// The bundle behind the current pending or terminal state.
    pub fn submitted(&self) -> Option<&InputBundle> {
        self.submitted.as_ref()
    }

    pub fn submit(&mut self, bundle: InputBundle) -> SubmitOutcome {
        let kind = self.workflow.kind();
        if self.store.is_pending() {
            debug!(workflow = kind.label(), "Submission ignored; a request is in flight");
            return SubmitOutcome::Ignored;
        }

        if let Err(err) = self.workflow.validate(&bundle) {
            debug!(workflow = kind.label(), error = %err, "Submission rejected");
            self.submitted = Some(bundle);
            self.store.apply(SubmissionEvent::Rejected(err.clone()));
            return SubmitOutcome::Rejected(err);
        }

        let run_id: RunId = uuid::Uuid::new_v4();
        self.store.apply(SubmissionEvent::Started { run_id });
        self.submitted = Some(bundle.clone());

        let rt = match crate::async_runtime::runtime() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to start async runtime: {e}");
                self.store.apply(SubmissionEvent::Failed {
                    run_id,
                    error: self.workflow.transport_failure(),
                });
                return SubmitOutcome::Accepted { run_id };
            }
        };

        let workflow = self.workflow.clone();
        let gateway = self.gateway.clone();
        let tx = self.tx.clone();
        info!(workflow = kind.label(), %run_id, "Submission started");
        rt.spawn(async move {
            let ev = match execute(workflow.as_ref(), gateway.as_ref(), &bundle).await {
                Ok(result) => SubmissionEvent::Succeeded { run_id, result },
                Err(error) => SubmissionEvent::Failed { run_id, error },
            };
            // The controller may be gone; the result is then simply discarded.
            let _ = tx.send(ev).await;
        });

        SubmitOutcome::Accepted { run_id }
    }

    /// Applies every finished request. Call once per frame.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.apply_event(ev);
        }
    }

    /// Waits until the in-flight request, if any, has been applied.
    pub async fn settled(&mut self) -> SubmissionState<W::Output> {
        while self.store.is_pending() {
            match self.rx.recv().await {
                Some(ev) => self.apply_event(ev),
                None => break,
            }
        }
        self.store.state()
    }

    fn apply_event(&mut self, ev: SubmissionEvent<W::Output>) {
        let current = self.store.state().run_id();
        if ev.run_id().is_some() && ev.run_id() != current {
            debug!("Dropping event from a stale run");
            return;
        }
        self.store.apply(ev);
    }
}

/// Serializes, sends and interprets a single submission.
pub async fn execute<W, G>(
    workflow: &W,
    gateway: &G,
    bundle: &InputBundle,
) -> Result<W::Output, SubmissionError>
where
    W: Workflow + ?Sized,
    G: InferenceGateway + ?Sized,
{
    let request = workflow.build_request(bundle)?;

    let response = match gateway.send(&request).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(url = %request.url, "No response from service: {e:#}");
            return Err(workflow.transport_failure());
        }
    };

    if !response.is_success() {
        let err = SubmissionError::from_response(&response);
        warn!(url = %request.url, status = response.status, "Service returned an error");
        return Err(err);
    }

    workflow.parse_output(&response.body).inspect_err(|e| {
        if let SubmissionError::MalformedResult { detail } = e {
            warn!(url = %request.url, %detail, "Unreadable success body");
        }
    })
}

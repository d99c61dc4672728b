use stagehand_core::SubmissionError;

pub type RunId = uuid::Uuid;

/// Lifecycle of one workflow instance. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState<R> {
    #[default]
    Idle,
    Pending {
        run_id: RunId,
    },
    Succeeded(R),
    Failed(SubmissionError),
}

impl<R> SubmissionState<R> {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending { .. })
    }

    pub fn run_id(&self) -> Option<RunId> {
        match self {
            SubmissionState::Pending { run_id } => Some(*run_id),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&R> {
        match self {
            SubmissionState::Succeeded(r) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The message shown to the user for a failed submission.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

#[derive(Debug, Clone)]
pub enum SubmissionEvent<R> {
    // Local, applied synchronously by the controller
    Started { run_id: RunId },
    Rejected(SubmissionError),

    // Produced by the request task
    Succeeded { run_id: RunId, result: R },
    Failed { run_id: RunId, error: SubmissionError },
}

impl<R> SubmissionEvent<R> {
    pub fn run_id(&self) -> Option<RunId> {
        match self {
            SubmissionEvent::Started { run_id }
            | SubmissionEvent::Succeeded { run_id, .. }
            | SubmissionEvent::Failed { run_id, .. } => Some(*run_id),
            SubmissionEvent::Rejected(_) => None,
        }
    }
}

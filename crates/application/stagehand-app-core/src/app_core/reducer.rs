use super::events::{SubmissionEvent, SubmissionState};

pub fn reduce<R>(state: SubmissionState<R>, ev: SubmissionEvent<R>) -> SubmissionState<R> {
    match ev {
        SubmissionEvent::Started { run_id } => SubmissionState::Pending { run_id },

        // A rejected submit never interrupts a request in flight.
        SubmissionEvent::Rejected(error) => match state {
            SubmissionState::Pending { .. } => state,
            _ => SubmissionState::Failed(error),
        },

        SubmissionEvent::Succeeded { run_id, result } => match state {
            SubmissionState::Pending { run_id: current } if current == run_id => {
                SubmissionState::Succeeded(result)
            }
            other => other,
        },

        SubmissionEvent::Failed { run_id, error } => match state {
            SubmissionState::Pending { run_id: current } if current == run_id => {
                SubmissionState::Failed(error)
            }
            other => other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::{SubmissionError, WorkflowKind};

    type State = SubmissionState<&'static str>;
    type Event = SubmissionEvent<&'static str>;

    #[test]
    fn pending_resolves_only_for_its_own_run() {
        let run = uuid::Uuid::new_v4();
        let stale = uuid::Uuid::new_v4();
        let pending: State = reduce(State::Idle, Event::Started { run_id: run });

        let unchanged = reduce(
            pending.clone(),
            Event::Succeeded {
                run_id: stale,
                result: "old",
            },
        );
        assert_eq!(unchanged, pending);

        let done = reduce(
            pending,
            Event::Succeeded {
                run_id: run,
                result: "new",
            },
        );
        assert_eq!(done, State::Succeeded("new"));
    }

    #[test]
    fn terminal_states_are_never_left_without_a_new_submission() {
        let run = uuid::Uuid::new_v4();
        let failed: State = reduce(
            State::Pending { run_id: run },
            Event::Failed {
                run_id: run,
                error: SubmissionError::unreachable(WorkflowKind::Analysis),
            },
        );
        let late = reduce(
            failed.clone(),
            Event::Succeeded {
                run_id: run,
                result: "late",
            },
        );
        assert_eq!(late, failed);
    }

    #[test]
    fn rejection_replaces_terminal_state_but_not_pending() {
        let err = SubmissionError::validation(WorkflowKind::Transformation);
        let from_success = reduce(State::Succeeded("x"), Event::Rejected(err.clone()));
        assert_eq!(from_success, State::Failed(err.clone()));

        let pending = State::Pending {
            run_id: uuid::Uuid::new_v4(),
        };
        assert_eq!(reduce(pending.clone(), Event::Rejected(err)), pending);
    }
}

use std::sync::{Arc, Mutex};

use super::{events::SubmissionEvent, events::SubmissionState, reducer::reduce};

/// Shared handle to one workflow's state. The reducer is the only writer.
pub struct SubmissionStore<R> {
    inner: Arc<Mutex<SubmissionState<R>>>,
}

impl<R> Clone for SubmissionStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Clone> Default for SubmissionStore<R> {
    fn default() -> Self {
        Self::new(SubmissionState::Idle)
    }
}

impl<R: Clone> SubmissionStore<R> {
    pub fn new(state: SubmissionState<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> SubmissionState<R> {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: SubmissionEvent<R>) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub fn is_pending(&self) -> bool {
        self.inner.lock().unwrap().is_pending()
    }
}

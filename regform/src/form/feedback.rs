//! Success feedback cycle.

use std::time::Duration;

use log::{info, trace};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::state::State;

/// Observable state of the success feedback banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionFeedbackState {
    /// Banner is visible.
    pub active: bool,
    /// Name captured from the accepted submission; empty when inactive.
    pub submitted_name: String,
    /// An expiry is pending. Only ever `true` while `active` is.
    pub expiry_armed: bool,
}

/// Controller phase as seen by a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FeedbackPhase {
    /// No errors shown and no feedback visible.
    #[default]
    Idle,
    /// Last submission was rejected.
    Invalid,
    /// Success feedback is visible.
    FeedbackActive,
}

#[derive(Debug, Default)]
pub(crate) struct Feedback {
    pub(crate) active: bool,
    pub(crate) submitted_name: String,
    generation: u64,
}

/// Owns the single pending expiry task of a form.
///
/// Starting a cycle aborts the previous task and bumps the generation; an
/// expiry task only clears the feedback if its generation is still current.
pub(crate) struct FeedbackTimer {
    runtime: Handle,
    duration: Duration,
    state: State<Feedback>,
    pending: Option<JoinHandle<()>>,
}

impl FeedbackTimer {
    pub(crate) fn new(runtime: Handle, duration: Duration) -> Self {
        Self {
            runtime,
            duration,
            state: State::default(),
            pending: None,
        }
    }

    /// Show feedback for `name` and arm a fresh expiry.
    pub(crate) fn start(&mut self, name: String) {
        if self.cancel() {
            trace!("Superseded pending feedback expiry");
        }

        let generation = self.state.update(|feedback| {
            feedback.generation += 1;
            feedback.active = true;
            feedback.submitted_name = name;
            feedback.generation
        });

        let state = self.state.clone();
        let duration = self.duration;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            expire(&state, generation);
        }));
    }

    /// Abort the pending expiry, if any. Returns `true` if one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Cancel any pending expiry and hide the feedback immediately.
    pub(crate) fn shutdown(&mut self) {
        self.cancel();
        self.state.update(|feedback| {
            feedback.generation += 1;
            feedback.active = false;
            feedback.submitted_name.clear();
        });
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub(crate) fn is_active(&self) -> bool {
        self.state.read(|feedback| feedback.active)
    }

    pub(crate) fn snapshot(&self) -> SubmissionFeedbackState {
        let (active, submitted_name) = self
            .state
            .read(|feedback| (feedback.active, feedback.submitted_name.clone()));
        SubmissionFeedbackState {
            active,
            submitted_name,
            expiry_armed: active && self.is_armed(),
        }
    }

    /// Returns `true` once after every feedback change.
    pub(crate) fn take_changed(&self) -> bool {
        self.state.take_dirty()
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn expire(state: &State<Feedback>, generation: u64) {
    let expired = state.read(|feedback| feedback.generation == generation && feedback.active);
    if !expired {
        trace!("Ignoring stale feedback expiry (generation {generation})");
        return;
    }
    state.update(|feedback| {
        if feedback.generation == generation {
            feedback.active = false;
            feedback.submitted_name.clear();
        }
    });
    info!("Submission feedback expired");
}

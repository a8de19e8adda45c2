//! The request coordinator: one submission at a time, start to settle.
//!
//! Holds the three page ports and the backend, and owns the only piece of
//! interaction state in the program. Everything else hangs off `submit`.

use std::sync::{Arc, Mutex};

use crate::backend::Backend;
use crate::page::{InputPort, OutputPort, TriggerPort};

/// Where the coordinator is in a submission's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Pending,
}

/// How one submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The service answered; the greeting is on the output port.
    Completed,
    /// The call failed; the failure text is on the output port.
    Failed,
    /// Raised while another submission was pending. Nothing happened.
    Ignored,
}

/// Running counts for the end-of-session summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub completed: u64,
    pub failed: u64,
}

impl SessionStats {
    pub fn record(&mut self, submission: Submission) {
        match submission {
            Submission::Completed => self.completed += 1,
            Submission::Failed => self.failed += 1,
            Submission::Ignored => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.completed + self.failed
    }
}

/// Wires the input, output, and trigger ports to a backend and drives the
/// Idle/Pending state machine across one asynchronous call.
pub struct Coordinator {
    input: Arc<dyn InputPort>,
    output: Arc<dyn OutputPort>,
    trigger: Arc<dyn TriggerPort>,
    backend: Arc<dyn Backend>,
    state: Mutex<InteractionState>,
}

impl Coordinator {
    pub fn new(
        input: Arc<dyn InputPort>,
        output: Arc<dyn OutputPort>,
        trigger: Arc<dyn TriggerPort>,
        backend: Arc<dyn Backend>,
    ) -> Self {
        Self {
            input,
            output,
            trigger,
            backend,
            state: Mutex::new(InteractionState::Idle),
        }
    }

    pub fn state(&self) -> InteractionState {
        *self.state.lock().unwrap()
    }

    /// Idle → Pending, or `false` if a submission is already pending.
    /// The state cell is the guard; the disabled trigger the user sees is
    /// only its projection.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        if *state == InteractionState::Pending {
            return false;
        }
        *state = InteractionState::Pending;
        true
    }

    /// Run one submission: capture the input field, issue exactly one
    /// greet call, render the result. Idle is reached again whether the
    /// call succeeds or fails, and no error escapes.
    pub async fn submit(&self) -> Submission {
        if !self.try_begin() {
            return Submission::Ignored;
        }
        // State first, flag second: disabled is derived from Pending
        self.trigger.set_disabled(true).await;

        // An empty value is still submitted as-is; what it means is the
        // service's call.
        let name = self.input.value();

        let outcome = match self.backend.greet(&name).await {
            Ok(greeting) => {
                self.output.display(&greeting);
                Submission::Completed
            }
            Err(err) => {
                self.output.display(&err.to_string());
                Submission::Failed
            }
        };

        *self.state.lock().unwrap() = InteractionState::Idle;
        self.trigger.set_disabled(false).await;
        outcome
    }
}

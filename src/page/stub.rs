//! Stub ports for tests. No terminal, no side effects; they just hold
//! the state a test wants to set up or inspect afterwards.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{InputPort, OutputPort, TriggerPort};

/// An input field whose value tests set directly.
#[derive(Debug, Default)]
pub struct StubInput {
    value: Mutex<String>,
}

impl StubInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(value.to_string()),
        }
    }

    pub fn set(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

impl InputPort for StubInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }
}

/// An output region that remembers everything ever displayed on it.
#[derive(Default)]
pub struct StubOutput {
    texts: Mutex<Vec<String>>,
}

impl StubOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed text, or `""` if nothing was displayed yet.
    pub fn text(&self) -> String {
        self.texts.lock().unwrap().last().cloned().unwrap_or_default()
    }

    /// Every text ever displayed, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl OutputPort for StubOutput {
    fn display(&self, text: &str) {
        self.texts.lock().unwrap().push(text.to_string());
    }
}

/// A trigger that records its disabled flag and every transition.
#[derive(Default)]
pub struct StubTrigger {
    disabled: AtomicBool,
    transitions: Mutex<Vec<bool>>,
}

impl StubTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence of `set_disabled` values seen, oldest first.
    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.lock().unwrap().clone()
    }
}

#[async_trait]
impl TriggerPort for StubTrigger {
    async fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
        self.transitions.lock().unwrap().push(disabled);
    }

    fn disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

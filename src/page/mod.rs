//! The UI surface, seen as three named ports.
//!
//! The page registers an input field, an output region, and a trigger
//! control under fixed ids. Whoever wires the coordinator resolves each
//! port once, up front; after that nothing looks anything up by id again.
//! A missing id is a wiring bug and fails fast as
//! [`FrontendError::FieldNotFound`](crate::error::FrontendError).

pub mod stub;
pub mod terminal;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FrontendError;

/// A text field the user fills in. Reading is a snapshot of the current
/// value, verbatim: an empty field reads as `""`, whitespace survives.
pub trait InputPort: std::fmt::Debug + Send + Sync {
    fn value(&self) -> String;
}

/// A region that renders one piece of display text, replacing whatever it
/// showed before.
pub trait OutputPort: Send + Sync {
    fn display(&self, text: &str);
}

/// The control that raises submissions. While disabled it must not accept
/// interaction; how that is rendered is the implementation's business.
#[async_trait]
pub trait TriggerPort: Send + Sync {
    async fn set_disabled(&self, disabled: bool);
    fn disabled(&self) -> bool;
}

/// The rendered page: ports registered under fixed ids.
#[derive(Default)]
pub struct Page {
    inputs: HashMap<String, Arc<dyn InputPort>>,
    outputs: HashMap<String, Arc<dyn OutputPort>>,
    triggers: HashMap<String, Arc<dyn TriggerPort>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, id: &str, port: Arc<dyn InputPort>) {
        self.inputs.insert(id.to_string(), port);
    }

    pub fn add_output(&mut self, id: &str, port: Arc<dyn OutputPort>) {
        self.outputs.insert(id.to_string(), port);
    }

    pub fn add_trigger(&mut self, id: &str, port: Arc<dyn TriggerPort>) {
        self.triggers.insert(id.to_string(), port);
    }

    pub fn input(&self, id: &str) -> Result<Arc<dyn InputPort>, FrontendError> {
        self.inputs
            .get(id)
            .cloned()
            .ok_or_else(|| FrontendError::FieldNotFound(id.to_string()))
    }

    pub fn output(&self, id: &str) -> Result<Arc<dyn OutputPort>, FrontendError> {
        self.outputs
            .get(id)
            .cloned()
            .ok_or_else(|| FrontendError::FieldNotFound(id.to_string()))
    }

    pub fn trigger(&self, id: &str) -> Result<Arc<dyn TriggerPort>, FrontendError> {
        self.triggers
            .get(id)
            .cloned()
            .ok_or_else(|| FrontendError::FieldNotFound(id.to_string()))
    }

    /// One-shot read of an input field's current value.
    pub fn capture(&self, id: &str) -> Result<String, FrontendError> {
        Ok(self.input(id)?.value())
    }
}

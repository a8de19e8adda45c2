//! Terminal-backed ports.
//!
//! In a terminal there is no persistent form on screen: the REPL plays the
//! page. Each prompt line is typed "into" the [`TextField`], the submit
//! control's disabled state is rendered as a spinner, and the greeting
//! pane prints to stdout.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{InputPort, OutputPort, TriggerPort};
use crate::spinner::Spinner;

/// The single text field of the page. The REPL writes the latest line
/// into it before raising a submission; reading never consumes.
#[derive(Debug, Default)]
pub struct TextField {
    value: Mutex<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

impl InputPort for TextField {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }
}

/// Where the reply lands: printed to stdout, and remembered so `/status`
/// can show the last exchange.
#[derive(Default)]
pub struct GreetingPane {
    last: Mutex<Option<String>>,
}

impl GreetingPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text displayed, if any.
    pub fn last(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

impl OutputPort for GreetingPane {
    fn display(&self, text: &str) {
        println!("=> {text}");
        *self.last.lock().unwrap() = Some(text.to_string());
    }
}

/// The submit control. Its disabled flag is rendered as a spinner: one
/// appears when the control goes disabled and is torn down when it comes
/// back. `stop` is awaited so the reply never prints into a half-wiped
/// animation line.
#[derive(Default)]
pub struct SubmitControl {
    disabled: AtomicBool,
    spinner: tokio::sync::Mutex<Option<Spinner>>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TriggerPort for SubmitControl {
    async fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
        let mut spinner = self.spinner.lock().await;
        if disabled {
            if spinner.is_none() {
                *spinner = Some(Spinner::start("greeting"));
            }
        } else if let Some(active) = spinner.take() {
            active.stop().await;
        }
    }

    fn disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use super::Backend;
use crate::error::FrontendError;

#[derive(Debug, Clone)]
enum Reply {
    Greeting(String),
    Failure(String),
}

/// A scripted service for tests. Answers every call with one canned
/// reply, records every argument it was called with, and can hold calls
/// open so a test can observe the Pending window from outside.
pub struct MockBackend {
    reply: Reply,
    calls: AtomicUsize,
    names: Mutex<Vec<String>>,
    hold: Option<watch::Receiver<bool>>,
}

impl MockBackend {
    pub fn replying(greeting: &str) -> Self {
        Self {
            reply: Reply::Greeting(greeting.to_string()),
            calls: AtomicUsize::new(0),
            names: Mutex::new(Vec::new()),
            hold: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Reply::Failure(reason.to_string()),
            ..Self::replying("")
        }
    }

    /// Like [`replying`](Self::replying), but calls do not settle until
    /// the returned sender sends `true` (or is dropped).
    pub fn held(greeting: &str) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        let backend = Self {
            hold: Some(rx),
            ..Self::replying(greeting)
        };
        (backend, tx)
    }

    /// How many times `greet` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every argument `greet` was called with, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn greet(&self, name: &str) -> Result<String, FrontendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.lock().unwrap().push(name.to_string());

        if let Some(rx) = &self.hold {
            let mut rx = rx.clone();
            while !*rx.borrow() {
                // A dropped sender releases the call too
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }

        match &self.reply {
            Reply::Greeting(greeting) => Ok(greeting.clone()),
            Reply::Failure(reason) => Err(FrontendError::RemoteCallFailed(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_and_records() {
        let mock = MockBackend::replying("Hello, Ada!");
        assert_eq!(mock.greet("Ada").await.unwrap(), "Hello, Ada!");
        assert_eq!(mock.greet("").await.unwrap(), "Hello, Ada!");
        assert_eq!(mock.calls(), 2);
        assert_eq!(mock.names(), vec!["Ada", ""]);
    }

    #[tokio::test]
    async fn failing_mock_rejects() {
        let mock = MockBackend::failing("boom");
        let err = mock.greet("Ada").await.unwrap_err();
        assert!(matches!(err, FrontendError::RemoteCallFailed(r) if r == "boom"));
    }

    #[tokio::test]
    async fn held_call_settles_on_release() {
        let (mock, release) = MockBackend::held("Hello!");
        let call = tokio::spawn(async move { mock.greet("Ada").await });
        tokio::task::yield_now().await;
        release.send(true).unwrap();
        assert_eq!(call.await.unwrap().unwrap(), "Hello!");
    }

    #[tokio::test]
    async fn dropping_the_release_also_settles() {
        let (mock, release) = MockBackend::held("Hello!");
        drop(release);
        assert_eq!(mock.greet("Ada").await.unwrap(), "Hello!");
    }
}

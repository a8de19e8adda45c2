//! Errors this front end produces on its own behalf.
//!
//! Two kinds, and they live at opposite ends of a run: a missing field is
//! a wiring defect caught before the first prompt; a failed remote call is
//! a per-submission outcome the coordinator renders and moves past.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// No port with this id is registered on the page. The page that wires
    /// the coordinator guarantees its fields exist, so hitting this means
    /// the wiring is wrong. Surface it immediately, never swallow it.
    #[error("no field with id `{0}` on this page")]
    FieldNotFound(String),

    /// The remote greet call rejected or never produced a reply. Terminal
    /// for the current submission; the user resubmits manually.
    #[error("remote call failed: {0}")]
    RemoteCallFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_not_found_names_the_id() {
        let err = FrontendError::FieldNotFound("greeting".to_string());
        assert_eq!(err.to_string(), "no field with id `greeting` on this page");
    }

    #[test]
    fn remote_call_failed_carries_reason() {
        let err = FrontendError::RemoteCallFailed("server returned 503".to_string());
        assert!(err.to_string().contains("503"));
    }
}

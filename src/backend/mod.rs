pub mod http;
pub mod local;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FrontendError;

/// Body of a greet call: the name as captured, even when empty. Built at
/// submission time and dropped once sent.
#[derive(Debug, Clone, Serialize)]
pub struct GreetRequest {
    pub name: String,
}

/// Reply to a greet call. Held only until it is written to the output
/// port, then dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct GreetReply {
    pub greeting: String,
}

/// The remote greeting service. Could be an HTTP server, an in-process
/// stand-in, or a test script; the coordinator never knows which.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn greet(&self, name: &str) -> Result<String, FrontendError>;
}

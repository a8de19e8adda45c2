use async_trait::async_trait;

use super::Backend;
use crate::error::FrontendError;

/// An in-process greeter for running without a server. Produces the same
/// reply shape the real service does.
pub struct LocalBackend;

#[async_trait]
impl Backend for LocalBackend {
    async fn greet(&self, name: &str) -> Result<String, FrontendError> {
        Ok(format!("Hello, {name}!"))
    }
}

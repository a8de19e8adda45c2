use async_trait::async_trait;
use serde::Deserialize;

use super::{Backend, GreetReply, GreetRequest};
use crate::error::FrontendError;

const GREET_PATH: &str = "/greet";

/// Error body the service sends alongside non-success statuses.
#[derive(Deserialize)]
struct ErrorReply {
    error: String,
}

/// The greeting service over HTTP: `POST {base}/greet` with a JSON body,
/// JSON reply back. One request per submission, no retries.
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.base
    }

    fn url(&self) -> String {
        format!("{}{}", self.base, GREET_PATH)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn greet(&self, name: &str) -> Result<String, FrontendError> {
        let body = GreetRequest {
            name: name.to_string(),
        };

        let resp = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| FrontendError::RemoteCallFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            // Prefer the service's own error field over raw body text
            let reason = serde_json::from_str::<ErrorReply>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(FrontendError::RemoteCallFailed(format!(
                "server returned {status}: {reason}"
            )));
        }

        let reply: GreetReply = resp
            .json()
            .await
            .map_err(|e| FrontendError::RemoteCallFailed(format!("malformed reply: {e}")))?;

        Ok(reply.greeting)
    }
}

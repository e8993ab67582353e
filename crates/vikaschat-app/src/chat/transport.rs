use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use vikaschat_models::{ChatRequest, Message};

/// Transport seam between the session and the proxy endpoint, so tests can
/// script replies without a server.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send the full history and return the assistant reply text.
    async fn send(&self, messages: &[Message]) -> Result<String>;
}

/// HTTP transport posting to the widget's own chat endpoint.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, messages: &[Message]) -> Result<String> {
        let request = ChatRequest {
            messages: messages.to_vec(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("chat endpoint unreachable")?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .context("chat endpoint returned a non-JSON body")?;

        // The proxy only uses {error} for malformed input; everything else
        // arrives as a 200 {message}.
        if let Some(error) = body.get("error").and_then(|v| v.as_str()) {
            bail!("chat endpoint rejected the request ({}): {}", status, error);
        }

        body.get("message")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .context("chat endpoint response had no message")
    }
}

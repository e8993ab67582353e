use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use vikaschat_models::Message;

pub mod anthropic;

pub use anthropic::{AnthropicClient, ANTHROPIC_API_URL, ANTHROPIC_VERSION};

/// Completion client trait - the seam between the proxy route and the
/// hosted completion API. Implementations carry their own persona/system
/// configuration; callers only supply the conversation so far.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the conversation upstream and return the assistant's reply text.
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}

/// Errors the upstream call can surface. The proxy never forwards these to
/// the browser; they exist for server-side logging and for tests.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("upstream API error ({status}): {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("upstream response had no content blocks")]
    EmptyContent,
    #[error("first content block was not text (type: {0})")]
    NonTextContent(String),
}

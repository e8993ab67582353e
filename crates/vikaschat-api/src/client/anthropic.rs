use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use vikaschat_models::Message;

use crate::client::{CompletionClient, CompletionError};

/// Default base URL for the Anthropic Messages API.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
/// API version header value expected by the Messages endpoint.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic completion client. Model, output limit and the persona system
/// prompt are fixed at construction time; every request carries them.
pub struct AnthropicClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    system: String,
    base_url: String,
    client: reqwest::Client,
}

/// Success shape of the Messages endpoint: a sequence of content blocks.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: u32,
        system: String,
        base_url: String,
    ) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            max_tokens,
            system,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn get_messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn build_request(&self, messages: &[Message]) -> Value {
        // Map the widget's messages 1:1; only user/assistant roles are
        // expected here, the persona travels in the top-level system field.
        let upstream_messages: Vec<Value> = messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role,
                    "content": msg.content,
                })
            })
            .collect();

        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": self.system,
            "messages": upstream_messages,
        })
    }

    /// Take the first content block's text verbatim. A missing, empty or
    /// non-text first block counts as an upstream failure rather than
    /// propagating an unexpected shape further.
    fn extract_reply(response: MessagesResponse) -> Result<String> {
        let block = response
            .content
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyContent)?;

        if block.block_type != "text" {
            return Err(CompletionError::NonTextContent(block.block_type).into());
        }

        block
            .text
            .ok_or_else(|| CompletionError::NonTextContent("text without body".to_string()).into())
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let request = self.build_request(messages);

        let response = self
            .client
            .post(self.get_messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("upstream request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::UpstreamStatus { status, body }.into());
        }

        let response_text = response.text().await?;
        let response_json: MessagesResponse = serde_json::from_str(&response_text)
            .with_context(|| format!("failed to parse upstream response: {}", response_text))?;

        Self::extract_reply(response_json)
    }
}

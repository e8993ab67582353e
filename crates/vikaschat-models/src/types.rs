use serde::{Deserialize, Deserializer, Serialize};

/// Role string for customer-authored messages.
pub const ROLE_USER: &str = "user";
/// Role string for assistant-authored messages.
pub const ROLE_ASSISTANT: &str = "assistant";

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        _ => Ok(String::new()),
    }
}

/// A single chat message. The sequence a session holds is append-only:
/// insertion order is display order and the order sent upstream.
/// Roles are carried as plain strings and passed through 1:1; the widget
/// only ever produces "user" and "assistant".
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_ASSISTANT.to_string(),
            content: content.into(),
        }
    }
}

/// Request body accepted by the proxy endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Normal (and fallback) proxy response shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatReply {
    pub message: String,
}

/// Proxy response shape for malformed input only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatError {
    pub error: String,
}

// Models module - data structures shared by the chat widget and the proxy
pub mod types;

// Re-export commonly used types
pub use types::{ChatError, ChatReply, ChatRequest, Message, ROLE_ASSISTANT, ROLE_USER};

use std::sync::Arc;

use vikaschat_models::Message;

use crate::chat::transport::ChatTransport;
use crate::config;

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A user message was appended and a reply (or fallback) followed
    Sent,
    /// Empty input or a request already in flight; history untouched
    Ignored,
}

/// In-memory chat session for the active client. Holds the growing message
/// sequence and coordinates submission: messages are append-only, insertion
/// order is display order, and at most one submission is outstanding.
pub struct ChatSession {
    pub(crate) messages: Vec<Message>,
    pub(crate) in_flight: bool,
    transport: Arc<dyn ChatTransport>,
}

impl ChatSession {
    /// Create a session seeded with the assistant greeting.
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            messages: vec![Message::assistant(config::GREETING)],
            in_flight: false,
            transport,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit user input. Whitespace-only input and submissions while a
    /// request is in flight are ignored. Otherwise the trimmed text is
    /// appended, the full history goes to the proxy, and exactly one
    /// assistant entry follows: the reply on success, the local apology on
    /// failure. The in-flight flag is cleared on both paths.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() || self.in_flight {
            return SubmitOutcome::Ignored;
        }

        self.messages.push(Message::user(text));
        self.in_flight = true;

        let reply = match self.transport.send(&self.messages).await {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("❌ Chat request failed: {:#}", e);
                config::LOCAL_APOLOGY.to_string()
            }
        };

        self.messages.push(Message::assistant(reply));
        self.in_flight = false;

        SubmitOutcome::Sent
    }
}

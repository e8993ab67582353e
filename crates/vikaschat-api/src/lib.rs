//! # vikaschat-api
//!
//! Client for the hosted completion API the chat proxy forwards to
//! (Anthropic Messages API).
//!
//! - **Trait seam**: a single `CompletionClient` trait so the proxy (and
//!   its tests) can swap the real client for a stub
//! - **Fixed persona**: the system prompt, model id and output limit are
//!   set once at construction and attached to every request
//! - **Strict extraction**: the first content block of a successful
//!   response must be a text block; anything else is an upstream failure

pub mod client;

// Re-export commonly used types
pub use client::{
    AnthropicClient, CompletionClient, CompletionError, ANTHROPIC_API_URL, ANTHROPIC_VERSION,
};

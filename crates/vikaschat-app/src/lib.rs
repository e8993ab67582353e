//! Chat widget for VIKAS CSC - Fastrac Digital Service Provider.
//!
//! Two halves, wired through one HTTP endpoint:
//! - a stateless proxy (`web`) that validates a message list, attaches the
//!   fixed persona and forwards it to the hosted completion API, degrading
//!   to canned replies instead of ever hard-failing the chat
//! - a stateful chat session (`chat`) that appends messages in order,
//!   permits one submission in flight and falls back to a local apology
//!   when the round trip fails

pub mod chat;
pub mod cli;
pub mod config;
pub mod repl;
pub mod transcript;
pub mod web;

pub use cli::Cli;
pub use config::ProxyConfig;

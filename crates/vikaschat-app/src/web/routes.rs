use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use vikaschat_api::CompletionClient;
use vikaschat_models::{ChatError, ChatReply, Message};

use crate::config;
use crate::transcript::TranscriptLogger;

/// Application state shared across routes. The proxy itself is stateless;
/// this is immutable configuration plus the optional upstream client.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential is configured - the proxy then serves the
    /// canned service-directory reply instead of calling upstream
    pub client: Option<Arc<dyn CompletionClient>>,
    pub transcript: Option<Arc<Mutex<TranscriptLogger>>>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/", get(serve_index))
        .with_state(state)
}

/// POST /api/chat - validate the message list, forward it upstream with the
/// fixed persona, normalize the result. Every failure past validation is
/// absorbed into a 200 apology; the browser never sees a raw error.
async fn chat_handler(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let messages = match parse_messages(&payload) {
        Ok(messages) => messages,
        Err(reason) => {
            let error = ChatError {
                error: reason.to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let Some(client) = &state.client else {
        eprintln!("⚠️  {} not configured, serving canned reply", config::API_KEY_ENV);
        return reply(&state, &messages, config::NO_CREDENTIAL_MESSAGE.to_string()).await;
    };

    match client.complete(&messages).await {
        Ok(text) => reply(&state, &messages, text).await,
        Err(e) => {
            eprintln!("❌ Chat API error: {:#}", e);
            reply(&state, &messages, config::UPSTREAM_APOLOGY.to_string()).await
        }
    }
}

/// Extract and validate `messages`. Missing field, a non-array value, or
/// elements that don't carry role+content all count as malformed input.
fn parse_messages(payload: &Value) -> Result<Vec<Message>, &'static str> {
    let messages = payload.get("messages").ok_or("Invalid messages format")?;
    if !messages.is_array() {
        return Err("Invalid messages format");
    }
    serde_json::from_value(messages.clone()).map_err(|_| "Invalid messages format")
}

async fn reply(state: &AppState, messages: &[Message], text: String) -> Response {
    if let Some(transcript) = &state.transcript {
        let mut transcript = transcript.lock().await;
        if let Some(last) = messages.last() {
            transcript.log(&last.role, &last.content).await;
        }
        transcript.log("assistant", &text).await;
    }

    (StatusCode::OK, Json(ChatReply { message: text })).into_response()
}

/// GET / - Serve the chat page
async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

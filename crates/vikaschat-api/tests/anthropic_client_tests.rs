mod fixtures;

use fixtures::CompletionMockServer;
use pretty_assertions::assert_eq;
use serde_json::json;

use vikaschat_api::{AnthropicClient, CompletionClient, CompletionError};
use vikaschat_models::Message;

fn test_client(base_url: String) -> AnthropicClient {
    AnthropicClient::new(
        "test-api-key".to_string(),
        "claude-3-5-sonnet-20241022".to_string(),
        1024,
        "You are the service-center assistant.".to_string(),
        base_url,
    )
}

#[tokio::test]
async fn test_complete_returns_first_text_block() {
    let server = CompletionMockServer::new().await;
    server.mock_success("Yeh documents chahiye...").await;

    let client = test_client(server.uri());
    let reply = client
        .complete(&[Message::user("Aadhaar card ke liye kya documents chahiye?")])
        .await
        .unwrap();

    assert_eq!(reply, "Yeh documents chahiye...");
}

#[tokio::test]
async fn test_complete_sends_fixed_model_limit_and_persona() {
    let server = CompletionMockServer::new().await;
    server
        .mock_success_expecting(
            json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 1024,
                "system": "You are the service-center assistant.",
                "messages": [
                    {"role": "user", "content": "Namaste"},
                    {"role": "assistant", "content": "Namaste ji!"},
                    {"role": "user", "content": "PAN card?"}
                ]
            }),
            "Bilkul, PAN card ke liye...",
        )
        .await;

    let client = test_client(server.uri());
    let history = vec![
        Message::user("Namaste"),
        Message::assistant("Namaste ji!"),
        Message::user("PAN card?"),
    ];

    let reply = client.complete(&history).await.unwrap();
    assert_eq!(reply, "Bilkul, PAN card ke liye...");
}

#[tokio::test]
async fn test_complete_fails_on_non_success_status() {
    let server = CompletionMockServer::new().await;
    server.mock_status(500).await;

    let client = test_client(server.uri());
    let err = client.complete(&[Message::user("hello")]).await.unwrap_err();

    match err.downcast_ref::<CompletionError>() {
        Some(CompletionError::UpstreamStatus { status, .. }) => {
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected UpstreamStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_fails_on_rate_limited_status() {
    let server = CompletionMockServer::new().await;
    server.mock_status(429).await;

    let client = test_client(server.uri());
    assert!(client.complete(&[Message::user("hello")]).await.is_err());
}

#[tokio::test]
async fn test_complete_fails_on_malformed_body() {
    let server = CompletionMockServer::new().await;
    server.mock_malformed_body().await;

    let client = test_client(server.uri());
    assert!(client.complete(&[Message::user("hello")]).await.is_err());
}

#[tokio::test]
async fn test_complete_fails_on_non_text_first_block() {
    let server = CompletionMockServer::new().await;
    server.mock_non_text_first_block().await;

    let client = test_client(server.uri());
    let err = client.complete(&[Message::user("hello")]).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompletionError>(),
        Some(CompletionError::NonTextContent(kind)) if kind == "tool_use"
    ));
}

#[tokio::test]
async fn test_complete_fails_on_unreachable_server() {
    // Nothing is listening on this port
    let client = test_client("http://127.0.0.1:9".to_string());
    assert!(client.complete(&[Message::user("hello")]).await.is_err());
}

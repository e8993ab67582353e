use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server utilities for testing the completion client
pub struct CompletionMockServer {
    server: MockServer,
}

impl CompletionMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful Messages API response with a single text block
    pub async fn mock_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_test123",
                "type": "message",
                "role": "assistant",
                "content": [{
                    "type": "text",
                    "text": response_content
                }],
                "model": "claude-3-5-sonnet-20241022",
                "stop_reason": "end_turn",
                "usage": {
                    "input_tokens": 10,
                    "output_tokens": 20
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Like `mock_success`, but also asserts on parts of the request body
    pub async fn mock_success_expecting(
        &self,
        expected_body: serde_json::Value,
        response_content: &str,
    ) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_partial_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": response_content}]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an error response with the given status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "type": "error",
                "error": {
                    "type": "api_error",
                    "message": "something went wrong"
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not valid JSON
    pub async fn mock_malformed_body(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose first content block is not text
    pub async fn mock_non_text_first_block(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    {"type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {}},
                    {"type": "text", "text": "unreachable"}
                ]
            })))
            .mount(&self.server)
            .await;
    }
}

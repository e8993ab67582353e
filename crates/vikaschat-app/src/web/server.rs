use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use vikaschat_api::{AnthropicClient, CompletionClient};

use crate::config::{self, ProxyConfig};
use crate::transcript::TranscriptLogger;
use crate::web::routes::{self, AppState};

/// Web server instance
pub struct WebServer {
    bind_addr: SocketAddr,
    state: AppState,
}

impl WebServer {
    /// Create a new web server. A missing credential is not a failure: the
    /// proxy comes up in canned-reply mode.
    pub fn new(
        bind_addr: SocketAddr,
        proxy_config: ProxyConfig,
        transcript: Option<TranscriptLogger>,
    ) -> Self {
        let client = proxy_config.api_key.as_ref().map(|api_key| {
            Arc::new(AnthropicClient::new(
                api_key.clone(),
                proxy_config.model.clone(),
                proxy_config.max_tokens,
                config::SYSTEM_PROMPT.to_string(),
                proxy_config.api_url.clone(),
            )) as Arc<dyn CompletionClient>
        });

        Self {
            bind_addr,
            state: AppState {
                client,
                transcript: transcript.map(|logger| Arc::new(Mutex::new(logger))),
            },
        }
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let app = routes::create_router(self.state);

        // Allow the widget to be embedded on other center pages
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = app.layer(cors);

        println!("🌐 Chat widget serving on http://{}", self.bind_addr);
        println!("   Chat endpoint: http://{}/api/chat", self.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

//! gemini-chat-server entry point.
//!
//! Startup order:
//! 1. Load settings from the environment.
//! 2. Install the tracing subscriber.
//! 3. Build the Gemini client and chat service.
//! 4. Serve HTTP until a shutdown signal arrives.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use gemini_chat::observability::init_tracing;
use gemini_chat::server::{self, AppState};
use gemini_chat::{ChatService, GeminiClient, ServerSettings, model_registry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServerSettings::from_env().await?;
    init_tracing(&settings.log);

    info!(version = env!("CARGO_PKG_VERSION"), "gemini-chat-server starting");

    let client = GeminiClient::from_settings(&settings)?;
    if !client.has_api_key() {
        warn!("GOOGLE_API_KEY is not set; chat requests will fail until it is configured");
    }

    let service = ChatService::new(model_registry(), Arc::new(client));
    let app = server::router(AppState::new(service, settings.max_upload_bytes));

    let listener = TcpListener::bind(settings.bind_address).await?;
    info!(addr = %settings.bind_address, "HTTP server listening");

    server::serve(listener, app).await?;

    info!("gemini-chat-server stopped");
    Ok(())
}

//! HTTP surface.
//!
//! | Route | Purpose |
//! |---|---|
//! | `POST /api/chat` | multipart (`message`, `modelId`, `files`) or JSON chat submission |
//! | `GET /api/chat` | `405`, the endpoint only accepts submissions |
//! | `GET /api/models` | model catalog in display order plus the default id |
//! | `GET /api/file-types` | upload allow-list for the picker |
//!
//! Failures are rendered as `{"error": "..."}` with the status class of the
//! underlying [`crate::Error`].

mod error;
mod extract;
mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::chat::ChatService;

pub use extract::{ChatSubmission, SubmissionRejection};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: ChatService,
    /// Upper bound on a whole request body, multipart framing included.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(service: ChatService, max_upload_bytes: usize) -> Self {
        Self {
            service,
            max_upload_bytes,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let limit = state.max_upload_bytes;

    Router::new()
        .route("/api/chat", post(routes::chat).get(routes::chat_get))
        .route("/api/models", get(routes::models))
        .route("/api/file-types", get(routes::file_types))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serves `app` until Ctrl-C or SIGTERM, then drains in-flight requests.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}

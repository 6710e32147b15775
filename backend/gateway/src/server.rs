//! Main HTTP server.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use inkwiz_core::MAX_UPLOAD_BYTES;
use inkwiz_understanding::ImageTextService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::admission::Admission;
use crate::{health_api, landing, process};

/// Application state shared across routes. Read-only after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub service: Arc<ImageTextService>,
    pub admission: Admission,
    pub upload_limit: usize,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(service: ImageTextService, max_concurrent_requests: usize) -> Self {
        Self {
            service: Arc::new(service),
            admission: Admission::new(max_concurrent_requests),
            upload_limit: MAX_UPLOAD_BYTES,
            started_at: Instant::now(),
        }
    }

    /// Override the request body ceiling. Production uses [`MAX_UPLOAD_BYTES`].
    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.upload_limit = bytes;
        self
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: GatewayState) -> Router {
    let upload_limit = state.upload_limit;
    Router::new()
        .route("/", get(landing::index))
        .route(
            "/process",
            post(process::process_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/health", get(health_api::get_health))
        // `ApiError::log` already writes the failure line for 5xx responses.
        .layer(TraceLayer::new_for_http().on_failure(()))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
#[instrument(skip(state))]
pub async fn start_server(addr: &str, state: GatewayState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Inkwiz HTTP server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Inkwiz HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

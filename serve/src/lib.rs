//! HTTP server for PromptForge (axum).
//!
//! Listens on http://127.0.0.1:8080 and exposes the analysis boundary:
//! `POST /analyze` (remote LLM path), `POST /analyze/local` (heuristic
//! engine), `GET /health`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod handlers;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use app::{router, AppState};

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

/// Runs the server on an existing listener. Used by tests (bind to
/// 127.0.0.1:0 first, then pass the listener). When `once` is true, the
/// server exits after the first analysis request completes (`/health`
/// probes do not count).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("HTTP server listening on http://{}", addr);
    if once {
        info!("will exit after first analysis request is done (once mode, used by tests)");
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let state = Arc::new(AppState::new(if once { Some(shutdown_tx) } else { None }));
    let app = router(state);

    if once {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await?;
        info!("analysis request done, exiting (once mode)");
    } else {
        axum::serve(listener, app).await?;
    }
    Ok(())
}

/// Runs the server. Applies `.env`/XDG config to the environment first so
/// the gateway key can live in either, then listens on `addr` (default
/// 127.0.0.1:8080).
pub async fn run_serve(
    addr: Option<&str>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = config::load_and_apply(config::APP_NAME, None) {
        tracing::warn!("config load failed, continuing with process env only: {e}");
    }
    let addr = addr.unwrap_or(DEFAULT_HTTP_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, once).await
}

//! Axum app: shared state, router, and CORS.
//!
//! Routes: `POST /analyze` (gateway path), `POST /analyze/local`
//! (heuristic engine), `GET /health`. CORS is permissive — the browser
//! front-end is an external collaborator served from elsewhere.

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{analyze_local, analyze_remote, health};

/// Shared state for the HTTP server.
pub(crate) struct AppState {
    /// When set, the first completed analysis request sends on this to
    /// signal server exit (once mode).
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl AppState {
    pub(crate) fn new(shutdown_tx: Option<oneshot::Sender<()>>) -> Self {
        Self {
            shutdown_tx: Mutex::new(shutdown_tx),
        }
    }

    /// Signals once-mode shutdown, if armed. Safe to call on every request.
    pub(crate) fn signal_done(&self) {
        if let Ok(mut guard) = self.shutdown_tx.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
    }
}

/// Builds the router with the analysis routes and a permissive CORS layer.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze_remote))
        .route("/analyze/local", post(analyze_local))
        .layer(cors)
        .with_state(state)
}

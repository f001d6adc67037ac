//! Request handlers: validation, engine dispatch, and the status mapping
//! the front-end relies on (429 and 402 must stay distinguishable from a
//! generic failure).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

use promptforge::{analyze, AnalyzeRequest, ErrorBody, GatewayClient, GatewayConfig, RemoteError};

use super::app::AppState;

pub(crate) async fn health() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

/// `POST /analyze/local`: the heuristic engine. Total over any non-blank
/// prompt, so the only failure is validation.
pub(crate) async fn analyze_local(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let response = match validate(&req) {
        Err(rejection) => rejection,
        Ok(()) => Json(analyze(&req.prompt, &req.objective)).into_response(),
    };
    state.signal_done();
    response
}

/// `POST /analyze`: the remote LLM path, proxied through the gateway.
pub(crate) async fn analyze_remote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let response = match validate(&req) {
        Err(rejection) => rejection,
        Ok(()) => run_remote(&req).await,
    };
    state.signal_done();
    response
}

fn validate(req: &AnalyzeRequest) -> Result<(), Response> {
    if req.prompt.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Prompt is required and must not be empty",
        ));
    }
    Ok(())
}

async fn run_remote(req: &AnalyzeRequest) -> Response {
    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };
    match GatewayClient::new(config)
        .analyze(&req.prompt, &req.objective)
        .await
    {
        Ok(analysis) => Json(analysis).into_response(),
        Err(RemoteError::RateLimited) => error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.",
        ),
        Err(RemoteError::PaymentRequired) => error_response(
            StatusCode::PAYMENT_REQUIRED,
            "Payment required. Please add funds to continue.",
        ),
        Err(e) => {
            error!("remote analysis failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "AI analysis failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

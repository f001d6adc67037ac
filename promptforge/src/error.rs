//! Error types for the remote analysis boundary.
//!
//! The heuristic core raises no errors: detectors are total over arbitrary
//! input and "pattern not found" patches are silent no-ops. Everything here
//! concerns the gateway path, and the variants map one-to-one to what the
//! HTTP boundary must surface distinctly to the end user.

use thiserror::Error;

/// Failure of one remote analysis call.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No API key in the environment; configuration problem, not transient.
    #[error("PROMPTFORGE_API_KEY is not configured")]
    MissingApiKey,

    /// Gateway returned 429.
    #[error("rate limit exceeded")]
    RateLimited,

    /// Gateway returned 402 (out of credits).
    #[error("payment required")]
    PaymentRequired,

    /// Any other non-2xx reply from the gateway.
    #[error("gateway returned status {status}: {body}")]
    Gateway { status: u16, body: String },

    /// Network-level failure (connect, TLS, timeout, body read).
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx reply without any assistant content to parse.
    #[error("no content in gateway response")]
    EmptyResponse,
}

//! CLI run errors.

use thiserror::Error;

/// Failure of one CLI invocation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no prompt given: pass text, use --message/--file, or pipe stdin")]
    NoPrompt,

    #[error("read prompt file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Remote analysis failed; the message is already fit to show the user
    /// (rate-limit and quota messages come through distinctly).
    #[error("remote analysis failed: {0}")]
    Remote(String),

    #[error("server failed: {0}")]
    Serve(String),

    #[error("write output {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize analysis: {0}")]
    Json(#[from] serde_json::Error),
}

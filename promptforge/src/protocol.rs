//! HTTP boundary types shared by `serve` and the CLI remote backend.

use serde::{Deserialize, Serialize};

/// Analysis request: the prompt to analyze and an optional objective.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub prompt: String,
    #[serde(default)]
    pub objective: String,
}

/// Error body for any failed request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

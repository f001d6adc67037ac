//! RemoteBackend: analyze via a running `promptforge serve` over HTTP.

use async_trait::async_trait;
use promptforge::{AnalyzeRequest, ErrorBody, RemoteAnalysis};
use std::time::Duration;

use super::{AnalysisReport, AnalyzeBackend};
use crate::error::RunError;

/// Max time for one analysis round-trip; slightly above the server's own
/// gateway timeout so its error reaches us before we give up.
const REQUEST_TIMEOUT_SECS: u64 = 330;

pub struct RemoteBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AnalyzeBackend for RemoteBackend {
    async fn analyze(&self, prompt: &str, objective: &str) -> Result<AnalysisReport, RunError> {
        let request = AnalyzeRequest {
            prompt: prompt.to_string(),
            objective: objective.to_string(),
        };
        let response = self
            .http
            .post(self.analyze_url())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&request)
            .send()
            .await
            .map_err(|e| RunError::Remote(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RunError::Remote(e.to_string()))?;

        if !status.is_success() {
            // The server sends `{ "error": ... }` with a user-facing message
            // (rate limit and quota come through distinctly); fall back to
            // the bare status when the body is not that shape.
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("server returned status {status}"));
            return Err(RunError::Remote(message));
        }

        let analysis: RemoteAnalysis =
            serde_json::from_str(&body).map_err(|e| RunError::Remote(e.to_string()))?;
        Ok(AnalysisReport::Remote(analysis))
    }
}

//! Backend abstraction used by the `promptforge` CLI.
//!
//! The CLI supports two execution modes:
//! - **LocalBackend**: run the heuristic rule engine in-process (default).
//! - **RemoteBackend**: send the prompt to a running `promptforge serve`,
//!   which analyzes it through the LLM gateway.
//!
//! This module keeps CLI orchestration (`main.rs`) independent of *how* an
//! analysis is performed. Callers depend only on [`AnalyzeBackend`], so
//! switching local/remote is a one-line decision.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use promptforge::{AnalysisResult, RemoteAnalysis, Suggestion};

use crate::error::RunError;

/// Output of one analysis, local or remote. The remote form carries the
/// extra score/summary fields; everything else is shared.
#[derive(Debug)]
pub enum AnalysisReport {
    Local(AnalysisResult),
    Remote(RemoteAnalysis),
}

impl AnalysisReport {
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            AnalysisReport::Local(r) => &r.suggestions,
            AnalysisReport::Remote(r) => &r.suggestions,
        }
    }

    pub fn optimized_prompt(&self) -> &str {
        match self {
            AnalysisReport::Local(r) => &r.optimized_prompt,
            AnalysisReport::Remote(r) => &r.optimized_prompt,
        }
    }

    /// Score and summary, present only for remote analyses.
    pub fn score_and_summary(&self) -> Option<(u8, &str)> {
        match self {
            AnalysisReport::Local(_) => None,
            AnalysisReport::Remote(r) => Some((r.score, &r.summary)),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, RunError> {
        let value = match self {
            AnalysisReport::Local(r) => serde_json::to_value(r)?,
            AnalysisReport::Remote(r) => serde_json::to_value(r)?,
        };
        Ok(value)
    }
}

#[async_trait]
pub trait AnalyzeBackend: Send + Sync {
    /// Analyze one `(prompt, objective)` pair.
    async fn analyze(&self, prompt: &str, objective: &str) -> Result<AnalysisReport, RunError>;
}

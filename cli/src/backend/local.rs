//! LocalBackend: run the heuristic engine in-process.

use async_trait::async_trait;

use super::{AnalysisReport, AnalyzeBackend};
use crate::error::RunError;

pub struct LocalBackend;

#[async_trait]
impl AnalyzeBackend for LocalBackend {
    async fn analyze(&self, prompt: &str, objective: &str) -> Result<AnalysisReport, RunError> {
        Ok(AnalysisReport::Local(promptforge::analyze(prompt, objective)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_backend_returns_the_engine_result() {
        let report = LocalBackend
            .analyze("Responda as perguntas do usuário.", "")
            .await
            .unwrap();
        assert!(!report.suggestions().is_empty());
        assert!(report
            .optimized_prompt()
            .starts_with("Você é um agente de IA altamente especializado."));
    }
}

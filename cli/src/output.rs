//! Terminal rendering of an analysis report.
//!
//! Severity labels match the product's suggestion cards (Crítico, Atenção,
//! Melhoria, Informação). Rendering returns a String so tests can assert
//! on it; only `main.rs` prints.

use crate::backend::AnalysisReport;

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let suggestions = report.suggestions();

    if suggestions.is_empty() {
        out.push_str("Nenhuma sugestão — o prompt já passa nas verificações estruturais.\n");
    } else {
        out.push_str(&format!("{} sugestões:\n\n", suggestions.len()));
        for s in suggestions {
            out.push_str(&format!("[{}] {}\n", s.kind.label(), s.title));
            out.push_str(&format!("    {}\n", s.description));
            if let Some(original) = &s.original_text {
                out.push_str(&format!("    Original: {original}\n"));
            }
            if let Some(suggested) = &s.suggested_text {
                out.push_str(&format!("    Sugestão: {suggested}\n"));
            }
            out.push('\n');
        }
    }

    if let Some((score, summary)) = report.score_and_summary() {
        out.push_str(&format!("Pontuação: {score}/100\n"));
        if !summary.is_empty() {
            out.push_str(&format!("Resumo: {summary}\n"));
        }
    }
    out
}

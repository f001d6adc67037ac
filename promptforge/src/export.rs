//! Export serialization for an optimized prompt.
//!
//! Plain text export is the prompt itself; the Markdown form wraps it in a
//! small document with a generated-at footer. The timestamp is a parameter
//! so formatting stays deterministic for callers and tests.

use chrono::{DateTime, Local};

/// Markdown document form of an exported prompt.
pub fn markdown_document(prompt: &str, generated_at: DateTime<Local>) -> String {
    format!(
        "# Prompt Otimizado\n\n```\n{prompt}\n```\n\n---\n*Gerado em {}*",
        generated_at.format("%d/%m/%Y, %H:%M:%S")
    )
}

/// Dated export file name: `prompt-YYYY-MM-DD.<ext>`.
pub fn export_file_name(generated_at: DateTime<Local>, extension: &str) -> String {
    format!("prompt-{}.{extension}", generated_at.format("%Y-%m-%d"))
}

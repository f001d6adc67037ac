//! Data model for one analysis run: suggestions and the analysis results.
//!
//! These types are shared between the heuristic engine, the remote gateway
//! path, and the HTTP/CLI boundaries; serde names follow the product's JSON
//! contract (camelCase, `type` for the severity).

use serde::{Deserialize, Serialize};

/// Severity/category of a suggestion. Used only for display ordering and
/// styling; carries no algorithmic weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Critical,
    Warning,
    Improvement,
    Info,
}

impl SuggestionType {
    /// User-facing pt-BR label, as shown on suggestion cards.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionType::Critical => "Crítico",
            SuggestionType::Warning => "Atenção",
            SuggestionType::Improvement => "Melhoria",
            SuggestionType::Info => "Informação",
        }
    }
}

/// One detected issue or improvement opportunity.
///
/// Created in a batch by one analysis run and never mutated afterwards;
/// applied/dismissed state is bookkeeping the caller holds (a set of ids),
/// not part of the suggestion itself.
///
/// **Interaction**: `patch::apply_one` interprets the two optional text
/// fields — both present means replace-first, only `suggested_text` means
/// additive, neither means the suggestion is purely informational.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Stable within one analysis run: `suggestion-N` from the heuristic
    /// engine, `ai-suggestion-N` assigned at the gateway boundary (the
    /// gateway reply itself omits ids, hence the default).
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub description: String,
    /// Literal substring of the prompt that should be replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    /// Replacement or additive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
}

impl Suggestion {
    /// Whether applying this suggestion can change the prompt at all.
    pub fn is_applicable(&self) -> bool {
        self.original_text.is_some() || self.suggested_text.is_some()
    }
}

/// Result of one heuristic analysis run. Fresh per invocation, immutable
/// once returned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub suggestions: Vec<Suggestion>,
    pub optimized_prompt: String,
}

/// Result of one remote (LLM-backed) analysis: the heuristic fields plus a
/// quality score and a one-or-two sentence summary.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAnalysis {
    pub suggestions: Vec<Suggestion>,
    pub optimized_prompt: String,
    /// 0–100 overall prompt quality as judged by the model.
    pub score: u8,
    pub summary: String,
}

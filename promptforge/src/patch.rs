//! Patch synthesizer: applies suggestions back onto a prompt and builds
//! the full optimized rewrite.
//!
//! `apply_all` is an explicit ordered fold of `apply_one`: later steps
//! observe text already mutated by earlier steps, so an earlier edit can
//! shift or remove the substring a later suggestion targets — that later
//! step then silently no-ops. This sequential semantics is part of the
//! contract, not an accident to be fixed.

use crate::analyzer::{CONSTRAINT_TERMS, FORMAT_TERMS, LowerText};
use crate::suggestion::Suggestion;

/// Role sentence prepended by the optimized rewrite.
const OPTIMIZED_ROLE_LINE: &str = "Você é um agente de IA altamente especializado.";

/// Applies one suggestion to a prompt, best effort:
///
/// - both texts present: replace the first literal occurrence of
///   `original_text`; when it is not found, return the prompt unchanged;
/// - only `suggested_text`: additive — role-titled suggestions (title
///   containing `papel` or `role`) prepend, everything else appends, with
///   a blank line between;
/// - neither: the suggestion is informational, return the prompt unchanged.
///
/// Re-applying an additive suggestion duplicates its text; callers track
/// applied ids themselves if they want to prevent that.
pub fn apply_one(prompt: &str, suggestion: &Suggestion) -> String {
    match (&suggestion.original_text, &suggestion.suggested_text) {
        (Some(original), Some(replacement)) => prompt.replacen(original.as_str(), replacement, 1),
        (None, Some(addition)) => {
            if suggestion.title.contains("papel") || suggestion.title.contains("role") {
                format!("{addition}\n\n{prompt}")
            } else {
                format!("{prompt}\n\n{addition}")
            }
        }
        _ => prompt.to_string(),
    }
}

/// Folds `apply_one` over the suggestions in their received order,
/// threading the updated prompt through each step.
pub fn apply_all(prompt: &str, suggestions: &[Suggestion]) -> String {
    suggestions
        .iter()
        .fold(prompt.to_string(), |acc, s| apply_one(&acc, s))
}

/// Synthesizes the "best complete rewrite" of a prompt in one pass.
///
/// Every check runs against the ORIGINAL text (not the accumulating
/// rewrite), in fixed order: prepend a role line when missing, wrap with an
/// objective section when an objective was given and is not already
/// verbatim in the prompt, then append output-format and constraints
/// sections when their keyword sets are absent. The result is independent
/// of which suggestions the user accepts or rejects.
pub fn synthesize_optimized(prompt: &str, objective: &str) -> String {
    let lower = LowerText::new(prompt);
    let mut optimized = prompt.to_string();

    if !lower.as_str().contains("você é") {
        optimized = format!("{OPTIMIZED_ROLE_LINE}\n\n{optimized}");
    }
    if !objective.is_empty() && !prompt.contains(objective) {
        optimized = format!("## Objetivo\n{objective}\n\n## Instruções\n{optimized}");
    }
    if !lower.contains_any(FORMAT_TERMS) {
        optimized.push_str("\n\n## Formato de Saída\nRetorne a resposta de forma estruturada e clara.");
    }
    if !lower.contains_any(CONSTRAINT_TERMS) {
        optimized.push_str(
            "\n\n## Restrições\n- Não invente informações que não foram fornecidas\n- Mantenha a resposta focada no objetivo",
        );
    }
    optimized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionType;

    fn replacement(original: &str, suggested: &str) -> Suggestion {
        Suggestion {
            id: "suggestion-1".to_string(),
            kind: SuggestionType::Warning,
            title: "Instruções vagas detectadas".to_string(),
            description: String::new(),
            original_text: Some(original.to_string()),
            suggested_text: Some(suggested.to_string()),
        }
    }

    fn additive(title: &str, suggested: &str) -> Suggestion {
        Suggestion {
            id: "suggestion-1".to_string(),
            kind: SuggestionType::Improvement,
            title: title.to_string(),
            description: String::new(),
            original_text: None,
            suggested_text: Some(suggested.to_string()),
        }
    }

    #[test]
    fn replaces_only_the_first_occurrence() {
        let s = replacement("pode", "deve");
        assert_eq!(apply_one("pode um, pode dois", &s), "deve um, pode dois");
    }

    #[test]
    fn missing_original_text_is_a_silent_no_op() {
        let s = replacement("inexistente", "deve");
        assert_eq!(apply_one("texto qualquer", &s), "texto qualquer");
    }

    #[test]
    fn role_titled_addition_prepends() {
        let s = additive("Definição de papel ausente", "Você é um revisor.");
        assert_eq!(
            apply_one("Revise o texto.", &s),
            "Você é um revisor.\n\nRevise o texto."
        );
    }

    #[test]
    fn other_additions_append() {
        let s = additive("Formato de saída não especificado", "Retorne JSON.");
        assert_eq!(
            apply_one("Revise o texto.", &s),
            "Revise o texto.\n\nRetorne JSON."
        );
    }

    #[test]
    fn informational_suggestion_leaves_prompt_unchanged() {
        let s = Suggestion {
            id: "suggestion-1".to_string(),
            kind: SuggestionType::Info,
            title: "Nota".to_string(),
            description: "apenas informativo".to_string(),
            original_text: None,
            suggested_text: None,
        };
        assert_eq!(apply_one("Revise o texto.", &s), "Revise o texto.");
    }

    #[test]
    fn additive_double_apply_duplicates_the_text() {
        // Codifies current behavior: re-applying an additive suggestion is
        // not guarded against.
        let s = additive("Formato de saída não especificado", "Retorne JSON.");
        let once = apply_one("Revise.", &s);
        let twice = apply_one(&once, &s);
        assert_eq!(twice.matches("Retorne JSON.").count(), 2);
    }

    #[test]
    fn apply_all_of_nothing_is_identity() {
        assert_eq!(apply_all("qualquer prompt", &[]), "qualquer prompt");
    }

    #[test]
    fn apply_all_threads_text_through_in_order() {
        let first = replacement("pode", "deve");
        let second = replacement("deve revisar", "deve auditar");
        // The second match only exists after the first replacement ran.
        assert_eq!(
            apply_all("pode revisar", &[first, second]),
            "deve auditar"
        );
    }

    #[test]
    fn earlier_step_can_invalidate_a_later_match() {
        let first = replacement("pode revisar", "deve auditar");
        let second = replacement("revisar", "conferir");
        // After the first step "revisar" is gone, so the second silently
        // no-ops.
        assert_eq!(
            apply_all("pode revisar", &[first, second]),
            "deve auditar"
        );
    }

    #[test]
    fn optimized_rewrite_for_bare_prompt_adds_all_sections() {
        let out = synthesize_optimized("Responda as perguntas do usuário.", "");
        assert_eq!(
            out,
            "Você é um agente de IA altamente especializado.\n\n\
             Responda as perguntas do usuário.\n\n\
             ## Formato de Saída\nRetorne a resposta de forma estruturada e clara.\n\n\
             ## Restrições\n- Não invente informações que não foram fornecidas\n- Mantenha a resposta focada no objetivo"
        );
    }

    #[test]
    fn objective_wraps_unless_already_verbatim_in_the_prompt() {
        let out = synthesize_optimized("Você é um revisor. Retorne JSON. Nunca omita.", "auditoria");
        assert!(out.starts_with("## Objetivo\nauditoria\n\n## Instruções\n"));

        let already = synthesize_optimized(
            "Você é um revisor de auditoria. Retorne JSON. Nunca omita.",
            "auditoria",
        );
        assert!(!already.contains("## Objetivo"));
    }

    #[test]
    fn role_line_skipped_when_prompt_already_has_one() {
        let out = synthesize_optimized("Você é um revisor. Retorne JSON. Nunca omita.", "");
        assert_eq!(out, "Você é um revisor. Retorne JSON. Nunca omita.");
    }

    #[test]
    fn format_and_constraint_checks_run_against_the_original_text() {
        // The appended role line contains no format keywords; sections are
        // decided by the original prompt only.
        let out = synthesize_optimized("Retorne sempre JSON. Nunca invente.", "");
        assert!(!out.contains("## Formato de Saída"));
        assert!(!out.contains("## Restrições"));
        assert!(out.starts_with("Você é um agente de IA altamente especializado."));
    }
}

//! Heuristic rule engine: a fixed battery of detectors over a prompt.
//!
//! `analyze` is pure, deterministic, and total over arbitrary input
//! (including the empty string). Detectors run unconditionally in a fixed
//! order; each emits at most one [`Suggestion`], and the evaluation order
//! is the order suggestions appear in the result — there is no re-sorting
//! by severity. Ids are generated by a counter local to one `analyze` call
//! (`suggestion-1`, `suggestion-2`, ...), never shared across calls.
//!
//! User-facing text is pt-BR, matching the product; so is the detection
//! vocabulary in [`patterns`].

mod patterns;

pub(crate) use patterns::{CONSTRAINT_TERMS, FORMAT_TERMS, LowerText};

use crate::patch;
use crate::suggestion::{AnalysisResult, Suggestion, SuggestionType};

use patterns::{
    EXAMPLE_TERMS, ROLE_TERMS, TOOL_JSON_KEYS, TOOL_MARKERS, VAGUE_QUALIFIERS, VAGUE_TERMS,
    WEAK_TERMS,
};

/// Prompt length above which the few-shot detector applies, in Unicode
/// scalar values.
const EXAMPLES_MIN_LEN: usize = 200;

/// Minimum surviving vague-term occurrences for the warning to fire.
const VAGUE_MIN_MATCHES: usize = 3;

/// Id counter scoped to a single analysis run.
struct IdGen(usize);

impl IdGen {
    fn next(&mut self) -> String {
        self.0 += 1;
        format!("suggestion-{}", self.0)
    }
}

/// Analyzes a prompt (and optional objective) and returns suggestions plus
/// an optimized rewrite.
///
/// The optimized prompt is synthesized from the original text and the same
/// structural checks ([`patch::synthesize_optimized`]), not by replaying
/// the suggestion list — it is a best complete rewrite, independent of
/// which suggestions the caller later applies.
pub fn analyze(prompt: &str, objective: &str) -> AnalysisResult {
    let lower = LowerText::new(prompt);
    let mut ids = IdGen(0);

    let mut suggestions: Vec<Suggestion> = [
        check_role_definition(prompt, &lower, &mut ids),
        check_vague_instructions(prompt, &lower, &mut ids),
        check_weak_verbs(prompt, &lower, &mut ids),
        check_output_format(prompt, &lower, &mut ids),
        check_tool_calls(prompt, &lower, &mut ids),
        check_constraints(prompt, &lower, &mut ids),
        check_examples(prompt, &lower, &mut ids),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !objective.is_empty() {
        suggestions.extend(check_objective_alignment(&lower, objective, &mut ids));
    }

    AnalysisResult {
        optimized_prompt: patch::synthesize_optimized(prompt, objective),
        suggestions,
    }
}

/// Critical: the prompt never tells the agent who it is.
fn check_role_definition(prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    if lower.contains_any(ROLE_TERMS) {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Critical,
        title: "Definição de papel ausente".to_string(),
        description: "Prompts efetivos começam definindo claramente o papel do agente. Adicione \
                      uma introdução como 'Você é um assistente especializado em...'"
            .to_string(),
        original_text: None,
        suggested_text: Some(format!("Você é um assistente de IA especializado. {prompt}")),
    })
}

/// Warning: three or more hedging verbs, ignoring occurrences followed
/// somewhere later by a "specific/exact/precise" qualifier.
fn check_vague_instructions(
    _prompt: &str,
    lower: &LowerText,
    ids: &mut IdGen,
) -> Option<Suggestion> {
    let matches: Vec<&str> = lower
        .bounded_hits(VAGUE_TERMS)
        .into_iter()
        .filter(|hit| !lower.suffix_contains_any(hit.lower_end, VAGUE_QUALIFIERS))
        .map(|hit| hit.text)
        .collect();
    if matches.len() < VAGUE_MIN_MATCHES {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Warning,
        title: "Instruções vagas detectadas".to_string(),
        description: "Use verbos imperativos e instruções diretas ao invés de termos vagos como \
                      'faça', 'pode', 'me ajude'."
            .to_string(),
        original_text: Some(matches[..VAGUE_MIN_MATCHES].join(", ")),
        suggested_text: Some("Execute, Analise, Retorne, Calcule, Gere...".to_string()),
    })
}

/// Improvement: modal hedges like "tente"/"talvez" weaken instructions.
fn check_weak_verbs(_prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    let matches: Vec<&str> = lower
        .bounded_hits(WEAK_TERMS)
        .into_iter()
        .map(|hit| hit.text)
        .collect();
    if matches.is_empty() {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Improvement,
        title: "Verbos fracos encontrados".to_string(),
        description: "Substitua verbos como 'tente' e 'talvez' por instruções assertivas que \
                      garantam comportamento consistente."
            .to_string(),
        original_text: Some(matches.join(", ")),
        suggested_text: Some("sempre, obrigatoriamente, certifique-se de...".to_string()),
    })
}

/// Improvement: no mention of the expected output format anywhere.
fn check_output_format(_prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    if lower.contains_any(FORMAT_TERMS) {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Improvement,
        title: "Formato de saída não especificado".to_string(),
        description: "Defina claramente o formato esperado da resposta (JSON, Markdown, lista, \
                      etc.) para garantir consistência."
            .to_string(),
        original_text: None,
        suggested_text: Some(
            "Retorne a resposta no formato JSON com a seguinte estrutura: { ... }".to_string(),
        ),
    })
}

/// Whether the prompt contains a JSON-object shape with one of the tool
/// definition keys: a `{` before the quoted key and a `}` after it.
fn has_tool_json_shape(prompt: &str) -> bool {
    TOOL_JSON_KEYS.iter().any(|key| {
        prompt.match_indices(key).any(|(at, matched)| {
            prompt[..at].contains('{') && prompt[at + matched.len()..].contains('}')
        })
    })
}

/// Critical: tool-call syntax is present but no parameter definitions are.
fn check_tool_calls(prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    if !lower.contains_any(TOOL_MARKERS) && !has_tool_json_shape(prompt) {
        return None;
    }
    if prompt.contains("parameters") || prompt.contains("parâmetros") {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Critical,
        title: "Estrutura de tool call incompleta".to_string(),
        description: "Chamadas de tools precisam de definição clara de parâmetros, tipos e \
                      descrições para cada campo."
            .to_string(),
        original_text: None,
        suggested_text: Some(
            r#"{ "name": "tool_name", "parameters": { "param1": { "type": "string", "description": "..." } } }"#
                .to_string(),
        ),
    })
}

/// Info: saying what NOT to do matters as much as saying what to do.
fn check_constraints(_prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    if lower.contains_any(CONSTRAINT_TERMS) {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Info,
        title: "Considere adicionar restrições".to_string(),
        description: "Definir o que o agente NÃO deve fazer é tão importante quanto definir o \
                      que deve fazer. Adicione limites e exceções."
            .to_string(),
        original_text: None,
        suggested_text: Some(
            "Nunca invente informações. Limite a resposta a 500 palavras. Evite linguagem \
             informal."
                .to_string(),
        ),
    })
}

/// Improvement: long prompt with no few-shot examples.
fn check_examples(prompt: &str, lower: &LowerText, ids: &mut IdGen) -> Option<Suggestion> {
    if prompt.chars().count() <= EXAMPLES_MIN_LEN || lower.contains_any(EXAMPLE_TERMS) {
        return None;
    }
    Some(Suggestion {
        id: ids.next(),
        kind: SuggestionType::Improvement,
        title: "Exemplos não encontrados".to_string(),
        description: "Few-shot prompting (adicionar exemplos) melhora significativamente a \
                      qualidade das respostas. Considere adicionar 2-3 exemplos."
            .to_string(),
        original_text: None,
        suggested_text: Some("Exemplo de entrada: '...' → Exemplo de saída: '...'".to_string()),
    })
}

/// Two independent objective-driven checks; both may fire.
fn check_objective_alignment(
    lower: &LowerText,
    objective: &str,
    ids: &mut IdGen,
) -> Vec<Suggestion> {
    let objective_lower = objective.to_lowercase();
    let mut out = Vec::new();
    if objective_lower.contains("técnic") && !lower.as_str().contains("técnic") {
        out.push(Suggestion {
            id: ids.next(),
            kind: SuggestionType::Improvement,
            title: "Alinhar com objetivo técnico".to_string(),
            description: "Seu objetivo menciona aspectos técnicos, mas o prompt não especifica \
                          o nível de tecnicidade esperado."
                .to_string(),
            original_text: None,
            suggested_text: Some(
                "Responda de forma técnica e precisa, incluindo detalhes de implementação \
                 quando relevante."
                    .to_string(),
            ),
        });
    }
    if objective_lower.contains("concis") && !lower.as_str().contains("concis") {
        out.push(Suggestion {
            id: ids.next(),
            kind: SuggestionType::Improvement,
            title: "Alinhar com objetivo de concisão".to_string(),
            description: "Seu objetivo menciona respostas concisas, adicione essa instrução \
                          explicitamente ao prompt."
                .to_string(),
            original_text: None,
            suggested_text: Some(
                "Seja direto e conciso. Evite explicações desnecessárias.".to_string(),
            ),
        });
    }
    out
}

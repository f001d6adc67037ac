//! The analyze → apply-all flow the CLI runs for `--apply-all`.

use cli::{AnalyzeBackend, LocalBackend};
use promptforge::apply_all;

#[tokio::test]
async fn apply_all_folds_every_pending_suggestion_into_the_prompt() {
    let prompt = "Responda as perguntas do usuário.";
    let report = LocalBackend.analyze(prompt, "").await.unwrap();

    let patched = apply_all(prompt, report.suggestions());

    // The role suggestion prepends (its suggested text embeds the whole
    // prompt), the format and constraints suggestions append.
    assert!(patched.starts_with("Você é um assistente de IA especializado."));
    assert!(patched.contains("Retorne a resposta no formato JSON"));
    assert!(patched.contains("Nunca invente informações."));
}

use super::common;
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn e2e_analyze_local_plain_prompt() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    let (status, body) = common::post_json(
        &format!("{url}/analyze/local"),
        &json!({ "prompt": "Responda as perguntas do usuário." }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    // Wire names are camelCase, matching the front-end contract.
    assert!(body.contains("\"optimizedPrompt\""), "body: {}", body);
    assert!(body.contains("\"suggestedText\""), "body: {}", body);

    let result: promptforge::AnalysisResult = serde_json::from_str(&body).unwrap();
    assert!(!result.suggestions.is_empty());
    assert_eq!(result.suggestions[0].kind, promptforge::SuggestionType::Critical);
    assert_eq!(result.suggestions[0].id, "suggestion-1");
    assert!(result
        .optimized_prompt
        .starts_with("Você é um agente de IA altamente especializado."));

    // Once mode: the server exits after the first analysis request.
    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

#[tokio::test]
async fn e2e_analyze_local_passes_objective_through() {
    common::load_dotenv();
    let (url, server_handle) = common::spawn_server_once().await;

    let (status, body) = common::post_json(
        &format!("{url}/analyze/local"),
        &json!({
            "prompt": "Responda as perguntas do usuário.",
            "objective": "resposta técnica"
        }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let result: promptforge::AnalysisResult = serde_json::from_str(&body).unwrap();
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.title == "Alinhar com objetivo técnico"));
    assert!(result.optimized_prompt.starts_with("## Objetivo\nresposta técnica"));

    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

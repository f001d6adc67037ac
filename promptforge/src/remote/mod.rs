//! Remote analysis path: an OpenAI-compatible chat-completions gateway
//! judges the prompt and returns structured suggestions.
//!
//! The gateway is an opaque collaborator; this module owns the boundary
//! only — request shaping, auth, status mapping (429 and 402 are surfaced
//! as distinct error variants so callers can tell the user apart from a
//! generic failure), extraction of the JSON the model may wrap in a
//! Markdown fence, and graceful degradation when the content does not
//! parse: the raw text becomes a single `info` suggestion rather than
//! failing the whole request. Suggestion ids are assigned here
//! (`ai-suggestion-N`); the model's reply does not carry stable ids.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::error;

use crate::error::RemoteError;
use crate::suggestion::{RemoteAnalysis, Suggestion, SuggestionType};

/// Default gateway endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Max time for one gateway round-trip (analysis can take a while).
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Score reported when the model's reply had to be degraded to raw text.
const FALLBACK_SCORE: u8 = 50;

/// Instructions sent to the model. Demands a strict JSON reply so the
/// boundary can parse it; the fallback path covers models that answer in
/// prose anyway.
const SYSTEM_PROMPT: &str = r#"Você é um especialista em engenharia de prompts para agentes de IA e automação. Sua tarefa é analisar prompts e fornecer sugestões detalhadas de melhoria.

Ao analisar um prompt, considere:
1. **Definição de papel**: O prompt define claramente quem o agente é?
2. **Clareza das instruções**: As instruções são específicas e acionáveis?
3. **Estrutura de tool calls**: Se houver ferramentas, estão bem definidas com parâmetros claros?
4. **Formato de saída**: O formato esperado está especificado?
5. **Restrições**: Há limites claros sobre o que fazer e não fazer?
6. **Exemplos (few-shot)**: Há exemplos que ajudam a entender o comportamento esperado?
7. **Contexto e objetivo**: O propósito está claro?

Retorne SEMPRE um JSON válido com a seguinte estrutura:
{
  "suggestions": [
    {
      "type": "critical" | "warning" | "improvement" | "info",
      "title": "Título curto da sugestão",
      "description": "Explicação detalhada do problema e como resolver",
      "originalText": "Texto original problemático (se aplicável)",
      "suggestedText": "Texto sugerido para substituir ou adicionar"
    }
  ],
  "optimizedPrompt": "Versão otimizada completa do prompt",
  "score": 0-100,
  "summary": "Resumo geral da análise em 1-2 frases"
}

Tipos de sugestão:
- "critical": Problemas graves que comprometem a funcionalidade
- "warning": Problemas que podem causar comportamento inconsistente
- "improvement": Melhorias que aumentariam a qualidade
- "info": Dicas e boas práticas opcionais

Seja específico e prático nas sugestões. Forneça textos que podem ser diretamente aplicados."#;

/// Gateway configuration, read from the environment.
///
/// `PROMPTFORGE_API_KEY` is required; `PROMPTFORGE_GATEWAY_URL` and
/// `PROMPTFORGE_MODEL` override the defaults.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub api_key: String,
    pub url: String,
    pub model: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, RemoteError> {
        let api_key = std::env::var("PROMPTFORGE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(RemoteError::MissingApiKey)?;
        Ok(Self {
            api_key,
            url: std::env::var("PROMPTFORGE_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            model: std::env::var("PROMPTFORGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Client for the remote analysis gateway.
pub struct GatewayClient {
    config: GatewayConfig,
    http: reqwest::Client,
}

/// Reply envelope of the chat-completions call; only the first choice's
/// content is used.
#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// The analysis JSON the model is instructed to produce. All fields are
/// defaulted so a partial reply still parses; a fully unparseable reply
/// goes through the fallback instead.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct GatewayAnalysis {
    suggestions: Vec<Suggestion>,
    optimized_prompt: String,
    score: u8,
    summary: String,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Runs one remote analysis of `(prompt, objective)`.
    pub async fn analyze(
        &self,
        prompt: &str,
        objective: &str,
    ) -> Result<RemoteAnalysis, RemoteError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_message(prompt, objective) },
            ],
            "temperature": 0.7,
        });

        let response = self
            .http
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(RemoteError::RateLimited);
        }
        if status.as_u16() == 402 {
            return Err(RemoteError::PaymentRequired);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "gateway error");
            return Err(RemoteError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatReply = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(RemoteError::EmptyResponse)?;

        Ok(parse_analysis(&content, prompt))
    }
}

/// User message embedding the prompt and, when given, the objective.
fn user_message(prompt: &str, objective: &str) -> String {
    if objective.is_empty() {
        format!("Analise o seguinte prompt:\n\n{prompt}")
    } else {
        format!(
            "Analise o seguinte prompt considerando o objetivo: \"{objective}\"\n\nPrompt:\n{prompt}"
        )
    }
}

/// Content between the first pair of ``` fences (optional `json` tag
/// stripped), or the whole content trimmed when there is no fence.
fn extract_json_block(content: &str) -> &str {
    if let Some(open) = content.find("```") {
        let after = &content[open + 3..];
        let after = after.strip_prefix("json").unwrap_or(after);
        if let Some(close) = after.find("```") {
            return after[..close].trim();
        }
    }
    content.trim()
}

/// Parses the model's analysis content, degrading to a single informational
/// suggestion around the raw text when it is not the expected JSON.
fn parse_analysis(content: &str, prompt: &str) -> RemoteAnalysis {
    let mut analysis = match serde_json::from_str::<GatewayAnalysis>(extract_json_block(content)) {
        Ok(parsed) => RemoteAnalysis {
            suggestions: parsed.suggestions,
            optimized_prompt: if parsed.optimized_prompt.is_empty() {
                prompt.to_string()
            } else {
                parsed.optimized_prompt
            },
            score: parsed.score,
            summary: parsed.summary,
        },
        Err(parse_err) => {
            error!(%parse_err, "gateway reply was not valid analysis JSON; degrading to raw text");
            RemoteAnalysis {
                suggestions: vec![Suggestion {
                    id: String::new(),
                    kind: SuggestionType::Info,
                    title: "Análise em formato de texto".to_string(),
                    description: content.to_string(),
                    original_text: None,
                    suggested_text: None,
                }],
                optimized_prompt: prompt.to_string(),
                score: FALLBACK_SCORE,
                summary: "A análise foi realizada mas o formato de resposta precisa ser ajustado."
                    .to_string(),
            }
        }
    };
    for (i, suggestion) in analysis.suggestions.iter_mut().enumerate() {
        suggestion.id = format!("ai-suggestion-{}", i + 1);
    }
    analysis
}

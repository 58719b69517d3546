//! OpenAI-compatible chat completion client for domain suggestions

use std::time::Duration;

use async_trait::async_trait;
use domainscout_registrar_api::{
    ensure_crypto_provider,
    DomainName,
};
use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::application::suggestions::{
    SuggestionError,
    SuggestionProvider,
};
use crate::domain::{
    DomainError,
    DomainResult,
    DomainSuggestion,
    SearchQuery,
    SuggestionCategory,
};
use crate::infrastructure::config::SuggestionsConfig;

const TEMPERATURE: f64 = 0.4;

const MAX_SUGGESTIONS: usize = 10;

const SYSTEM_PROMPT: &str = r#"You are a domain naming assistant. Given keywords and preferences, propose concise, brandable domain ideas.
Requirements:
- Prefer .com where reasonable but allow modern TLDs (.io, .ai, .co) if better.
- Output ONLY JSON matching this shape without any extra text:
{ "suggestions": [{ "domain": string, "confidence": number, "reasoning": string, "category": "exact"|"brandable"|"compound"|"alternative" }] }
- confidence in [0,1]."#;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct RawSuggestions {
    suggestions: Vec<RawSuggestion>,
}

#[derive(Deserialize)]
struct RawSuggestion {
    domain: String,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
    category: SuggestionCategory,
}

pub struct OpenAiSuggestionProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiSuggestionProvider {
    pub fn new(api_key: String, config: &SuggestionsConfig) -> DomainResult<Self> {
        ensure_crypto_provider();

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl SuggestionProvider for OpenAiSuggestionProvider {
    async fn suggest(&self, query: &SearchQuery) -> Result<Vec<DomainSuggestion>, SuggestionError> {
        let user_prompt = build_user_prompt(query);
        let request = ChatRequest {
            model: &self.model,
            temperature: TEMPERATURE,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Status(status.as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SuggestionError::Malformed(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SuggestionError::Malformed("response has no content".to_string()))?;

        let suggestions = parse_suggestions(&content)?;
        tracing::debug!(count = suggestions.len(), model = %self.model, "Generated suggestions");

        Ok(suggestions)
    }
}

fn build_user_prompt(query: &SearchQuery) -> String {
    let list_or = |items: &Option<Vec<String>>, empty: &str| match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => empty.to_string(),
    };

    format!(
        "Keywords: {}\nBudget: {}\nPreferred TLDs: {}\nMax length: {}\nConstraints: {}\n",
        query.clean_keywords().join(", "),
        query
            .budget
            .map(|b| b.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        list_or(&query.preferred_tlds, "any"),
        query
            .max_length
            .map(|l| l.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        list_or(&query.exclude_words, "none"),
    )
}

/// Parses and validates the model's JSON, tolerating a surrounding code fence
pub(crate) fn parse_suggestions(content: &str) -> Result<Vec<DomainSuggestion>, SuggestionError> {
    let json = strip_code_fence(content);
    let raw: RawSuggestions =
        serde_json::from_str(json).map_err(|e| SuggestionError::Malformed(e.to_string()))?;

    if raw.suggestions.is_empty() || raw.suggestions.len() > MAX_SUGGESTIONS {
        return Err(SuggestionError::Invalid(format!(
            "expected 1 to {MAX_SUGGESTIONS} suggestions, got {}",
            raw.suggestions.len()
        )));
    }

    raw.suggestions
        .into_iter()
        .map(|s| {
            if !(0.0..=1.0).contains(&s.confidence) {
                return Err(SuggestionError::Invalid(format!(
                    "confidence {} out of range for {}",
                    s.confidence, s.domain
                )));
            }
            let domain = DomainName::parse(&s.domain)
                .map_err(|e| SuggestionError::Invalid(e.to_string()))?;
            Ok(DomainSuggestion::new(
                domain.as_str(),
                s.confidence,
                s.reasoning,
                s.category,
            ))
        })
        .collect()
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn config(base_url: &str) -> SuggestionsConfig {
        SuggestionsConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn query() -> SearchQuery {
        SearchQuery {
            keywords: vec!["coffee".to_string(), "roast".to_string()],
            preferred_tlds: Some(vec!["com".to_string()]),
            ..Default::default()
        }
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        })
    }

    #[test]
    fn test_user_prompt() {
        let prompt = build_user_prompt(&query());
        assert_eq!(
            prompt,
            "Keywords: coffee, roast\nBudget: n/a\nPreferred TLDs: com\nMax length: n/a\nConstraints: none\n"
        );
    }

    #[test]
    fn test_parse_fenced_json() {
        let content = "```json\n{\"suggestions\":[{\"domain\":\"RoastLab.com\",\"confidence\":0.8,\"reasoning\":\"short\",\"category\":\"brandable\"}]}\n```";
        let suggestions = parse_suggestions(content).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].domain, "roastlab.com");
        assert_eq!(suggestions[0].category, SuggestionCategory::Brandable);
    }

    #[test]
    fn test_parse_rejects_invalid_output() {
        assert!(matches!(
            parse_suggestions("Sure! Here are some ideas"),
            Err(SuggestionError::Malformed(_))
        ));
        assert!(matches!(
            parse_suggestions(r#"{"suggestions":[]}"#),
            Err(SuggestionError::Invalid(_))
        ));
        assert!(matches!(
            parse_suggestions(
                r#"{"suggestions":[{"domain":"a.com","confidence":1.5,"reasoning":"","category":"exact"}]}"#
            ),
            Err(SuggestionError::Invalid(_))
        ));
        assert!(matches!(
            parse_suggestions(
                r#"{"suggestions":[{"domain":"not a domain","confidence":0.5,"reasoning":"","category":"exact"}]}"#
            ),
            Err(SuggestionError::Invalid(_))
        ));
        assert!(matches!(
            parse_suggestions(
                r#"{"suggestions":[{"domain":"a.com","confidence":0.5,"reasoning":"","category":"premium"}]}"#
            ),
            Err(SuggestionError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_suggest_calls_chat_completions() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body_partial(r#"{"model":"gpt-4o-mini","temperature":0.4}"#);
                then.status(200).json_body(completion(
                    r#"{"suggestions":[{"domain":"roastery.io","confidence":0.9,"reasoning":"fits","category":"exact"}]}"#,
                ));
            })
            .await;

        let provider =
            OpenAiSuggestionProvider::new("sk-test".to_string(), &config(&server.base_url()))
                .unwrap();
        let suggestions = provider.suggest(&query()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(suggestions[0].domain, "roastery.io");
        assert!(suggestions[0].pricing.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_reports_http_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("rate limited");
            })
            .await;

        let provider =
            OpenAiSuggestionProvider::new("sk-test".to_string(), &config(&server.base_url()))
                .unwrap();

        assert!(matches!(
            provider.suggest(&query()).await,
            Err(SuggestionError::Status(429))
        ));
    }
}

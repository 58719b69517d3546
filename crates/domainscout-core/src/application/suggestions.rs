use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    DomainSuggestion,
    SearchQuery,
    SuggestionCategory,
};

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Suggestion request failed: {0}")]
    Request(String),

    #[error("Suggestion service returned status {0}")]
    Status(u16),

    #[error("Malformed suggestion response: {0}")]
    Malformed(String),

    #[error("Suggestions failed validation: {0}")]
    Invalid(String),
}

/// Source of domain name ideas for a search query
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, query: &SearchQuery) -> Result<Vec<DomainSuggestion>, SuggestionError>;
}

/// Deterministic suggestions derived from the first non-blank keyword
pub fn fallback_suggestions(query: &SearchQuery) -> Vec<DomainSuggestion> {
    let base: String = query
        .clean_keywords()
        .first()
        .map(|k| {
            k.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "example".to_string());

    vec![
        DomainSuggestion::new(
            format!("{base}ai.com"),
            0.92,
            "Short, tech-forward variant suitable for AI brands.",
            SuggestionCategory::Exact,
        ),
        DomainSuggestion::new(
            format!("get{base}.com"),
            0.86,
            "Action-oriented prefix that is memorable and brandable.",
            SuggestionCategory::Brandable,
        ),
        DomainSuggestion::new(
            format!("{base}hub.io"),
            0.80,
            "Modern TLD signaling a developer- or data-centric hub.",
            SuggestionCategory::Compound,
        ),
    ]
}

/// Uses the configured provider and falls back to [`fallback_suggestions`] on any failure
pub struct SuggestionService {
    provider: Option<Arc<dyn SuggestionProvider>>,
}

impl SuggestionService {
    pub fn new(provider: Option<Arc<dyn SuggestionProvider>>) -> Self {
        Self { provider }
    }

    pub fn fallback_only() -> Self {
        Self { provider: None }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn suggest(&self, query: &SearchQuery) -> Vec<DomainSuggestion> {
        let Some(provider) = &self.provider else {
            return fallback_suggestions(query);
        };

        match provider.suggest(query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, "Suggestion provider failed, using fallback suggestions");
                fallback_suggestions(query)
            }
        }
    }
}

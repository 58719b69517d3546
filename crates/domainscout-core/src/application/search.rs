use std::sync::Arc;
use std::time::Instant;

use domainscout_registrar_api::DomainName;
use futures::future::join_all;

use super::aggregator::PriceAggregator;
use super::suggestions::SuggestionService;
use crate::domain::{
    DomainError,
    DomainResult,
    DomainSuggestion,
    PricingInfo,
    SearchQuery,
    SearchResult,
};

/// Generates suggestions and prices each of them through the aggregator
pub struct SearchService {
    suggestions: Arc<SuggestionService>,
    aggregator: Arc<PriceAggregator>,
}

impl SearchService {
    pub fn new(suggestions: Arc<SuggestionService>, aggregator: Arc<PriceAggregator>) -> Self {
        Self {
            suggestions,
            aggregator,
        }
    }

    pub async fn search(&self, query: SearchQuery) -> DomainResult<SearchResult> {
        let keywords = query.clean_keywords();
        if keywords.is_empty() {
            return Err(DomainError::InvalidInput("Keywords are required".to_string()));
        }
        let ai_insights = insights_for(&keywords);

        let started = Instant::now();
        let suggestions = self.suggestions.suggest(&query).await;
        let suggestions = join_all(suggestions.into_iter().map(|s| self.enrich(s))).await;
        let search_time_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            keywords = keywords.len(),
            suggestions = suggestions.len(),
            search_time_ms,
            "Domain search completed"
        );

        Ok(SearchResult {
            total_results: suggestions.len(),
            suggestions,
            search_time_ms,
            ai_insights,
            query,
        })
    }

    async fn enrich(&self, mut suggestion: DomainSuggestion) -> DomainSuggestion {
        let domain = match DomainName::parse(&suggestion.domain) {
            Ok(domain) => domain,
            Err(e) => {
                tracing::debug!(domain = %suggestion.domain, error = %e, "Skipping pricing for invalid suggestion");
                return suggestion;
            }
        };

        let result = self.aggregator.compare_prices(&domain).await;
        suggestion.pricing = result
            .quotes
            .iter()
            .filter_map(PricingInfo::from_quote)
            .collect();
        suggestion.available = Some(result.available);
        suggestion.best_price = result.best_price;
        suggestion
    }
}

fn insights_for(keywords: &[&str]) -> String {
    format!(
        "Based on your keywords \"{}\", prioritize memorability and clarity. Favor .com when available; otherwise consider .io/.ai.",
        keywords.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cache::ResultCache;
    use crate::domain::SuggestionCategory;
    use crate::testing::{
        registry,
        TestAdapter,
    };

    fn service(adapters: Vec<TestAdapter>) -> SearchService {
        let aggregator = PriceAggregator::new(registry(adapters), Arc::new(ResultCache::default()));
        SearchService::new(
            Arc::new(SuggestionService::fallback_only()),
            Arc::new(aggregator),
        )
    }

    #[tokio::test]
    async fn test_blank_keywords_rejected() {
        let service = service(vec![TestAdapter::priced("Porkbun", true, 9.73)]);
        let query = SearchQuery {
            keywords: vec!["  ".to_string()],
            ..Default::default()
        };

        let err = service.search(query).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(ref m) if m == "Keywords are required"));
    }

    #[tokio::test]
    async fn test_leading_blank_keyword_is_ignored() {
        let service = service(vec![TestAdapter::priced("Porkbun", true, 9.73)]);
        let query = SearchQuery {
            keywords: vec!["  ".to_string(), "coffee".to_string()],
            ..Default::default()
        };

        let result = service.search(query).await.unwrap();

        assert_eq!(result.suggestions[0].domain, "coffeeai.com");
        assert!(result.ai_insights.contains("\"coffee\""));
    }

    #[tokio::test]
    async fn test_suggestions_are_priced() {
        let service = service(vec![
            TestAdapter::priced("GoDaddy", true, 14.99),
            TestAdapter::priced("Cloudflare", true, 8.03),
            TestAdapter::priced("Namecheap", false, 12.98),
        ]);
        let query = SearchQuery {
            keywords: vec!["coffee".to_string(), "beans".to_string()],
            ..Default::default()
        };

        let result = service.search(query).await.unwrap();

        assert_eq!(result.total_results, 3);
        assert_eq!(
            result.ai_insights,
            "Based on your keywords \"coffee, beans\", prioritize memorability and clarity. Favor .com when available; otherwise consider .io/.ai."
        );

        let first = &result.suggestions[0];
        assert_eq!(first.domain, "coffeeai.com");
        assert_eq!(first.category, SuggestionCategory::Exact);
        assert_eq!(first.available, Some(true));
        assert_eq!(first.best_price.as_ref().unwrap().registrar, "Cloudflare");

        let registrars: Vec<&str> = first.pricing.iter().map(|p| p.registrar.as_str()).collect();
        assert_eq!(registrars, vec!["Cloudflare", "GoDaddy"]);
    }
}

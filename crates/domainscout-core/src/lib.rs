pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use application::{
    BulkPipeline,
    PriceAggregator,
    ResultCache,
    SearchService,
    SuggestionProvider,
    SuggestionService,
};
pub use domain::{
    AggregatedResult,
    BestOffer,
    BulkInput,
    BulkReport,
    DomainError,
    DomainResult,
    DomainSuggestion,
    SearchQuery,
    SearchResult,
};
use domainscout_registrar_api::AdapterRegistry;
pub use infrastructure::{
    ConfigLoadError,
    ConfigLoader,
    DomainScoutConfig,
    OpenAiSuggestionProvider,
};

/// Shared services for a running DomainScout instance
pub struct CoreContext {
    pub config: DomainScoutConfig,

    pub registry: Arc<AdapterRegistry>,

    pub cache: Arc<ResultCache>,

    pub aggregator: Arc<PriceAggregator>,

    pub bulk: Arc<BulkPipeline>,

    pub suggestions: Arc<SuggestionService>,

    pub search: Arc<SearchService>,
}

impl CoreContext {
    pub fn from_config(config: DomainScoutConfig) -> anyhow::Result<Self> {
        let registry = adapters::create_registry(&config.registrars)?;

        tracing::info!(
            registrars = registry.len(),
            enabled = registry.enabled_count(),
            "Registrar registry ready"
        );

        let provider: Option<Arc<dyn SuggestionProvider>> =
            match config.suggestions.resolved_api_key() {
                Some(api_key) => {
                    let provider = OpenAiSuggestionProvider::new(api_key, &config.suggestions)?;
                    tracing::info!(model = %config.suggestions.model, "AI suggestions enabled");
                    Some(Arc::new(provider))
                }
                None => {
                    tracing::info!("No suggestion API key configured, using fallback suggestions");
                    None
                }
            };

        Ok(Self::assemble(
            config,
            Arc::new(registry),
            SuggestionService::new(provider),
        ))
    }

    /// Builds a context around an existing registry, with fallback suggestions only
    pub fn with_registry(registry: Arc<AdapterRegistry>, config: DomainScoutConfig) -> Self {
        Self::assemble(config, registry, SuggestionService::fallback_only())
    }

    /// Spawns the cache sweeper; requires a running tokio runtime
    pub fn start_background_tasks(&self) {
        let period = self.cache.default_ttl();
        self.cache.spawn_sweeper(period);
        tracing::debug!(period_secs = period.as_secs(), "Cache sweeper started");
    }

    fn assemble(
        config: DomainScoutConfig, registry: Arc<AdapterRegistry>, suggestions: SuggestionService,
    ) -> Self {
        let cache = Arc::new(ResultCache::new(config.cache.ttl()));
        let aggregator = Arc::new(PriceAggregator::new(
            Arc::clone(&registry),
            Arc::clone(&cache),
        ));
        let bulk = Arc::new(BulkPipeline::new(Arc::clone(&aggregator), config.bulk));
        let suggestions = Arc::new(suggestions);
        let search = Arc::new(SearchService::new(
            Arc::clone(&suggestions),
            Arc::clone(&aggregator),
        ));

        Self {
            config,
            registry,
            cache,
            aggregator,
            bulk,
            suggestions,
            search,
        }
    }
}

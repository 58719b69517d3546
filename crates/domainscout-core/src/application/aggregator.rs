use std::sync::Arc;

use domainscout_registrar_api::{
    AdapterRegistry,
    CachePolicy,
    DomainName,
    QuoteErrorKind,
    RegistrarAdapter,
    RegistrarQuote,
};
use futures::future::join_all;

use super::cache::ResultCache;
use crate::domain::AggregatedResult;

/// Fans a domain out to every registered adapter and merges the answers
pub struct PriceAggregator {
    registry: Arc<AdapterRegistry>,
    cache: Arc<ResultCache>,
}

impl PriceAggregator {
    pub fn new(registry: Arc<AdapterRegistry>, cache: Arc<ResultCache>) -> Self {
        Self { registry, cache }
    }

    pub fn registry(&self) -> &Arc<AdapterRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// One quote per registered adapter, ranked. Never fails: adapter
    /// errors and panics become failed quotes.
    pub async fn compare_prices(&self, domain: &DomainName) -> AggregatedResult {
        let tasks: Vec<_> = self
            .registry
            .all()
            .iter()
            .map(|adapter| {
                let adapter = Arc::clone(adapter);
                let cache = Arc::clone(&self.cache);
                let domain = domain.clone();
                tokio::spawn(async move { cached_check(adapter.as_ref(), &cache, &domain).await })
            })
            .collect();

        let quotes: Vec<RegistrarQuote> = join_all(tasks)
            .await
            .into_iter()
            .zip(self.registry.all())
            .map(|(joined, adapter)| match joined {
                Ok(quote) => quote,
                Err(e) => {
                    tracing::error!(
                        registrar = adapter.registrar_id(),
                        domain = %domain,
                        error = %e,
                        "Registrar task aborted"
                    );
                    RegistrarQuote::failed(
                        adapter.name(),
                        QuoteErrorKind::Internal,
                        "Registrar check aborted unexpectedly",
                    )
                }
            })
            .collect();

        let result = AggregatedResult::from_quotes(domain.clone(), quotes);

        tracing::debug!(
            domain = %domain,
            available = result.available,
            best_price = ?result.best_price.as_ref().map(|b| b.price),
            quotes = result.quotes.len(),
            "Compared registrar prices"
        );

        result
    }
}

async fn cached_check(
    adapter: &dyn RegistrarAdapter, cache: &ResultCache, domain: &DomainName,
) -> RegistrarQuote {
    if let Some(quote) = cache.get(adapter.registrar_id(), domain) {
        return quote;
    }

    let quote = adapter.check(domain).await;

    match adapter.cache_policy(&quote) {
        CachePolicy::Skip => {}
        CachePolicy::Default => cache.set(adapter.registrar_id(), domain, quote.clone(), None),
        CachePolicy::Ttl(ttl) => {
            cache.set(adapter.registrar_id(), domain, quote.clone(), Some(ttl))
        }
    }

    quote
}

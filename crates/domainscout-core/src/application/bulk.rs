use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use domainscout_registrar_api::DomainName;
use futures::future::join_all;

use super::aggregator::PriceAggregator;
use crate::domain::{
    BulkInput,
    BulkReport,
    DomainError,
    DomainResult,
};
use crate::infrastructure::config::BulkConfig;

/// Normalized, deduplicated domains in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDomains {
    pub domains: Vec<DomainName>,
    /// More distinct domains were present than the cap allowed
    pub truncated: bool,
}

/// Scans free text for domain-shaped tokens separated by whitespace, commas or semicolons
pub fn extract_domains(text: &str, cap: usize) -> ExtractedDomains {
    collect_unique(
        text.split(|c: char| c.is_whitespace() || c == ',' || c == ';'),
        cap,
    )
}

/// Normalizes an explicit list with the same rules as text tokens
pub fn normalize_domains<S: AsRef<str>>(list: &[S], cap: usize) -> ExtractedDomains {
    collect_unique(list.iter().map(|s| s.as_ref()), cap)
}

fn collect_unique<'a>(tokens: impl Iterator<Item = &'a str>, cap: usize) -> ExtractedDomains {
    let mut seen = HashSet::new();
    let mut domains = Vec::new();
    let mut truncated = false;

    for domain in tokens.filter_map(|t| DomainName::parse(t).ok()) {
        if seen.contains(&domain) {
            continue;
        }
        if domains.len() == cap {
            truncated = true;
            break;
        }
        seen.insert(domain.clone());
        domains.push(domain);
    }

    ExtractedDomains { domains, truncated }
}

/// Drives the aggregator over many domains in fixed-size chunks
pub struct BulkPipeline {
    aggregator: Arc<PriceAggregator>,
    config: BulkConfig,
}

impl BulkPipeline {
    pub fn new(aggregator: Arc<PriceAggregator>, config: BulkConfig) -> Self {
        Self { aggregator, config }
    }

    pub fn config(&self) -> &BulkConfig {
        &self.config
    }

    pub async fn process(&self, input: BulkInput) -> DomainResult<BulkReport> {
        let extracted = match &input {
            BulkInput::Domains(list) => normalize_domains(list, self.config.max_domains),
            BulkInput::Text(text) => extract_domains(text, self.config.max_domains),
        };

        if extracted.domains.is_empty() {
            return Err(DomainError::InvalidInput("No domains provided".to_string()));
        }

        let total = extracted.domains.len();
        let started = Instant::now();
        let mut results = Vec::with_capacity(total);

        // Each chunk completes before the next starts
        for chunk in extracted.domains.chunks(self.config.chunk_size.max(1)) {
            let batch = join_all(chunk.iter().map(|d| self.aggregator.compare_prices(d))).await;
            results.extend(batch);
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        let available = results.iter().filter(|r| r.available).count();

        tracing::info!(
            total,
            available,
            truncated = extracted.truncated,
            duration_ms,
            "Bulk availability check completed"
        );

        Ok(BulkReport {
            total,
            processed: results.len(),
            duration_ms,
            truncated: extracted.truncated,
            results,
        })
    }
}

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::DomainName;
use crate::error::AdapterResult;
use crate::schema::SettingsSchema;
use crate::types::{
    QuoteErrorKind,
    RegistrarQuote,
};

/// Adapter metadata - describes the registrar backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterMetadata {
    /// Display name used in quotes (e.g., "Namecheap")
    pub name: String,
    /// Adapter identifier and cache namespace (e.g., "namecheap")
    pub registrar_id: String,
    /// Adapter version
    pub version: String,
    /// Adapter description
    pub description: String,
    /// Registrar website
    pub website: Option<String>,
    /// Settings the adapter reads during initialization
    pub settings_schema: SettingsSchema,
}

/// How the aggregator should cache a freshly checked quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Do not cache
    Skip,
    /// Cache with the cache's default TTL
    Default,
    /// Cache with an explicit TTL
    Ttl(Duration),
}

/// Main adapter trait - all registrar backends must implement this
#[async_trait]
pub trait RegistrarAdapter: Send + Sync {
    /// Get adapter metadata
    fn metadata(&self) -> &AdapterMetadata;

    /// Initialize adapter with its settings
    fn initialize(&mut self, settings: HashMap<String, String>) -> AdapterResult<()>;

    /// Whether the backend has the credentials it needs
    fn enabled(&self) -> bool;

    /// Check availability and pricing for a domain
    async fn lookup(&self, domain: &DomainName) -> AdapterResult<RegistrarQuote>;

    /// Infallible check used by the aggregator.
    ///
    /// Unconfigured backends short-circuit to a `not_configured` quote and
    /// lookup errors are folded into a failed quote.
    async fn check(&self, domain: &DomainName) -> RegistrarQuote {
        if !self.enabled() {
            return RegistrarQuote::failed(
                self.name(),
                QuoteErrorKind::NotConfigured,
                "not_configured",
            );
        }

        match self.lookup(domain).await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!(
                    registrar = self.registrar_id(),
                    domain = %domain,
                    error = %e,
                    "Registrar check failed"
                );
                RegistrarQuote::failed(self.name(), e.kind(), e.to_string())
            }
        }
    }

    /// Caching decision for a quote returned by `check`
    fn cache_policy(&self, quote: &RegistrarQuote) -> CachePolicy {
        if quote.is_error() {
            CachePolicy::Skip
        } else {
            CachePolicy::Default
        }
    }

    /// Get the registrar identifier
    fn registrar_id(&self) -> &str {
        &self.metadata().registrar_id
    }

    /// Get the display name
    fn name(&self) -> &str {
        &self.metadata().name
    }
}

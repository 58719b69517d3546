//! Porkbun adapter implementation

use std::collections::HashMap;

use async_trait::async_trait;
use domainscout_registrar_api::*;

use crate::client::PorkbunClient;
use crate::config::PorkbunSettings;
use crate::{
    mapper,
    metadata,
};

/// Porkbun adapter for live availability and pricing
pub struct PorkbunAdapter {
    metadata: AdapterMetadata,
    client: Option<PorkbunClient>,
    settings: Option<PorkbunSettings>,
}

impl Default for PorkbunAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PorkbunAdapter {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
            client: None,
            settings: None,
        }
    }

    fn client(&self) -> AdapterResult<&PorkbunClient> {
        self.client
            .as_ref()
            .ok_or_else(|| AdapterError::NotConfigured("Porkbun API keys missing".to_string()))
    }
}

#[async_trait]
impl RegistrarAdapter for PorkbunAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    fn initialize(&mut self, settings: HashMap<String, String>) -> AdapterResult<()> {
        let settings = PorkbunSettings::from_map(&settings)?;

        self.client = if settings.has_credentials() {
            Some(PorkbunClient::new(&settings)?)
        } else {
            None
        };
        self.settings = Some(settings);

        Ok(())
    }

    fn enabled(&self) -> bool {
        self.client.is_some()
    }

    async fn lookup(&self, domain: &DomainName) -> AdapterResult<RegistrarQuote> {
        let client = self.client()?;
        let check = client.check_domain(domain).await?;

        // Pricing is optional; a failed lookup still yields an availability quote
        let tld_pricing = if mapper::needs_tld_pricing(&check) {
            match client.fetch_tld_pricing(domain.tld()).await {
                Ok(pricing) => pricing,
                Err(e) => {
                    tracing::debug!(domain = %domain, error = %e, "Porkbun TLD pricing unavailable");
                    None
                }
            }
        } else {
            None
        };

        mapper::map_check_to_quote(self.name(), &check, tld_pricing.as_ref())
    }

    fn cache_policy(&self, quote: &RegistrarQuote) -> CachePolicy {
        match &self.settings {
            Some(settings) if !quote.is_error() => CachePolicy::Ttl(settings.cache_ttl),
            _ => CachePolicy::Skip,
        }
    }
}

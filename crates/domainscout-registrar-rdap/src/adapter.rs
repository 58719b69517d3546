use std::collections::HashMap;

use async_trait::async_trait;
use domainscout_registrar_api::*;

use crate::client::RdapClient;
use crate::config::ListPriceSettings;
use crate::metadata::{
    self,
    RegistrarProfile,
};

/// Registrar adapter combining RDAP availability with list prices
pub struct ListPriceAdapter {
    profile: &'static RegistrarProfile,
    metadata: AdapterMetadata,
    settings: Option<ListPriceSettings>,
    client: Option<RdapClient>,
}

impl ListPriceAdapter {
    fn from_profile(profile: &'static RegistrarProfile) -> Self {
        Self {
            profile,
            metadata: metadata::create_metadata(profile),
            settings: None,
            client: None,
        }
    }

    pub fn namecheap() -> Self {
        Self::from_profile(&metadata::NAMECHEAP)
    }

    pub fn godaddy() -> Self {
        Self::from_profile(&metadata::GODADDY)
    }

    pub fn cloudflare() -> Self {
        Self::from_profile(&metadata::CLOUDFLARE)
    }

    pub fn upflare() -> Self {
        Self::from_profile(&metadata::UPFLARE)
    }

    fn configured(&self) -> AdapterResult<(&ListPriceSettings, &RdapClient)> {
        match (&self.settings, &self.client) {
            (Some(settings), Some(client)) => Ok((settings, client)),
            _ => Err(AdapterError::NotConfigured(format!(
                "{} credentials missing",
                self.profile.name
            ))),
        }
    }
}

#[async_trait]
impl RegistrarAdapter for ListPriceAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    fn initialize(&mut self, settings: HashMap<String, String>) -> AdapterResult<()> {
        let settings = ListPriceSettings::from_map(&settings, self.profile)?;

        self.client = if settings.has_credentials() {
            Some(RdapClient::new(&settings.rdap_base_url, settings.timeout)?)
        } else {
            tracing::debug!(
                registrar = self.profile.id,
                missing = ?settings.missing_credentials,
                "Registrar credentials missing"
            );
            None
        };
        self.settings = Some(settings);

        Ok(())
    }

    fn enabled(&self) -> bool {
        self.client.is_some()
    }

    async fn lookup(&self, domain: &DomainName) -> AdapterResult<RegistrarQuote> {
        let (settings, client) = self.configured()?;
        let registered = client.is_registered(domain).await?;
        let pricing = &settings.pricing;

        Ok(RegistrarQuote::priced(
            self.name(),
            !registered,
            pricing.list_price,
            pricing.currency.clone(),
        )
        .with_renewal_price(Some(pricing.renewal_price))
        .with_transfer_price(pricing.transfer_price))
    }
}

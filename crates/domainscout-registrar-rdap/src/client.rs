//! RDAP HTTP client

use std::time::Duration;

use domainscout_registrar_api::{
    ensure_crypto_provider,
    AdapterError,
    AdapterResult,
    DomainName,
    RetryPolicy,
};
use reqwest::{
    header,
    Client,
    StatusCode,
};

/// Registration status lookups against an RDAP server
pub(crate) struct RdapClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl RdapClient {
    pub fn new(base_url: &str, timeout: Duration) -> AdapterResult<Self> {
        ensure_crypto_provider();

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AdapterError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Returns `true` when the domain is registered
    pub async fn is_registered(&self, domain: &DomainName) -> AdapterResult<bool> {
        let url = format!("{}/domain/{}", self.base_url, domain.as_str());

        self.retry
            .retry(|| async {
                let response = self
                    .client
                    .get(&url)
                    .header(header::ACCEPT, "application/rdap+json")
                    .send()
                    .await?;

                let status = response.status();
                match status {
                    StatusCode::NOT_FOUND => Ok(false),
                    s if s.is_success() => Ok(true),
                    s => Err(AdapterError::from_status(s, "RDAP lookup")),
                }
            })
            .await
    }
}

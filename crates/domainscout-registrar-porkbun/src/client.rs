//! HTTP client and API methods for Porkbun

use domainscout_registrar_api::{
    ensure_crypto_provider,
    AdapterError,
    AdapterResult,
    DomainName,
    RetryPolicy,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::PorkbunSettings;
use crate::types::{
    AuthBody,
    CheckDomainResponse,
    CheckDomainResult,
    PricingResponse,
    TldPricing,
};

/// Porkbun API client with retry logic
pub(crate) struct PorkbunClient {
    client: Client,
    base_url: String,
    api_key: String,
    secret_key: String,
    retry: RetryPolicy,
}

impl PorkbunClient {
    pub fn new(settings: &PorkbunSettings) -> AdapterResult<Self> {
        ensure_crypto_provider();

        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.timeout)
            .build()
            .map_err(|e| AdapterError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            secret_key: settings.secret_key.clone(),
            retry: RetryPolicy::default(),
        })
    }

    fn auth_body(&self) -> AuthBody<'_> {
        AuthBody {
            apikey: &self.api_key,
            secretapikey: &self.secret_key,
        }
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, context: &str) -> AdapterResult<T> {
        self.retry
            .retry(|| async {
                let url = format!("{}/{}", self.base_url, path);
                let response = self.client.post(&url).json(&self.auth_body()).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(AdapterError::from_status(status, context));
                }

                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    AdapterError::InvalidResponse(format!("{context}: malformed body: {e}"))
                })
            })
            .await
    }

    /// Checks availability and first-year price for one domain
    pub async fn check_domain(&self, domain: &DomainName) -> AdapterResult<CheckDomainResult> {
        let path = format!("domain/checkDomain/{}", domain.as_str());
        let response: CheckDomainResponse = self.post(&path, "Porkbun domain check").await?;

        if !response.status.eq_ignore_ascii_case("SUCCESS") {
            return Err(AdapterError::RequestRejected(
                response
                    .message
                    .unwrap_or_else(|| "Porkbun API error".to_string()),
            ));
        }

        response.response.ok_or_else(|| {
            AdapterError::InvalidResponse("Porkbun domain check returned no result".to_string())
        })
    }

    /// Fetches list prices for a TLD
    pub async fn fetch_tld_pricing(&self, tld: &str) -> AdapterResult<Option<TldPricing>> {
        let response: PricingResponse = self.post("pricing/get", "Porkbun pricing").await?;

        if !response.status.eq_ignore_ascii_case("SUCCESS") {
            return Err(AdapterError::RequestRejected(
                response
                    .message
                    .unwrap_or_else(|| "Porkbun pricing error".to_string()),
            ));
        }

        Ok(response.pricing.get(tld).cloned())
    }
}

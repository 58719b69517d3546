//! Settings parsing for RDAP-backed adapters

use std::collections::HashMap;
use std::time::Duration;

use domainscout_registrar_api::{
    AdapterError,
    AdapterResult,
    DEFAULT_CURRENCY,
};

use crate::metadata::RegistrarProfile;

pub(crate) const DEFAULT_RDAP_BASE_URL: &str = "https://rdap.org";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListPricing {
    pub list_price: f64,
    pub renewal_price: f64,
    pub transfer_price: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ListPriceSettings {
    pub missing_credentials: Vec<&'static str>,
    pub pricing: ListPricing,
    pub rdap_base_url: String,
    pub timeout: Duration,
}

impl ListPriceSettings {
    pub fn from_map(
        settings: &HashMap<String, String>, profile: &RegistrarProfile,
    ) -> AdapterResult<Self> {
        let missing_credentials = profile
            .credentials
            .iter()
            .filter(|c| get_trimmed(settings, c.key).is_none())
            .map(|c| c.key)
            .collect();

        let pricing = ListPricing {
            list_price: parse_price(settings, "list_price")?.unwrap_or(profile.list_price),
            renewal_price: parse_price(settings, "renewal_price")?
                .unwrap_or(profile.renewal_price),
            transfer_price: parse_price(settings, "transfer_price")?,
            currency: get_trimmed(settings, "currency")
                .map(|c| c.to_uppercase())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };

        let timeout_secs = match get_trimmed(settings, "timeout_secs") {
            Some(raw) => raw.parse().map_err(|_| {
                AdapterError::InvalidConfig("timeout_secs must be a whole number".to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            missing_credentials,
            pricing,
            rdap_base_url: get_trimmed(settings, "rdap_base_url")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RDAP_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.missing_credentials.is_empty()
    }
}

fn get_trimmed(settings: &HashMap<String, String>, key: &str) -> Option<String> {
    settings
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price(settings: &HashMap<String, String>, key: &str) -> AdapterResult<Option<f64>> {
    let Some(raw) = get_trimmed(settings, key) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(AdapterError::InvalidConfig(format!(
            "{key} must be a non-negative number, got {raw:?}"
        ))),
    }
}

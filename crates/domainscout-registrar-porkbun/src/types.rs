//! API response types for the Porkbun API
//!
//! Porkbun encodes prices as decimal strings.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Serialize)]
pub(crate) struct AuthBody<'a> {
    pub apikey: &'a str,
    pub secretapikey: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckDomainResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<CheckDomainResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckDomainResult {
    pub avail: String,
    #[serde(default, deserialize_with = "price_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "price_string")]
    #[allow(dead_code)]
    pub regular_price: Option<String>,
    #[serde(default)]
    pub first_year_promo: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub premium: Option<String>,
    #[serde(default)]
    pub additional: Option<AdditionalPricing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdditionalPricing {
    #[serde(default)]
    pub renewal: Option<PriceEntry>,
    #[serde(default)]
    pub transfer: Option<PriceEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceEntry {
    #[serde(default, deserialize_with = "price_string")]
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PricingResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pricing: HashMap<String, TldPricing>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TldPricing {
    #[serde(default, deserialize_with = "price_string")]
    pub registration: Option<String>,
    #[serde(default, deserialize_with = "price_string")]
    pub renewal: Option<String>,
    #[serde(default, deserialize_with = "price_string")]
    pub transfer: Option<String>,
}

/// Prices usually arrive as strings, occasionally as bare numbers
fn price_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

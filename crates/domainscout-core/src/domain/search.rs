use domainscout_registrar_api::RegistrarQuote;
use serde::{
    Deserialize,
    Serialize,
};

use super::comparison::BestOffer;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_tlds: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brandable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hyphens: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_numbers: Option<bool>,
}

impl SearchQuery {
    /// Trimmed, non-empty keywords
    pub fn clean_keywords(&self) -> Vec<&str> {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Exact,
    Brandable,
    Compound,
    Alternative,
}

/// A purchasable registrar offer attached to a suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    pub registrar: String,
    pub price: f64,
    pub currency: String,
    pub renewal_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_end_date: Option<String>,
}

impl PricingInfo {
    /// Only available, priced quotes produce pricing; renewal defaults to the purchase price
    pub fn from_quote(quote: &RegistrarQuote) -> Option<Self> {
        let price = quote.offer_price()?;

        Some(Self {
            registrar: quote.registrar.clone(),
            price,
            currency: quote
                .currency
                .clone()
                .unwrap_or_else(|| domainscout_registrar_api::DEFAULT_CURRENCY.to_string()),
            renewal_price: quote.renewal_price.unwrap_or(price),
            transfer_price: quote.transfer_price,
            promo_price: quote.promo_price,
            promo_end_date: quote.promo_end_date.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSuggestion {
    pub domain: String,
    pub confidence: f64,
    pub reasoning: String,
    pub category: SuggestionCategory,
    #[serde(default)]
    pub pricing: Vec<PricingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_price: Option<BestOffer>,
}

impl DomainSuggestion {
    pub fn new(
        domain: impl Into<String>, confidence: f64, reasoning: impl Into<String>,
        category: SuggestionCategory,
    ) -> Self {
        Self {
            domain: domain.into(),
            confidence,
            reasoning: reasoning.into(),
            category,
            pricing: Vec::new(),
            available: None,
            best_price: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub query: SearchQuery,
    pub suggestions: Vec<DomainSuggestion>,
    pub total_results: usize,
    pub search_time_ms: u64,
    pub ai_insights: String,
}

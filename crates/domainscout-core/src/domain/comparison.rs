use std::cmp::Ordering;

use domainscout_registrar_api::{
    DomainName,
    RegistrarQuote,
    DEFAULT_CURRENCY,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Cheapest purchasable offer for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestOffer {
    pub registrar: String,
    pub price: f64,
    pub currency: String,
}

impl BestOffer {
    fn from_quote(quote: &RegistrarQuote) -> Option<Self> {
        quote.offer_price().map(|price| Self {
            registrar: quote.registrar.clone(),
            price,
            currency: quote
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

/// Merged, ranked view of every registrar's answer for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub domain: DomainName,
    pub available: bool,
    pub best_price: Option<BestOffer>,
    #[serde(rename = "registrars")]
    pub quotes: Vec<RegistrarQuote>,
}

impl AggregatedResult {
    /// Ranks the quotes and derives availability and the best offer
    pub fn from_quotes(domain: DomainName, mut quotes: Vec<RegistrarQuote>) -> Self {
        rank_quotes(&mut quotes);

        let available = quotes.iter().any(|q| q.available && !q.is_error());
        let best_price = quotes.iter().find_map(BestOffer::from_quote);

        Self {
            domain,
            available,
            best_price,
            quotes,
        }
    }
}

/// Stable sort: purchasable quotes first, then ascending price with
/// missing prices last.
pub fn rank_quotes(quotes: &mut [RegistrarQuote]) {
    quotes.sort_by(compare_quotes);
}

fn compare_quotes(a: &RegistrarQuote, b: &RegistrarQuote) -> Ordering {
    let purchasable = |q: &RegistrarQuote| q.available && !q.is_error();
    let sort_price = |q: &RegistrarQuote| q.price.unwrap_or(f64::INFINITY);

    purchasable(b)
        .cmp(&purchasable(a))
        .then_with(|| sort_price(a).total_cmp(&sort_price(b)))
}

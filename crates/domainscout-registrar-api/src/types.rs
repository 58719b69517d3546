use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteErrorKind {
    /// Backend credentials are missing; no request was made
    NotConfigured,
    Network,
    Upstream,
    InvalidResponse,
    Internal,
}

impl std::fmt::Display for QuoteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "not_configured"),
            Self::Network => write!(f, "network"),
            Self::Upstream => write!(f, "upstream"),
            Self::InvalidResponse => write!(f, "invalid_response"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// One registrar's answer for one domain.
///
/// A quote is either a successful check (availability plus optional prices)
/// or a failure (`error` set, `available == false`, no prices). Use the
/// constructors to keep those two shapes apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarQuote {
    pub registrar: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<QuoteErrorKind>,
}

impl RegistrarQuote {
    /// Successful check with a purchase price
    pub fn priced(
        registrar: impl Into<String>, available: bool, price: f64, currency: impl Into<String>,
    ) -> Self {
        Self {
            price: finite(Some(price)),
            currency: Some(currency.into()),
            ..Self::unpriced(registrar, available)
        }
    }

    /// Successful availability check without pricing
    pub fn unpriced(registrar: impl Into<String>, available: bool) -> Self {
        Self {
            registrar: registrar.into(),
            available,
            price: None,
            renewal_price: None,
            transfer_price: None,
            promo_price: None,
            promo_end_date: None,
            currency: None,
            error: None,
            error_kind: None,
        }
    }

    /// Failed check; never available and never priced
    pub fn failed(
        registrar: impl Into<String>, kind: QuoteErrorKind, message: impl Into<String>,
    ) -> Self {
        Self {
            error: Some(message.into()),
            error_kind: Some(kind),
            ..Self::unpriced(registrar, false)
        }
    }

    pub fn with_renewal_price(mut self, price: Option<f64>) -> Self {
        if !self.is_error() {
            self.renewal_price = finite(price);
        }
        self
    }

    pub fn with_transfer_price(mut self, price: Option<f64>) -> Self {
        if !self.is_error() {
            self.transfer_price = finite(price);
        }
        self
    }

    pub fn with_promo(mut self, price: Option<f64>, ends: Option<String>) -> Self {
        if !self.is_error() {
            self.promo_price = finite(price);
            self.promo_end_date = ends;
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Purchase price if this quote can be bought right now
    pub fn offer_price(&self) -> Option<f64> {
        if self.available && !self.is_error() {
            self.price
        } else {
            None
        }
    }
}

fn finite(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite() && *p >= 0.0)
}

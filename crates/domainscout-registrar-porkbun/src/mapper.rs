use domainscout_registrar_api::{
    AdapterError,
    AdapterResult,
    RegistrarQuote,
    DEFAULT_CURRENCY,
};

use crate::types::{
    CheckDomainResult,
    TldPricing,
};

/// Parse a Porkbun decimal string
pub(crate) fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Map `avail` to availability
pub(crate) fn map_availability(avail: &str) -> AdapterResult<bool> {
    match avail.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(AdapterError::InvalidResponse(format!(
            "Unexpected availability value: {other:?}"
        ))),
    }
}

/// Map a domain check (and optional TLD list prices) to a quote
pub(crate) fn map_check_to_quote(
    name: &str, check: &CheckDomainResult, tld_pricing: Option<&TldPricing>,
) -> AdapterResult<RegistrarQuote> {
    let available = map_availability(&check.avail)?;

    let additional = check.additional.as_ref();
    let check_renewal = additional
        .and_then(|a| a.renewal.as_ref())
        .and_then(|r| parse_price(r.price.as_deref()));
    let check_transfer = additional
        .and_then(|a| a.transfer.as_ref())
        .and_then(|t| parse_price(t.price.as_deref()));

    let price = parse_price(check.price.as_deref())
        .or_else(|| tld_pricing.and_then(|p| parse_price(p.registration.as_deref())));
    let renewal = check_renewal
        .or_else(|| tld_pricing.and_then(|p| parse_price(p.renewal.as_deref())))
        .or(price);
    let transfer =
        check_transfer.or_else(|| tld_pricing.and_then(|p| parse_price(p.transfer.as_deref())));

    let quote = match price {
        Some(price) => RegistrarQuote::priced(name, available, price, DEFAULT_CURRENCY),
        None => RegistrarQuote::unpriced(name, available),
    };

    let on_promo = check
        .first_year_promo
        .as_deref()
        .is_some_and(|flag| flag.eq_ignore_ascii_case("yes"));
    let promo = if on_promo { price } else { None };

    Ok(quote
        .with_renewal_price(renewal)
        .with_transfer_price(transfer)
        .with_promo(promo, None))
}

/// Whether a check needs a follow-up TLD pricing lookup
pub(crate) fn needs_tld_pricing(check: &CheckDomainResult) -> bool {
    parse_price(check.price.as_deref()).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AdditionalPricing,
        PriceEntry,
    };

    fn check(avail: &str, price: Option<&str>) -> CheckDomainResult {
        CheckDomainResult {
            avail: avail.to_string(),
            price: price.map(String::from),
            regular_price: None,
            first_year_promo: None,
            premium: None,
            additional: None,
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("9.73")), Some(9.73));
        assert_eq!(parse_price(Some(" 11 ")), Some(11.0));
        assert_eq!(parse_price(Some("n/a")), None);
        assert_eq!(parse_price(Some("0")), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn test_map_availability() {
        assert!(map_availability("yes").unwrap());
        assert!(!map_availability("NO").unwrap());
        assert!(map_availability("maybe").is_err());
    }

    #[test]
    fn test_map_check_with_additional_prices() {
        let mut result = check("yes", Some("9.73"));
        result.first_year_promo = Some("yes".to_string());
        result.additional = Some(AdditionalPricing {
            renewal: Some(PriceEntry {
                price: Some("10.37".to_string()),
            }),
            transfer: Some(PriceEntry {
                price: Some("9.68".to_string()),
            }),
        });

        let quote = map_check_to_quote("Porkbun", &result, None).unwrap();

        assert!(quote.available);
        assert_eq!(quote.price, Some(9.73));
        assert_eq!(quote.renewal_price, Some(10.37));
        assert_eq!(quote.transfer_price, Some(9.68));
        assert_eq!(quote.promo_price, Some(9.73));
        assert_eq!(quote.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_map_check_falls_back_to_tld_pricing() {
        let result = check("no", None);
        let pricing = TldPricing {
            registration: Some("11.08".to_string()),
            renewal: Some("11.08".to_string()),
            transfer: None,
        };

        assert!(needs_tld_pricing(&result));
        let quote = map_check_to_quote("Porkbun", &result, Some(&pricing)).unwrap();

        assert!(!quote.available);
        assert_eq!(quote.price, Some(11.08));
        assert_eq!(quote.offer_price(), None);
    }

    #[test]
    fn test_map_check_without_any_price() {
        let quote = map_check_to_quote("Porkbun", &check("yes", None), None).unwrap();
        assert!(quote.available);
        assert_eq!(quote.price, None);
        assert_eq!(quote.renewal_price, None);
        assert!(!quote.is_error());
    }
}

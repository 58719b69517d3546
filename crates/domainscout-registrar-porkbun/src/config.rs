//! Settings parsing for the Porkbun adapter

use std::collections::HashMap;
use std::time::Duration;

use domainscout_registrar_api::{
    AdapterError,
    AdapterResult,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(crate) const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub(crate) struct PorkbunSettings {
    pub api_key: String,
    pub secret_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl PorkbunSettings {
    /// Credentials missing is not an error here; the adapter reports itself disabled
    pub fn from_map(settings: &HashMap<String, String>) -> AdapterResult<Self> {
        Ok(Self {
            api_key: get_trimmed(settings, "api_key").unwrap_or_default(),
            secret_key: get_trimmed(settings, "secret_key").unwrap_or_default(),
            base_url: get_base_url(settings),
            timeout: Duration::from_secs(parse_secs(
                settings,
                "timeout_secs",
                DEFAULT_TIMEOUT_SECS,
            )?),
            cache_ttl: Duration::from_secs(parse_secs(
                settings,
                "cache_ttl_secs",
                DEFAULT_CACHE_TTL_SECS,
            )?),
        })
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.secret_key.is_empty()
    }
}

fn get_trimmed(settings: &HashMap<String, String>, key: &str) -> Option<String> {
    settings
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Gets the API base URL, defaulting to the public v3 endpoint
pub(crate) fn get_base_url(settings: &HashMap<String, String>) -> String {
    get_trimmed(settings, "base_url")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn parse_secs(settings: &HashMap<String, String>, key: &str, default: u64) -> AdapterResult<u64> {
    match get_trimmed(settings, key) {
        Some(raw) => raw.parse().map_err(|_| {
            AdapterError::InvalidConfig(format!("{key} must be a whole number of seconds"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PorkbunSettings::from_map(&HashMap::new()).unwrap();
        assert!(!settings.has_credentials());
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let mut map = HashMap::new();
        map.insert("api_key".to_string(), "pk1_abc".to_string());
        map.insert("secret_key".to_string(), "   ".to_string());

        let settings = PorkbunSettings::from_map(&map).unwrap();
        assert!(!settings.has_credentials());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let mut map = HashMap::new();
        map.insert("base_url".to_string(), "http://localhost:9000/".to_string());
        assert_eq!(get_base_url(&map), "http://localhost:9000");
    }

    #[test]
    fn test_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("timeout_secs".to_string(), "soon".to_string());
        assert!(matches!(
            PorkbunSettings::from_map(&map),
            Err(AdapterError::InvalidConfig(_))
        ));
    }
}

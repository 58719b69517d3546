//! Validated domain names

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Longest domain name accepted, per RFC 1035 presentation form
pub const MAX_DOMAIN_LENGTH: usize = 253;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$")
        .expect("Invalid domain regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainNameError {
    #[error("Domain name is empty")]
    Empty,

    #[error("Domain name exceeds 253 characters")]
    TooLong,

    #[error("Invalid domain name: {0}")]
    Malformed(String),
}

/// A normalized, lowercase domain name such as `example.com`.
///
/// Construct with [`DomainName::parse`]; the value cannot be mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainNameError> {
        let normalized = input.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainNameError::Empty);
        }

        if normalized.len() > MAX_DOMAIN_LENGTH {
            return Err(DomainNameError::TooLong);
        }

        if !DOMAIN_PATTERN.is_match(&normalized) {
            return Err(DomainNameError::Malformed(normalized));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First label, e.g. `example` for `example.co.uk`
    pub fn label(&self) -> &str {
        self.0.split_once('.').map(|(label, _)| label).unwrap_or(&self.0)
    }

    /// Everything after the first label, e.g. `co.uk` for `example.co.uk`
    pub fn tld(&self) -> &str {
        self.0.split_once('.').map(|(_, tld)| tld).unwrap_or("")
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for DomainName {
    type Err = DomainNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for DomainName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

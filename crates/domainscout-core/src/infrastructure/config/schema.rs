use std::collections::HashMap;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

pub(super) const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub(super) const DEFAULT_CORS_ALLOW_ALL: bool = true;

pub(super) const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub(super) const DEFAULT_CACHE_TTL_SECS: u64 = 60;

pub(super) const DEFAULT_CHUNK_SIZE: usize = 8;

pub(super) const DEFAULT_MAX_DOMAINS: usize = 500;

pub(super) const DEFAULT_SUGGESTIONS_BASE_URL: &str = "https://api.openai.com/v1";

pub(super) const DEFAULT_SUGGESTIONS_MODEL: &str = "gpt-4o-mini";

pub(super) const DEFAULT_SUGGESTIONS_TIMEOUT_SECS: u64 = 20;

/// Registrars enabled when the config file has no `[registrars]` table
const DEFAULT_REGISTRARS: [&str; 5] = ["namecheap", "godaddy", "porkbun", "cloudflare", "upflare"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainScoutConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub bulk: BulkConfig,

    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    #[serde(default = "default_registrars")]
    pub registrars: IndexMap<String, RegistrarFileConfig>,
}

impl Default for DomainScoutConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            bulk: BulkConfig::default(),
            suggestions: SuggestionsConfig::default(),
            registrars: default_registrars(),
        }
    }
}

impl DomainScoutConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bulk.chunk_size == 0 {
            return Err("bulk.chunk_size must be greater than zero".to_string());
        }
        if self.bulk.max_domains == 0 {
            return Err("bulk.max_domains must be greater than zero".to_string());
        }
        if self.server.max_upload_bytes == 0 {
            return Err("server.max_upload_bytes must be greater than zero".to_string());
        }
        for (id, registrar) in &self.registrars {
            if registrar.registrar_type.trim().is_empty() {
                return Err(format!("registrars.{id}.type is required"));
            }
        }
        Ok(())
    }
}

fn default_registrars() -> IndexMap<String, RegistrarFileConfig> {
    DEFAULT_REGISTRARS
        .iter()
        .map(|id| {
            (
                id.to_string(),
                RegistrarFileConfig {
                    registrar_type: id.to_string(),
                    settings: HashMap::new(),
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_cors_allow_all")]
    pub cors_allow_all: bool,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_allow_all: default_cors_allow_all(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_cors_allow_all() -> bool {
    DEFAULT_CORS_ALLOW_ALL
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Domains checked concurrently per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Distinct domains accepted per request
    #[serde(default = "default_max_domains")]
    pub max_domains: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_domains: default_max_domains(),
        }
    }
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_max_domains() -> usize {
    DEFAULT_MAX_DOMAINS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// Falls back to `OPENAI_API_KEY` when unset
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_suggestions_base_url")]
    pub base_url: String,

    #[serde(default = "default_suggestions_model")]
    pub model: String,

    #[serde(default = "default_suggestions_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_suggestions_base_url(),
            model: default_suggestions_model(),
            timeout_secs: default_suggestions_timeout_secs(),
        }
    }
}

impl SuggestionsConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

fn default_suggestions_base_url() -> String {
    DEFAULT_SUGGESTIONS_BASE_URL.to_string()
}

fn default_suggestions_model() -> String {
    DEFAULT_SUGGESTIONS_MODEL.to_string()
}

fn default_suggestions_timeout_secs() -> u64 {
    DEFAULT_SUGGESTIONS_TIMEOUT_SECS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarFileConfig {
    #[serde(rename = "type")]
    pub registrar_type: String,

    /// Adapter settings; credentials missing here are read from the
    /// adapter's conventional environment variables
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

//! Porkbun adapter metadata

use domainscout_registrar_api::{
    AdapterMetadata,
    SettingField,
    SettingFieldType,
    SettingsSchema,
};

use crate::config::{
    DEFAULT_BASE_URL,
    DEFAULT_CACHE_TTL_SECS,
    DEFAULT_TIMEOUT_SECS,
};

pub(crate) fn create_metadata() -> AdapterMetadata {
    AdapterMetadata {
        name: "Porkbun".to_string(),
        registrar_id: "porkbun".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Live availability and pricing from the Porkbun JSON API".to_string(),
        website: Some("https://porkbun.com".to_string()),
        settings_schema: create_settings_schema(),
    }
}

/// `api_key` and `secret_key` are required; the rest tune the client
fn create_settings_schema() -> SettingsSchema {
    SettingsSchema::new()
        .add_field(SettingField::secret("api_key", "API Key", "PORKBUN_API_KEY"))
        .add_field(SettingField::secret(
            "secret_key",
            "Secret API Key",
            "PORKBUN_SECRET_KEY",
        ))
        .add_field(SettingField::optional(
            "base_url",
            "API base URL",
            SettingFieldType::Url,
            DEFAULT_BASE_URL,
        ))
        .add_field(SettingField::optional(
            "timeout_secs",
            "Request timeout (seconds)",
            SettingFieldType::Number,
            &DEFAULT_TIMEOUT_SECS.to_string(),
        ))
        .add_field(SettingField::optional(
            "cache_ttl_secs",
            "Quote cache TTL (seconds)",
            SettingFieldType::Number,
            &DEFAULT_CACHE_TTL_SECS.to_string(),
        ))
}

use std::collections::HashMap;

use domainscout_registrar_api::{
    AdapterMetadata,
    AdapterRegistry,
    RegistrarAdapter,
    SettingsSchema,
};
use domainscout_registrar_porkbun::PorkbunAdapter;
use domainscout_registrar_rdap::ListPriceAdapter;
use indexmap::IndexMap;

use crate::domain::{
    DomainError,
    DomainResult,
};
use crate::infrastructure::config::{
    interpolate,
    RegistrarFileConfig,
};

pub const REGISTRAR_TYPES: [&str; 5] = ["namecheap", "godaddy", "porkbun", "cloudflare", "upflare"];

pub fn create_adapter(registrar_type: &str) -> Option<Box<dyn RegistrarAdapter>> {
    match registrar_type {
        "namecheap" => Some(Box::new(ListPriceAdapter::namecheap())),
        "godaddy" => Some(Box::new(ListPriceAdapter::godaddy())),
        "porkbun" => Some(Box::new(PorkbunAdapter::new())),
        "cloudflare" => Some(Box::new(ListPriceAdapter::cloudflare())),
        "upflare" => Some(Box::new(ListPriceAdapter::upflare())),
        _ => None,
    }
}

pub fn get_all_adapter_metadata() -> Vec<AdapterMetadata> {
    REGISTRAR_TYPES
        .iter()
        .filter_map(|t| create_adapter(t))
        .map(|a| a.metadata().clone())
        .collect()
}

/// Builds the registry in configuration order.
///
/// Unknown registrar types are a configuration error. An adapter that fails
/// to initialize is still registered, disabled, so every configured
/// registrar shows up in results.
pub fn create_registry(
    registrars: &IndexMap<String, RegistrarFileConfig>,
) -> DomainResult<AdapterRegistry> {
    let mut registry = AdapterRegistry::new();

    for (id, config) in registrars {
        let mut adapter = create_adapter(&config.registrar_type).ok_or_else(|| {
            DomainError::InvalidConfig(format!(
                "Unknown registrar type '{}' for registrars.{id}",
                config.registrar_type
            ))
        })?;

        let settings = with_env_defaults(&adapter.metadata().settings_schema, &config.settings);

        match adapter.initialize(settings) {
            Ok(()) if adapter.enabled() => {
                tracing::info!(registrar = %id, "Registrar enabled");
            }
            Ok(()) => {
                tracing::info!(registrar = %id, "Registrar not configured, quotes will report not_configured");
            }
            Err(e) => {
                tracing::warn!(registrar = %id, error = %e, "Registrar failed to initialize");
            }
        }

        registry.register(adapter);
    }

    Ok(registry)
}

/// Fills settings the file left blank from the adapter's environment variables
fn with_env_defaults(
    schema: &SettingsSchema, configured: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut settings = configured.clone();

    for (key, template) in schema.env_templates() {
        let missing = settings.get(&key).map_or(true, |v| v.trim().is_empty());
        if !missing {
            continue;
        }
        if let Some(value) = interpolate(&template).ok().filter(|v| !v.is_empty()) {
            settings.insert(key, value);
        }
    }

    settings
}

//! Registrar profiles for the RDAP adapter family

use domainscout_registrar_api::{
    AdapterMetadata,
    SettingField,
    SettingFieldType,
    SettingsSchema,
};

use crate::config::{
    DEFAULT_RDAP_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};

/// A credential a registrar needs before it is enabled
#[derive(Debug)]
pub(crate) struct Credential {
    pub key: &'static str,
    pub label: &'static str,
    pub env_var: &'static str,
}

/// Static description of one registrar in this family
#[derive(Debug)]
pub(crate) struct RegistrarProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    pub credentials: &'static [Credential],
    pub list_price: f64,
    pub renewal_price: f64,
}

pub(crate) static NAMECHEAP: RegistrarProfile = RegistrarProfile {
    id: "namecheap",
    name: "Namecheap",
    description: "Namecheap availability via RDAP with list pricing",
    website: "https://www.namecheap.com",
    credentials: &[
        Credential {
            key: "api_key",
            label: "API Key",
            env_var: "NAMECHEAP_API_KEY",
        },
        Credential {
            key: "api_user",
            label: "API User",
            env_var: "NAMECHEAP_API_USER",
        },
    ],
    list_price: 12.98,
    renewal_price: 14.98,
};

pub(crate) static GODADDY: RegistrarProfile = RegistrarProfile {
    id: "godaddy",
    name: "GoDaddy",
    description: "GoDaddy availability via RDAP with list pricing",
    website: "https://www.godaddy.com",
    credentials: &[
        Credential {
            key: "api_key",
            label: "API Key",
            env_var: "GODADDY_API_KEY",
        },
        Credential {
            key: "api_secret",
            label: "API Secret",
            env_var: "GODADDY_API_SECRET",
        },
    ],
    list_price: 14.99,
    renewal_price: 18.99,
};

pub(crate) static CLOUDFLARE: RegistrarProfile = RegistrarProfile {
    id: "cloudflare",
    name: "Cloudflare",
    description: "Cloudflare Registrar availability via RDAP with at-cost pricing",
    website: "https://www.cloudflare.com/products/registrar/",
    credentials: &[Credential {
        key: "api_token",
        label: "API Token",
        env_var: "CLOUDFLARE_API_TOKEN",
    }],
    list_price: 8.03,
    renewal_price: 8.03,
};

pub(crate) static UPFLARE: RegistrarProfile = RegistrarProfile {
    id: "upflare",
    name: "Upflare",
    description: "Upflare availability via RDAP with list pricing",
    website: "https://upflare.com",
    credentials: &[Credential {
        key: "api_key",
        label: "API Key",
        env_var: "UPFLARE_API_KEY",
    }],
    list_price: 10.49,
    renewal_price: 12.49,
};

pub(crate) fn create_metadata(profile: &RegistrarProfile) -> AdapterMetadata {
    AdapterMetadata {
        name: profile.name.to_string(),
        registrar_id: profile.id.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: profile.description.to_string(),
        website: Some(profile.website.to_string()),
        settings_schema: create_settings_schema(profile),
    }
}

fn create_settings_schema(profile: &RegistrarProfile) -> SettingsSchema {
    let schema = profile
        .credentials
        .iter()
        .fold(SettingsSchema::new(), |schema, c| {
            schema.add_field(SettingField::secret(c.key, c.label, c.env_var))
        });

    schema
        .add_field(SettingField::optional(
            "list_price",
            "First-year price",
            SettingFieldType::Number,
            &profile.list_price.to_string(),
        ))
        .add_field(SettingField::optional(
            "renewal_price",
            "Renewal price",
            SettingFieldType::Number,
            &profile.renewal_price.to_string(),
        ))
        .add_field(SettingField::optional(
            "rdap_base_url",
            "RDAP server",
            SettingFieldType::Url,
            DEFAULT_RDAP_BASE_URL,
        ))
        .add_field(SettingField::optional(
            "timeout_secs",
            "Request timeout (seconds)",
            SettingFieldType::Number,
            &DEFAULT_TIMEOUT_SECS.to_string(),
        ))
}

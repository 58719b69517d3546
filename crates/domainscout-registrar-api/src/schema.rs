use serde::{
    Deserialize,
    Serialize,
};

/// Setting value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingFieldType {
    /// Plain text
    Text,
    /// Secret value (never echoed back)
    Secret,
    /// Decimal number
    Number,
    /// URL
    Url,
}

/// A single adapter setting definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingField {
    /// Setting key (used in the settings HashMap)
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Environment variable the default configuration reads this from
    pub env_var: Option<String>,
    /// Value type
    pub field_type: SettingFieldType,
    /// Whether the adapter is disabled without it
    pub required: bool,
    /// Default value, if any
    pub default_value: Option<String>,
}

impl SettingField {
    pub fn secret(key: &str, label: &str, env_var: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            env_var: Some(env_var.to_string()),
            field_type: SettingFieldType::Secret,
            required: true,
            default_value: None,
        }
    }

    pub fn optional(key: &str, label: &str, field_type: SettingFieldType, default: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            env_var: None,
            field_type,
            required: false,
            default_value: Some(default.to_string()),
        }
    }
}

/// Complete settings schema for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSchema {
    /// Schema fields
    pub fields: Vec<SettingField>,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field(mut self, field: SettingField) -> Self {
        self.fields.push(field);
        self
    }

    /// Keys of required settings
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
    }

    /// Default configuration: `${ENV_VAR:-}` templates for env-backed fields
    pub fn env_templates(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|f| {
                f.env_var
                    .as_ref()
                    .map(|var| (f.key.clone(), format!("${{{var}:-}}")))
            })
            .collect()
    }
}

impl Default for SettingsSchema {
    fn default() -> Self {
        Self::new()
    }
}

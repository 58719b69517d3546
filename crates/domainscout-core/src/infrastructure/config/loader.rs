use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::interpolation::{
    interpolate_toml,
    InterpolationError,
};
use super::schema::DomainScoutConfig;

pub const CONFIG_PATH_ENV: &str = "DOMAINSCOUT_CONFIG_PATH";

pub const BIND_ADDR_ENV: &str = "DOMAINSCOUT_BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] InterpolationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    /// `DOMAINSCOUT_CONFIG_PATH`, else `<config dir>/domainscout/config.toml` if it exists
    pub fn discover_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::debug!(path = %path, "Using config path from {}", CONFIG_PATH_ENV);
            return Some(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("domainscout").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Loads the discovered config file, or built-in defaults when there is none
    pub fn load_default() -> ConfigLoadResult<DomainScoutConfig> {
        let mut config = match Self::discover_config_path() {
            Some(path) => Self::load(&path)?,
            None => {
                tracing::info!("No config file found, using built-in defaults");
                DomainScoutConfig::default()
            }
        };

        if let Ok(bind_addr) = std::env::var(BIND_ADDR_ENV) {
            config.server.bind_addr = bind_addr;
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigLoadResult<DomainScoutConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            registrars = config.registrars.len(),
            "Loaded config"
        );

        Ok(config)
    }

    pub fn parse(content: &str) -> ConfigLoadResult<DomainScoutConfig> {
        let mut value: toml::Value = toml::from_str(content)?;

        interpolate_toml(&mut value)?;

        let config: DomainScoutConfig = value.try_into().map_err(|e| {
            ConfigLoadError::InvalidConfig(format!("Failed to deserialize config: {e}"))
        })?;

        config.validate().map_err(ConfigLoadError::InvalidConfig)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.bulk.chunk_size, 8);
        assert_eq!(config.registrars.len(), 5);
    }

    #[test]
    fn test_parse_registrars_keep_file_order() {
        let content = r#"
[registrars.pb]
type = "porkbun"

[registrars.cf]
type = "cloudflare"

[registrars.cf.settings]
api_token = "token"
list_price = "7.99"

[registrars.gd]
type = "godaddy"
"#;

        let config = ConfigLoader::parse(content).unwrap();

        assert_eq!(
            config.registrars.keys().collect::<Vec<_>>(),
            vec!["pb", "cf", "gd"]
        );
        assert_eq!(config.registrars["cf"].registrar_type, "cloudflare");
        assert_eq!(config.registrars["cf"].settings["list_price"], "7.99");
        assert!(config.registrars["pb"].settings.is_empty());
    }

    #[test]
    fn test_env_var_interpolation() {
        std::env::set_var("DS_LOADER_TEST_KEY", "pk1_live");

        let content = r#"
[registrars.porkbun]
type = "porkbun"

[registrars.porkbun.settings]
api_key = "${DS_LOADER_TEST_KEY}"
secret_key = "${DS_LOADER_TEST_SECRET:-sk1_default}"
"#;

        let config = ConfigLoader::parse(content).unwrap();
        let settings = &config.registrars["porkbun"].settings;
        assert_eq!(settings["api_key"], "pk1_live");
        assert_eq!(settings["secret_key"], "sk1_default");

        std::env::remove_var("DS_LOADER_TEST_KEY");
    }

    #[test]
    fn test_missing_required_var_fails() {
        let content = r#"
[suggestions]
api_key = "${DS_LOADER_TEST_NOT_SET_991}"
"#;

        assert!(matches!(
            ConfigLoader::parse(content),
            Err(ConfigLoadError::InterpolationError(_))
        ));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let content = "[bulk]\nchunk_size = 0\n";
        assert!(matches!(
            ConfigLoader::parse(content),
            Err(ConfigLoadError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_addr = \"0.0.0.0:9000\"\n\n[cache]\nttl_secs = 15").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.cache.ttl_secs, 15);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ConfigLoader::load(&dir.path().join("absent.toml")),
            Err(ConfigLoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_discover_config_path_env_override() {
        std::env::set_var(CONFIG_PATH_ENV, "/custom/domainscout.toml");
        assert_eq!(
            ConfigLoader::discover_config_path(),
            Some(PathBuf::from("/custom/domainscout.toml"))
        );
        std::env::remove_var(CONFIG_PATH_ENV);
    }
}

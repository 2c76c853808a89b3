use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use larder_generator::llm::{PROVIDERS, ProviderSettings};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub generator: ProviderSettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file with the seed recipes. The built-in sample catalog is used
    /// when unset.
    #[serde(default)]
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// JSON log lines instead of the pretty console format.
    pub json: bool,
}

impl Config {
    /// Load configuration from file and the process environment
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (GEMINI_API_KEY)
    /// 2. Prefixed variables (LARDER__SERVER__PORT, LARDER__GENERATOR__MODEL, ...)
    /// 3. Config file (`--config`, CONFIG_PATH or config/default.toml)
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`] with an explicit set of environment variables.
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let defaults = ProviderSettings::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("generator.provider", defaults.provider)?
            .set_default("generator.model", defaults.model)?
            .set_default("generator.temperature", f64::from(defaults.temperature))?
            .set_default(
                "generator.max_output_tokens",
                i64::from(defaults.max_output_tokens),
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        let legacy_api_key = vars.get("GEMINI_API_KEY").cloned();

        builder = builder.add_source(
            Environment::with_prefix("LARDER")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        );

        if let Some(api_key) = legacy_api_key {
            builder = builder.set_override("generator.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if !PROVIDERS.contains(&self.generator.provider.as_str()) {
            return Err(format!(
                "Unknown generator provider '{}', expected one of: {}",
                self.generator.provider,
                PROVIDERS.join(", ")
            ));
        }
        if self.generator.provider == "gemini"
            && self
                .generator
                .api_key
                .as_deref()
                .is_none_or(|key| key.trim().is_empty())
        {
            return Err(
                "Gemini API key is required (GEMINI_API_KEY or LARDER__GENERATOR__API_KEY)"
                    .to_owned(),
            );
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err("Generator temperature must be between 0 and 2".to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_owned(),
                port: 3000,
            },
            generator: ProviderSettings {
                api_key: Some("test-key".to_owned()),
                ..Default::default()
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_owned(),
                json: false,
            },
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_provider() {
        let mut config = config();
        config.generator.provider = "openai".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_gemini_without_key() {
        let mut config = config();
        config.generator.api_key = None;
        assert!(config.validate().is_err());

        config.generator.provider = "fake".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_temperature_range() {
        let mut config = config();
        config.generator.temperature = 2.5;
        assert!(config.validate().is_err());
    }
}

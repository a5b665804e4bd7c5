//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Largest supported number of money decimal places.
pub const MAX_MONEY_DECIMAL_PLACES: u32 = 10;

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # Currency, rounding and server settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Currency: {}", loader.config().currency);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - The file contains invalid YAML or is missing a required field
    /// - `money_decimal_places` exceeds [`MAX_MONEY_DECIMAL_PLACES`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml(&config_path)?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml(path: &Path) -> EngineResult<PayrollConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &PayrollConfig) -> EngineResult<()> {
        if config.money_decimal_places > MAX_MONEY_DECIMAL_PLACES {
            return Err(EngineError::InvalidConfig {
                field: "money_decimal_places".to_string(),
                message: format!(
                    "must be at most {}, got {}",
                    MAX_MONEY_DECIMAL_PLACES, config.money_decimal_places
                ),
            });
        }

        if config.currency.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    fn temp_config_dir(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE_NAME), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().currency, "AUD");
        assert_eq!(loader.config().money_decimal_places, 2);
        assert_eq!(loader.config().server.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = temp_config_dir("invalid-yaml", "currency: [unclosed");

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_required_field_returns_parse_error() {
        let dir = temp_config_dir("missing-field", "currency: USD\n");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("money_decimal_places"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_server_section_defaults_when_absent() {
        let dir = temp_config_dir("no-server", "currency: USD\nmoney_decimal_places: 4\n");

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config().currency, "USD");
        assert_eq!(loader.config().money_decimal_places, 4);
        assert_eq!(loader.config().server.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_too_many_decimal_places_is_rejected() {
        let config = PayrollConfig {
            money_decimal_places: 11,
            ..PayrollConfig::default()
        };

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "money_decimal_places")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_currency_is_rejected() {
        let config = PayrollConfig {
            currency: "  ".to_string(),
            ..PayrollConfig::default()
        };

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_loader_matches_default_config() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &PayrollConfig::default());
    }
}

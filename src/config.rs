//! Configuration management for the signup form
//!
//! Defaults are built in, then overridden by an optional TOML file and
//! finally by `SIGNUP_` prefixed environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::validator::ValidationRules;

/// Config file names probed in order, without extension. Later files win.
const CONFIG_PATHS: [&str; 2] = ["config", "signup"];

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SignupConfig {
    // ═══ STORAGE (Environment Override Supported) ═══
    /// JSON file backing the key-value store
    /// Environment: SIGNUP_STORAGE_PATH
    pub storage_path: String,

    /// Key holding the serialized user list
    /// Environment: SIGNUP_STORAGE_KEY
    pub storage_key: String,

    // ═══ VALIDATION LIMITS ═══
    pub id_min_length: usize,
    pub id_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl SignupConfig {
    /// Load configuration from defaults, config files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        for config_path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("SIGNUP"));

        Self::build(builder)
    }

    /// Builder pre-populated with the built-in defaults
    pub(crate) fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let rules = ValidationRules::default();

        Config::builder()
            .set_default("storage_path", "./signup-storage.json")?
            .set_default("storage_key", "users")?
            .set_default("id_min_length", rules.id_min_length as i64)?
            .set_default("id_max_length", rules.id_max_length as i64)?
            .set_default("password_min_length", rules.password_min_length as i64)?
            .set_default("password_max_length", rules.password_max_length as i64)
    }

    pub(crate) fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: SignupConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.trim().is_empty() {
            return Err(ConfigError::Message("storage_path cannot be empty".into()));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Message("storage_key cannot be empty".into()));
        }

        if self.id_min_length == 0 || self.password_min_length == 0 {
            return Err(ConfigError::Message(
                "minimum lengths must be greater than 0".into(),
            ));
        }

        if self.id_min_length > self.id_max_length {
            return Err(ConfigError::Message(
                "id_min_length must not exceed id_max_length".into(),
            ));
        }

        if self.password_min_length > self.password_max_length {
            return Err(ConfigError::Message(
                "password_min_length must not exceed password_max_length".into(),
            ));
        }

        Ok(())
    }

    /// Get storage path as PathBuf
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_path)
    }

    /// Length limits used by the validation pipeline
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            id_min_length: self.id_min_length,
            id_max_length: self.id_max_length,
            password_min_length: self.password_min_length,
            password_max_length: self.password_max_length,
        }
    }
}

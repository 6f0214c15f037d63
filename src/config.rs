//! # Configuration
//!
//! Layered configuration: built-in defaults, then an optional TOML file
//! (`config/helpers.toml`, or the path in `HELPERS_CONFIG_FILE`), then
//! `HELPERS__*` environment variables, e.g. `HELPERS__MESSAGE_PREFIX=contoso`
//! or `HELPERS__LOGGING__FORMAT=json`.

use crate::constants::DEFAULT_MESSAGE_PREFIX;
use crate::error::{HelperError, Result};
use crate::logging::detect_environment;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_ENV: &str = "HELPERS_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "config/helpers.toml";
const ENV_PREFIX: &str = "HELPERS";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Overrides the environment's default level when set
    pub level: Option<String>,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// development, test or production; defaults to `HELPERS_ENV`/`APP_ENV`
    pub environment: String,
    /// Publisher prefix of the registered message names
    pub message_prefix: String,
    /// Check that `TargetEntityLogicalName` names a real entity before queueing
    pub verify_target_entity: bool,
    pub logging: LoggingConfig,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            environment: detect_environment(),
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
            verify_target_entity: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl HelpersConfig {
    /// Load from the default file location and the process environment
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from_sources(Some(&path), None)
    }

    /// Load from an optional file and an explicit variable map.
    ///
    /// `env_vars` of `None` reads the process environment; tests pass a map so
    /// they don't touch shared process state.
    pub fn load_from_sources(
        path: Option<&Path>,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&HelpersConfig::default()).map_err(configuration_error)?,
        );

        if let Some(path) = path.filter(|path| path.exists()) {
            debug!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env_vars),
        );

        let config: HelpersConfig = builder
            .build()
            .map_err(configuration_error)?
            .try_deserialize()
            .map_err(configuration_error)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.message_prefix.is_empty()
            || !self
                .message_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(HelperError::Configuration(format!(
                "Invalid message_prefix '{}': expected letters, digits or underscores",
                self.message_prefix
            )));
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(HelperError::Configuration(format!(
                    "Invalid logging.level '{level}': expected one of {}",
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Configured level, or the environment's default
    pub fn log_level(&self) -> String {
        self.logging
            .level
            .clone()
            .unwrap_or_else(|| default_log_level(&self.environment).to_string())
    }
}

fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

fn configuration_error(err: config::ConfigError) -> HelperError {
    HelperError::Configuration(err.to_string())
}

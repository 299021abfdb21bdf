//! Configuration module for lexitrie.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables such as `LEXITRIE__LOG__LEVEL`. The
//! merged result is validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LEXITRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for lexitrie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiConfig {
    /// Log configuration
    pub log: LogConfig,

    /// Word list configuration
    pub words: WordsConfig,
}

impl LexiConfig {
    /// Renders the configuration as a TOML document.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for LexiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.log.validate()?;
        self.words.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// How word lists are read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordsConfig {
    /// Word list used when no `--words` argument is given
    pub path: Option<PathBuf>,

    /// Strip surrounding whitespace from each line
    pub trim: bool,

    /// Ignore lines starting with `comment_prefix`
    pub skip_comments: bool,

    /// Marker for comment lines
    pub comment_prefix: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            path: None,
            trim: true,
            skip_comments: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for WordsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.skip_comments && self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty when skip_comments is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loader for lexitrie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(LexiConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LexiConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&LexiConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: LexiConfig = builder
            .build()
            .and_then(Config::try_deserialize::<LexiConfig>)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }
}

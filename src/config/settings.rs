//! Effective settings with provenance

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::defaults::BuiltinDefaults;
use crate::document::{parse_document, DocumentFormat};
use crate::utils::merge_layers;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "swaggerf.toml";

/// Accepted `log_level` values
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Origin of a configuration layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File(PathBuf),
    Cli,
}

/// Merged tool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Status code used by `unpack` when none is given
    pub default_status_code: u16,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Log level when RUST_LOG is unset
    pub log_level: String,

    /// Layers that contributed, in precedence order
    #[serde(skip)]
    pub sources: Vec<ConfigOrigin>,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = BuiltinDefaults::default();
        Self {
            default_status_code: defaults.default_status_code,
            pretty: defaults.pretty,
            log_level: defaults.log_level,
            sources: vec![ConfigOrigin::Builtin],
        }
    }
}

impl Settings {
    /// Build settings from the layers.
    ///
    /// An explicit `config_path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// in the working directory is used if present.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<Value>,
    ) -> Result<Self, ConfigError> {
        let mut layers = vec![BuiltinDefaults::default().to_value()];
        let mut sources = vec![ConfigOrigin::Builtin];

        let file = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.exists().then_some(fallback)
            }
        };

        if let Some(path) = file {
            layers.push(Self::load_file(&path)?);
            tracing::debug!(path = %path.display(), "loaded config file");
            sources.push(ConfigOrigin::File(path));
        }

        if let Some(cli) = cli_overrides {
            layers.push(cli);
            sources.push(ConfigOrigin::Cli);
        }

        let merged = merge_layers(layers);
        let mut settings: Settings = serde_json::from_value(merged)
            .map_err(|e| ConfigError::ParseError(format!("invalid settings: {}", e)))?;
        settings.sources = sources;
        settings.validate()?;

        tracing::debug!(?settings, "effective settings");
        Ok(settings)
    }

    fn load_file(path: &Path) -> Result<Value, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let value = parse_document(&contents, DocumentFormat::from_path(path))
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        if !value.is_object() {
            return Err(ConfigError::ParseError(format!(
                "{}: config must be a table",
                path.display()
            )));
        }
        Ok(value)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=999).contains(&self.default_status_code) {
            return Err(ConfigError::ValidationError(
                "default_status_code must be in [100, 999]".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

//! Tool configuration
//!
//! Settings are merged from three layers, lowest precedence first:
//! 1. Built-in defaults
//! 2. Config file (`--config PATH`, or `swaggerf.toml` in the working directory)
//! 3. CLI flags

mod defaults;
mod settings;

pub use defaults::BuiltinDefaults;
pub use settings::{ConfigError, ConfigOrigin, Settings, DEFAULT_CONFIG_FILE, LOG_LEVELS};

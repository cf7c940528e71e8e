//! Built-in defaults (layer 1)

use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_STATUS_CODE;

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Status code for handler returns that carry none (default: 200)
    pub default_status_code: u16,

    /// Pretty-print JSON output (default: true)
    pub pretty: bool,

    /// Log level when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            default_status_code: DEFAULT_STATUS_CODE,
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "default_status_code": self.default_status_code,
            "pretty": self.pretty,
            "log_level": self.log_level,
        })
    }
}

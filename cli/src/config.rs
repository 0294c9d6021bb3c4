//! Operator configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use zkid_types::RecoveryParams;
use zkid_utils::LogFormat;

use crate::error::CliError;

/// Settings for the `zkid` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and environment variables override individual fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Keep replaying after an operation is rejected.
    #[serde(default)]
    pub keep_going: bool,

    /// Recovery policy applied to accounts created by `replay`.
    /// Kept last so it serializes as a trailing `[params]` table.
    #[serde(default)]
    pub params: RecoveryParams,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            keep_going: false,
            params: RecoveryParams::default(),
        }
    }
}

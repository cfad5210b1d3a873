//! CLI configuration with TOML file support.

use std::path::{Path, PathBuf};

use mnemo_codec::{Language, Strength};
use mnemo_utils::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Defaults for the `mnemo` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and `MNEMO_*` environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Built-in word list language.
    #[serde(default)]
    pub language: Language,

    /// Path to a JSON word list, used instead of `language` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<PathBuf>,

    /// Entropy bits for `generate`.
    #[serde(default = "default_strength")]
    pub strength: u32,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_strength() -> u32 {
    Strength::DEFAULT.bits()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            wordlist: None,
            strength: default_strength(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

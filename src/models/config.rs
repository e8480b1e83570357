use serde::Deserialize;
use std::path::{Path, PathBuf};

use color_adjust::DEFAULT_PERCENT;

use crate::error::ConfigError;

/// Environment variable naming the config file when `--config` is not given
pub const CONFIG_ENV: &str = "HUESHIFT_CONFIG";

/// Defaults loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Percent used when a command is given no `--percent`
    pub percent: i32,

    /// Output format tag used when a command is given no `--output`.
    /// Kept as text; an unknown tag is reported when a command runs.
    pub output: String,

    /// Show results and errors in the framed window surface
    pub window: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            output: "HEX".to_string(),
            window: false,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration.
    ///
    /// An explicit path must load cleanly. Without one, the file named by
    /// `HUESHIFT_CONFIG` is tried and any problem falls back to defaults
    /// with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
            return Ok(config);
        }

        let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
            return Ok(Self::default());
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Ok(Self::default())
            }
        }
    }
}

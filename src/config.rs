//! Panel configuration: defaults, optional YAML file, environment override

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL fetched once per activation
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_ENDPOINT),
        }
    }
}

impl Config {
    /// Defaults, then `~/.fetchpane/config.yaml`, then `FETCHPANE_ENDPOINT`.
    ///
    /// A broken config file is logged and skipped.
    pub fn load() -> Self {
        let path = config_path();
        let config = if path.exists() {
            match Self::load_from(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        config.with_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    /// Parse a YAML config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_yaml::from_str::<Config>(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Replace the endpoint when `value` is present and non-blank
    pub fn with_endpoint_override(mut self, value: Option<String>) -> Self {
        if let Some(endpoint) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }
}

/// Location of the optional config file
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{}", APP_NAME))
        .join("config.yaml")
}

//! Runtime configuration.
//!
//! Sources, later wins: built-in defaults, an optional TOML file, then the
//! `MOSAIC_*` environment variables. Retention and quota limits are constants
//! in their modules.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const ENV_BASE_URL: &str = "MOSAIC_BASE_URL";
pub const ENV_ADMIN_TOKEN: &str = "MOSAIC_ADMIN_TOKEN";

pub const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MosaicConfig {
    /// Prefix for gallery locations. Empty means relative paths.
    pub base_url: String,

    /// Bearer token guarding the quota endpoint. Unset leaves it open.
    pub admin_token: Option<String>,

    /// Listing size when the caller gives none.
    pub default_list_limit: usize,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            admin_token: None,
            default_list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl MosaicConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads the optional file, then applies the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        Ok(config.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Applies `MOSAIC_*` overrides from `lookup` (usually the process env).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(token) = lookup(ENV_ADMIN_TOKEN) {
            self.admin_token = Some(token);
        }
        self
    }
}

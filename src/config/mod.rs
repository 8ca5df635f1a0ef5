// Configuration module

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file (`--config` path, or `~/.gatordocs/config.toml`)
    /// 3. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?);

        let builder = match config_path {
            // An explicitly requested file must exist
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(&Self::default_config_path()).required(false)),
        };

        let config = builder
            // Override with environment variables: GATORDOCS_<SECTION>__<FIELD>,
            // e.g. GATORDOCS_CACHE__TTL_SECONDS. The double underscore keeps
            // multi-word field names like ttl_seconds addressable.
            .add_source(
                Environment::with_prefix("GATORDOCS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gatordocs")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

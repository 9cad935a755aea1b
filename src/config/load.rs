use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Toml};

use super::RazzConfig;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "razz.toml";

/// Prefix for environment overrides, nested with `__` (`RAZZ_DATA__DESTINATION`)
pub const ENV_PREFIX: &str = "RAZZ_";

impl RazzConfig {
    /// Load configuration from `custom_config`, or `razz.toml` when not given
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let path = Path::new(custom_config.unwrap_or(DEFAULT_CONFIG_FILE));
        if !path.is_file() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        tracing::debug!("Loading configuration from {}", path.display());
        let config: RazzConfig = Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Provider chain: the file first, environment variables on top
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Parse configuration from TOML text, ignoring the environment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Figment::from(Toml::string(content))
            .extract()
            .context("Failed to parse configuration")?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

use crate::{provider::ProviderId, units::Units};

/// Overrides the stored OpenWeatherMap key when set.
pub const OPENWEATHERMAP_API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Sent to met.no when no `user_agent` is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("coldoutside/", env!("CARGO_PKG_VERSION"));

/// Configuration for a single provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Point the client somewhere other than the public API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default provider id, e.g. "openweathermap" or "metno".
    pub default_provider: Option<String>,

    /// "metric" or "imperial"; metric when unset.
    pub default_units: Option<String>,

    /// Identifies us to met.no, e.g. "myapp/1.0 me@example.com".
    pub user_agent: Option<String>,

    /// Example TOML:
    /// [providers.openweathermap]
    /// api_key = "..."
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Picked up from the environment by `load`; never written back.
    #[serde(skip)]
    env_api_key: Option<String>,
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        let s = self.default_provider.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "No default provider configured.\n\
                 Hint: run `coldoutside configure <provider>` (e.g. `coldoutside configure metno`) first."
            )
        })?;

        ProviderId::try_from(s.as_str())
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    pub fn default_units(&self) -> Result<Units> {
        match &self.default_units {
            Some(units) => Units::try_from(units.as_str()),
            None => Ok(Units::default()),
        }
    }

    pub fn set_default_units(&mut self, units: Units) {
        self.default_units = Some(units.as_str().to_string());
    }

    pub fn provider_config(&self, id: ProviderId) -> Option<&ProviderConfig> {
        self.providers.get(id.as_str())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    ///
    /// `OPENWEATHERMAP_API_KEY` is applied on top of whatever is stored.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.env_api_key = std::env::var(OPENWEATHERMAP_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        Ok(cfg)
    }

    /// Load config from an explicit path, without environment overrides.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "coldoutside", "coldoutside")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Convenience helper: set/replace a provider API key and optionally set default provider.
    pub fn upsert_provider_api_key(&mut self, provider_id: ProviderId, api_key: String) {
        self.providers
            .entry(provider_id.as_str().to_string())
            .or_default()
            .api_key = Some(api_key);

        self.set_default_if_unset(provider_id);
    }

    /// Register a provider that needs no key, making it the default if none is set.
    pub fn enable_provider(&mut self, provider_id: ProviderId) {
        self.providers
            .entry(provider_id.as_str().to_string())
            .or_default();

        self.set_default_if_unset(provider_id);
    }

    fn set_default_if_unset(&mut self, provider_id: ProviderId) {
        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    /// Returns API key for a provider, if present.
    pub fn provider_api_key(&self, provider_id: ProviderId) -> Option<&str> {
        let env = match provider_id {
            ProviderId::OpenWeatherMap => self.env_api_key.as_deref(),
            ProviderId::MetNo => None,
        };

        env.or_else(|| {
            self.provider_config(provider_id)
                .and_then(|cfg| cfg.api_key.as_deref())
        })
    }

    pub fn provider_base_url(&self, provider_id: ProviderId) -> Option<&str> {
        self.provider_config(provider_id)
            .and_then(|cfg| cfg.base_url.as_deref())
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn is_provider_configured(&self, provider_id: ProviderId) -> bool {
        if provider_id.requires_api_key() {
            self.provider_api_key(provider_id).is_some()
        } else {
            true
        }
    }
}

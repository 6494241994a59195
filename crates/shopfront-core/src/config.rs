use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::image_url::DEFAULT_PLACEHOLDER_HOSTS;

/// Environment variable that overrides `api_base_url` from the config file.
pub const API_BASE_ENV: &str = "SHOPFRONT_API_BASE_URL";

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyApiBase,
}

/// Global configuration loaded from `~/.config/shopfront/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    /// Origin of the storefront API; image storage paths are resolved against it.
    pub api_base_url: String,
    /// Substrings identifying placeholder-image services whose URLs are treated as broken.
    #[serde(default = "default_placeholder_hosts")]
    pub placeholder_hosts: Vec<String>,
}

fn default_placeholder_hosts() -> Vec<String> {
    DEFAULT_PLACEHOLDER_HOSTS
        .iter()
        .map(|h| h.to_string())
        .collect()
}

impl Default for ShopfrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            placeholder_hosts: default_placeholder_hosts(),
        }
    }
}

/// API base from the environment, ignoring blank values. `lookup` is `std::env::var` in production.
pub fn api_base_override<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_BASE_ENV).filter(|v| !v.trim().is_empty())
}

impl ShopfrontConfig {
    /// Apply overrides from the environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = api_base_override(lookup) {
            tracing::debug!("{} overrides api_base_url", API_BASE_ENV);
            self.api_base_url = base;
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shopfront")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<ShopfrontConfig> {
    if !path.exists() {
        let default_cfg = ShopfrontConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ShopfrontConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir and apply environment overrides.
pub fn load_or_init() -> Result<ShopfrontConfig> {
    let path = config_path()?;
    let mut cfg = load_or_init_at(&path)?;
    cfg.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(cfg)
}

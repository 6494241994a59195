//! `shopfront config` – show where the config lives and what is in effect.

use anyhow::Result;
use shopfront_core::config::{self, ShopfrontConfig, API_BASE_ENV};

pub fn run_config(cfg: &ShopfrontConfig) -> Result<()> {
    println!("config file:       {}", config::config_path()?.display());
    for line in settings_lines(cfg, |key| std::env::var(key).ok()) {
        println!("{line}");
    }
    Ok(())
}

/// Effective settings, noting an environment override only when one actually applied.
pub(crate) fn settings_lines<F>(cfg: &ShopfrontConfig, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut lines = vec![
        format!("api_base_url:      {}", cfg.api_base_url),
        format!("placeholder_hosts: {}", cfg.placeholder_hosts.join(", ")),
    ];
    if config::api_base_override(lookup).is_some() {
        lines.push(format!("  (api_base_url overridden by {API_BASE_ENV})"));
    }
    lines
}

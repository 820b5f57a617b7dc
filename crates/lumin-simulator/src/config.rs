//! Loading [`WatchConfig`] from TOML files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lumin_core::config::WatchConfig;

/// Parse and validate a TOML config. Missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<WatchConfig> {
    let config: WatchConfig = toml::from_str(text).context("parse watch config")?;
    config
        .validate()
        .map_err(|e| anyhow!("invalid watch config: {e}"))?;
    Ok(config)
}

/// Read the config at `path`, or the defaults when there is no path.
pub fn load_config(path: Option<&Path>) -> Result<WatchConfig> {
    let Some(path) = path else {
        return Ok(WatchConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("load config file {}", path.display()))
}

/// Effective config as TOML, for `--dump-config`.
pub fn dump_config(config: &WatchConfig) -> Result<String> {
    toml::to_string_pretty(config).context("serialize watch config")
}

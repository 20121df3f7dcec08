use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Per-provider additions (a `[providers.<name>]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderOverrides {
    /// Extra host/path substrings that identify this provider (e.g. a new mirror domain).
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

/// Global configuration loaded from `~/.config/qrsnap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrsnapConfig {
    /// Capacity of each inbound traffic channel (network requests, downloads) of a router task.
    pub event_buffer: usize,
    /// Keyword additions keyed by provider name (case-insensitive).
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderOverrides>,
}

impl Default for QrsnapConfig {
    fn default() -> Self {
        Self {
            event_buffer: 64,
            providers: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrsnap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QrsnapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QrsnapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &std::path::Path) -> Result<QrsnapConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: QrsnapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

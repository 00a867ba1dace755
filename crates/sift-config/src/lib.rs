use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for sift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Debounce window for free-text and numeric filter fields, in ms.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Items per result page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Deferred-write strategy: "idle" or "delay".
    #[serde(default = "default_persist")]
    pub persist: String,

    /// Simulated latency of the bundled catalog provider, in ms.
    #[serde(default = "default_latency_ms")]
    pub provider_latency_ms: u64,

    /// Override for the persisted filter state file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
            persist: default_persist(),
            provider_latency_ms: default_latency_ms(),
            state_path: None,
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_page_size() -> usize {
    5
}

fn default_persist() -> String {
    "idle".to_string()
}

fn default_latency_ms() -> u64 {
    1000
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Default config file location (`.../sift/config.toml`).
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "sift")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("sift.toml"))
    }
}

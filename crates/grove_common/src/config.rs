//! Grove configuration
//!
//! Settings for the chain-reader side of the app: which contract to watch,
//! which explorer to link to, and how aggressively to poll. Config file:
//! `~/.config/grove/grove.toml`, every field optional. The contract address
//! can also come from `GROVE_CONTRACT_ADDRESS`, which wins over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONTRACT_ADDRESS_ENV: &str = "GROVE_CONTRACT_ADDRESS";

const DEFAULT_EXPLORER_BASE: &str = "https://sepolia.basescan.org";
const DEFAULT_POLLING_INTERVAL_MS: u64 = 10_000;
const DEFAULT_STALE_TIME_MS: u64 = 5_000;
const DEFAULT_CACHE_TIME_MS: u64 = 1000 * 60 * 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroveConfig {
    /// Tree contract address, 0x-prefixed
    #[serde(default)]
    pub contract_address: String,

    /// Block explorer base URL for "view on explorer" links
    #[serde(default = "default_explorer_base")]
    pub explorer_base: String,

    /// How often the chain reader refetches records
    #[serde(default = "default_polling_interval")]
    pub polling_interval_ms: u64,

    /// Age after which a cached record is refetched on access
    #[serde(default = "default_stale_time")]
    pub stale_time_ms: u64,

    /// Age after which an unused cached record is dropped
    #[serde(default = "default_cache_time")]
    pub cache_time_ms: u64,
}

fn default_explorer_base() -> String {
    DEFAULT_EXPLORER_BASE.to_string()
}
fn default_polling_interval() -> u64 {
    DEFAULT_POLLING_INTERVAL_MS
}
fn default_stale_time() -> u64 {
    DEFAULT_STALE_TIME_MS
}
fn default_cache_time() -> u64 {
    DEFAULT_CACHE_TIME_MS
}

impl Default for GroveConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            explorer_base: default_explorer_base(),
            polling_interval_ms: default_polling_interval(),
            stale_time_ms: default_stale_time(),
            cache_time_ms: default_cache_time(),
        }
    }
}

impl GroveConfig {
    /// Default config file location (`~/.config/grove/grove.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("grove").join("grove.toml"))
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists. The env override is applied either way.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded grove config");
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(address) = std::env::var(CONTRACT_ADDRESS_ENV) {
            if !address.is_empty() {
                self.contract_address = address;
            }
        }
    }

    /// Explorer page for the configured contract.
    pub fn explorer_url(&self) -> String {
        format!(
            "{}/address/{}",
            self.explorer_base.trim_end_matches('/'),
            self.contract_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_app_constants() {
        let config = GroveConfig::default();
        assert_eq!(config.polling_interval_ms, 10_000);
        assert_eq!(config.stale_time_ms, 5_000);
        assert_eq!(config.cache_time_ms, 300_000);
        assert_eq!(config.explorer_base, "https://sepolia.basescan.org");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contract_address = \"0xabc\"").unwrap();
        writeln!(file, "polling_interval_ms = 30000").unwrap();

        let config = GroveConfig::load_from(file.path()).unwrap();
        assert_eq!(config.contract_address, "0xabc");
        assert_eq!(config.polling_interval_ms, 30_000);
        assert_eq!(config.stale_time_ms, 5_000);
    }

    #[test]
    fn bad_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contract_address = [broken").unwrap();

        let err = GroveConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing config file"));
    }

    #[test]
    fn explorer_url_joins_cleanly() {
        let config = GroveConfig {
            contract_address: "0xdef".into(),
            explorer_base: "https://sepolia.basescan.org/".into(),
            ..GroveConfig::default()
        };
        assert_eq!(
            config.explorer_url(),
            "https://sepolia.basescan.org/address/0xdef"
        );
    }
}

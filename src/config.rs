//! Configuration loader - YAML manifest + .env settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behavior manifest loaded from wheel.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog installed on first run and restored by "Reset Wheel".
    #[serde(default = "default_catalog")]
    pub default_items: Vec<String>,
    /// Expand `Name*3` entries into three slots when adding items.
    #[serde(default = "default_expand")]
    pub expand_multipliers: bool,
    /// Initial position of the "keep items on wheel" toggle.
    #[serde(default)]
    pub keep_on_wheel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_items: default_catalog(),
            expand_multipliers: default_expand(),
            keep_on_wheel: false,
        }
    }
}

impl Config {
    /// Load the manifest from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

fn default_catalog() -> Vec<String> {
    [
        "Driver",
        "Wood",
        "Hybrid",
        "4 Iron",
        "5 Iron",
        "6 Iron",
        "7 Iron",
        "8 Iron",
        "9 Iron",
        "Wedge",
        "Sand Wedge",
        "Gap Wedge",
        "Putter",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_expand() -> bool {
    true
}

/// Settings loaded from .env
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: String,
    pub log_dir: String,
}

impl Settings {
    /// Load settings from .env / the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Settings {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            log_dir: std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_spinnable() {
        let config = Config::default();
        assert_eq!(config.default_items.len(), 13);
        assert!(config.expand_multipliers);
        assert!(!config.keep_on_wheel);
    }

    #[test]
    fn test_partial_manifest_fills_defaults() {
        let config: Config = serde_yaml::from_str("expand_multipliers: false").unwrap();
        assert!(!config.expand_multipliers);
        assert_eq!(config.default_items, Config::default().default_items);
    }
}

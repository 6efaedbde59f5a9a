//! Configuration file handling for saving and loading CLI settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::Game;

/// Relative difference inside which a trade counts as fair
pub const DEFAULT_FAIR_MARGIN: f64 = 0.10;

/// Settings that can be saved/loaded as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Game filter used when no `--game` is given
    pub default_game: Option<Game>,
    /// Fraction of the larger trade side tolerated as "fair"
    pub fair_margin: f64,
    /// Catalog used when no `--catalog` is given
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_game: None,
            fair_margin: DEFAULT_FAIR_MARGIN,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.fair_margin.is_finite() || !(0.0..1.0).contains(&self.fair_margin) {
            anyhow::bail!(
                "fair_margin must be at least 0 and below 1, got {}",
                self.fair_margin
            );
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("catalog_path must not be empty when set");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::new();
        assert_eq!(config.fair_margin, DEFAULT_FAIR_MARGIN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_margin() {
        let mut config = AppConfig::new();
        config.fair_margin = 1.0;
        assert!(config.validate().is_err());

        config.fair_margin = -0.1;
        assert!(config.validate().is_err());

        config.fair_margin = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_catalog_path() {
        let mut config = AppConfig::new();
        config.catalog_path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"default_game": "mm2"}"#).unwrap();
        assert_eq!(config.default_game, Some(Game::Mm2));
        assert_eq!(config.fair_margin, DEFAULT_FAIR_MARGIN);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            default_game: Some(Game::AdoptMe),
            fair_margin: 0.05,
            catalog_path: Some(PathBuf::from("items.json")),
        };
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}

use crate::search::SearchThresholds;
use crate::utils::{data_dir, expand_tilde};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub wardrobe: WardrobeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Acceptance thresholds and request limits for outfit searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wardrobe searches keep scores strictly above this
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// Hypothetical searches keep scores at or above this
    #[serde(default = "default_hypothetical_min_score")]
    pub hypothetical_min_score: f64,
    /// Category-subset combinations keep scores at or above this
    #[serde(default = "default_min_score")]
    pub selection_min_score: f64,
    /// Largest product of slot sizes a single request may evaluate
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,
}

fn default_min_score() -> f64 {
    2.5
}

fn default_hypothetical_min_score() -> f64 {
    3.0
}

fn default_max_combinations() -> usize {
    5_000_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeConfig {
    /// JSON wardrobe store; `~` is expanded
    #[serde(default = "default_wardrobe_path")]
    pub path: String,
}

fn default_wardrobe_path() -> String {
    data_dir().join("wardrobe.json").to_string_lossy().into_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Results printed per search
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Print CSS color names next to RGB triples
    #[serde(default = "default_show_names")]
    pub show_names: bool,
}

fn default_limit() -> usize {
    20
}

fn default_show_names() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            hypothetical_min_score: default_hypothetical_min_score(),
            selection_min_score: default_min_score(),
            max_combinations: default_max_combinations(),
        }
    }
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            path: default_wardrobe_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            show_names: default_show_names(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mrmattias", "outfitmatch")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from the default location. Nothing is written here: a
    /// missing file gives defaults, a corrupt one is reported and ignored.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        match toml::from_str::<Config>(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = self.to_toml()?;
        fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn wardrobe_path(&self) -> PathBuf {
        expand_tilde(&self.wardrobe.path)
    }

    pub fn thresholds(&self) -> SearchThresholds {
        SearchThresholds {
            min_score: self.search.min_score,
            hypothetical_min_score: self.search.hypothetical_min_score,
            selection_min_score: self.search.selection_min_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.thresholds(), SearchThresholds::default());
        assert_eq!(config.search.max_combinations, 5_000_000);
        assert_eq!(config.display.limit, 20);
        assert!(config.display.show_names);
        assert!(config.wardrobe.path.ends_with("wardrobe.json"));
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nmin_score = 1.5\n\n[display]\nlimit = 3\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search.min_score, 1.5);
        assert_eq!(config.search.hypothetical_min_score, 3.0);
        assert_eq!(config.display.limit, 3);
        assert!(config.display.show_names);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search\nmin_score = ").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.wardrobe.path = "~/clothes.json".to_string();
        config.search.selection_min_score = 4.0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.thresholds().selection_min_score, 4.0);
        assert!(loaded.wardrobe_path().ends_with("clothes.json"));
    }
}

//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Browser UI settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Catalog API configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Language code sent with every list and search request.
    #[serde(default = "default_language")]
    pub language: String,
    /// Whether keyword search may return adult titles.
    #[serde(default)]
    pub include_adult: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            include_adult: false,
        }
    }
}

/// Browser UI configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Number of tiles visible per carousel window.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Carousel slide animation duration in milliseconds.
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            tick_rate_ms: default_tick_rate_ms(),
            slide_duration_ms: default_slide_duration_ms(),
        }
    }
}

fn default_language() -> String {
    String::from("en-US")
}

const fn default_window_size() -> usize {
    6
}

const fn default_tick_rate_ms() -> u64 {
    100
}

const fn default_slide_duration_ms() -> u64 {
    500
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if a field holds an unusable value.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Rejects values the browser cannot run with.
    fn validate(&self) -> Result<()> {
        if self.ui.window_size == 0 {
            bail!("ui.window_size must be at least 1");
        }
        if self.ui.tick_rate_ms == 0 {
            bail!("ui.tick_rate_ms must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.api.language, "en-US");
        assert!(!config.api.include_adult);
        assert_eq!(config.ui.window_size, 6);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.slide_duration_ms, 500);
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                language: String::from("ja-JP"),
                include_adult: true,
            },
            ui: UiConfig {
                window_size: 4,
                tick_rate_ms: 50,
                slide_duration_ms: 250,
            },
        };

        // Act
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        // Assert
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let path = Path::new("/tmp/flixterm_test_nonexistent_config.toml");

        // Act
        let config = AppConfig::load(path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig {
            api: ApiConfig {
                language: String::from("de-DE"),
                include_adult: false,
            },
            ui: UiConfig {
                window_size: 8,
                tick_rate_ms: 100,
                slide_duration_ms: 400,
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nlanguage = \"fr-FR\"\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.api.language, "fr-FR");
        assert_eq!(config.ui.window_size, 6);
    }

    #[test]
    fn test_load_rejects_zero_window_size() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nwindow_size = 0\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("ui.window_size must be at least 1")
        );
    }
}

//! Configuration management for viewfinder
//!
//! Provides loading and saving of panel startup options and an optional
//! site-specific preset catalog. Session state itself is never persisted;
//! only these startup options live on disk.

use crate::catalog::PresetCatalog;
use crate::errors::ConfiguratorError;
use crate::types::ResolutionPreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewfinderConfig {
    pub preview: PreviewConfig,
    pub catalog: CatalogConfig,
}

/// Preview startup options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Start with the preview mirrored
    pub mirrored: bool,
    /// Run device enumeration automatically at initialization
    pub auto_enumerate: bool,
}

/// Preset catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replacement preset table; empty means "use the built-in catalog"
    pub presets: Vec<PresetEntry>,
}

/// One configured preset. Width and height must be both set or both unset;
/// unset means "platform default".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetEntry {
    pub label: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Default for ViewfinderConfig {
    fn default() -> Self {
        Self {
            preview: PreviewConfig {
                mirrored: false,
                auto_enumerate: true,
            },
            catalog: CatalogConfig {
                presets: Vec::new(),
            },
        }
    }
}

impl ViewfinderConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfiguratorError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            ConfiguratorError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: ViewfinderConfig = toml::from_str(&contents).map_err(|e| {
            ConfiguratorError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfiguratorError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfiguratorError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            ConfiguratorError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            ConfiguratorError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("viewfinder.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.catalog.presets {
            if entry.label.trim().is_empty() {
                return Err("Preset labels must not be empty".to_string());
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(format!("Duplicate preset label '{}'", entry.label));
            }
            match (entry.width, entry.height) {
                (Some(w), Some(h)) => {
                    if w == 0 || h == 0 {
                        return Err(format!("Preset '{}' has zero dimensions", entry.label));
                    }
                }
                (None, None) => {}
                _ => {
                    return Err(format!(
                        "Preset '{}' must set both width and height, or neither",
                        entry.label
                    ));
                }
            }
        }
        Ok(())
    }

    /// Build the preset catalog this configuration describes: the built-in
    /// catalog when no presets are configured, otherwise the configured
    /// table in file order.
    pub fn build_catalog(&self) -> Result<PresetCatalog, ConfiguratorError> {
        self.validate().map_err(ConfiguratorError::ConfigError)?;

        if self.catalog.presets.is_empty() {
            return Ok(PresetCatalog::default());
        }

        let presets = self
            .catalog
            .presets
            .iter()
            .map(|entry| match (entry.width, entry.height) {
                (Some(width), Some(height)) => {
                    ResolutionPreset::new(entry.label.clone(), width, height)
                }
                _ => ResolutionPreset::platform_default(entry.label.clone()),
            })
            .collect();

        PresetCatalog::new(presets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewfinderConfig::default();
        assert!(!config.preview.mirrored);
        assert!(config.preview.auto_enumerate);
        assert!(config.catalog.presets.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_builds_builtin_catalog() {
        let catalog = ViewfinderConfig::default().build_catalog().unwrap();
        assert_eq!(catalog, PresetCatalog::default());
    }

    #[test]
    fn test_configured_catalog() {
        let mut config = ViewfinderConfig::default();
        config.catalog.presets = vec![
            PresetEntry {
                label: "Auto".to_string(),
                width: None,
                height: None,
            },
            PresetEntry {
                label: "720p".to_string(),
                width: Some(1280),
                height: Some(720),
            },
        ];

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.default_preset().is_platform_default());
        assert_eq!(catalog.resolve("720p").unwrap().width, Some(1280));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ViewfinderConfig::default();
        config.catalog.presets = vec![PresetEntry {
            label: "720p".to_string(),
            width: Some(1280),
            height: None,
        }];
        assert!(config.validate().is_err());

        config.catalog.presets = vec![
            PresetEntry {
                label: "dup".to_string(),
                width: Some(640),
                height: Some(480),
            },
            PresetEntry {
                label: "dup".to_string(),
                width: Some(1280),
                height: Some(720),
            },
        ];
        assert!(config.validate().is_err());

        config.catalog.presets = vec![PresetEntry {
            label: "  ".to_string(),
            width: None,
            height: None,
        }];
        assert!(config.validate().is_err());

        config.catalog.presets = vec![PresetEntry {
            label: "zero".to_string(),
            width: Some(0),
            height: Some(480),
        }];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("viewfinder.toml");

        let mut config = ViewfinderConfig::default();
        config.preview.mirrored = true;
        config.catalog.presets = vec![PresetEntry {
            label: "720p".to_string(),
            width: Some(1280),
            height: Some(720),
        }];
        config.save_to_file(&config_path).unwrap();

        let loaded = ViewfinderConfig::load_from_file(&config_path).unwrap();
        assert!(loaded.preview.mirrored);
        assert_eq!(loaded.catalog.presets.len(), 1);
        assert_eq!(loaded.catalog.presets[0].label, "720p");
    }

    #[test]
    fn test_config_toml_format() {
        let mut config = ViewfinderConfig::default();
        config.catalog.presets = vec![PresetEntry {
            label: "720p".to_string(),
            width: Some(1280),
            height: Some(720),
        }];
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[preview]"));
        assert!(toml_string.contains("auto_enumerate"));
        assert!(toml_string.contains("[[catalog.presets]]"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ViewfinderConfig::load_from_file("nonexistent_viewfinder.toml");
        assert!(result.is_ok());
        assert!(result.unwrap().preview.auto_enumerate);
    }
}

//! The resolution preset catalog.

use crate::errors::ConfiguratorError;
use crate::types::ResolutionPreset;
use serde::{Deserialize, Serialize};

/// Immutable, ordered catalog of resolution presets.
///
/// The catalog is injected into the configurator rather than read from a
/// module-level constant, so alternative catalogs can be supplied: smaller
/// ones in tests, site-specific ones from [`crate::config::ViewfinderConfig`].
/// The first entry is the startup default and the target of every
/// custom-mode reset; it conventionally leaves the resolution to the
/// platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalog {
    presets: Vec<ResolutionPreset>,
}

impl PresetCatalog {
    /// Build a catalog from an ordered preset list.
    pub fn new(presets: Vec<ResolutionPreset>) -> Result<Self, ConfiguratorError> {
        if presets.is_empty() {
            return Err(ConfiguratorError::ConfigError(
                "preset catalog must not be empty".to_string(),
            ));
        }
        Ok(Self { presets })
    }

    /// The catalog's first entry.
    pub fn default_preset(&self) -> &ResolutionPreset {
        &self.presets[0]
    }

    /// All presets in display order.
    pub fn presets(&self) -> &[ResolutionPreset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Resolve a preset by exact label match.
    ///
    /// The selector only offers catalog labels, so a miss is a caller
    /// contract violation and fails loudly rather than guessing.
    pub fn resolve(&self, label: &str) -> Result<&ResolutionPreset, ConfiguratorError> {
        self.presets
            .iter()
            .find(|preset| preset.label == label)
            .ok_or_else(|| {
                ConfiguratorError::PresetError(format!("no preset with label '{}'", label))
            })
    }
}

impl Default for PresetCatalog {
    /// The built-in catalog: platform default first, then common fixed steps
    /// up to 4K.
    fn default() -> Self {
        Self {
            presets: vec![
                ResolutionPreset::platform_default("Default"),
                ResolutionPreset::new("320x240", 320, 240),
                ResolutionPreset::new("640x360", 640, 360),
                ResolutionPreset::new("1280x720 (HD)", 1280, 720),
                ResolutionPreset::new("1920x1080 (Full HD)", 1920, 1080),
                ResolutionPreset::new("2560x1440 (QHD)", 2560, 1440),
                ResolutionPreset::new("3840x2160 (4K)", 3840, 2160),
            ],
        }
    }
}

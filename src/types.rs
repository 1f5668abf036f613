//! Core types for the preview configurator.
//!
//! Device descriptors come from the host platform and are never mutated,
//! only filtered and displayed. Resolution types model the two input modes
//! of the panel: a fixed preset catalog and freeform custom entry.

use serde::{Deserialize, Serialize};

/// Kind discriminator reported by the platform for an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    VideoInput,
    AudioInput,
    /// Anything else the platform reports (e.g. audio outputs). Discarded
    /// during partitioning.
    Other,
}

/// A capture-capable input device as reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Opaque platform identifier.
    pub id: String,
    /// Human-readable name. May be empty when the platform withholds it;
    /// shown blank, not treated specially.
    pub label: String,
    pub kind: DeviceKind,
}

impl DeviceDescriptor {
    pub fn new(id: String, label: String, kind: DeviceKind) -> Self {
        Self { id, label, kind }
    }

    /// Shorthand for a video input descriptor.
    pub fn video(id: String, label: String) -> Self {
        Self::new(id, label, DeviceKind::VideoInput)
    }

    /// Shorthand for an audio input descriptor.
    pub fn audio(id: String, label: String) -> Self {
        Self::new(id, label, DeviceKind::AudioInput)
    }

    pub fn is_video_input(&self) -> bool {
        self.kind == DeviceKind::VideoInput
    }

    pub fn is_audio_input(&self) -> bool {
        self.kind == DeviceKind::AudioInput
    }
}

/// One axis of a requested capture resolution.
///
/// `Invalid` keeps the raw text of a field edit that did not parse as a
/// pixel count. The configurator stores it as-is and passes it through;
/// whether and how to fall back is the preview renderer's decision.
///
/// Serialized untagged: `Auto` becomes null, `Pixels` a number, `Invalid`
/// the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Auto,
    Pixels(u32),
    Invalid(String),
}

impl Dimension {
    /// Parse a raw text field edit. Empty or whitespace-only text means
    /// "use the platform default". Zero is a valid pixel count here; range
    /// checks belong to the renderer.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Dimension::Auto;
        }
        match trimmed.parse::<u32>() {
            Ok(px) => Dimension::Pixels(px),
            Err(_) => Dimension::Invalid(raw.to_string()),
        }
    }

    pub fn pixels(&self) -> Option<u32> {
        match self {
            Dimension::Pixels(px) => Some(*px),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Dimension::Invalid(_))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Auto
    }
}

impl From<Option<u32>> for Dimension {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(px) => Dimension::Pixels(px),
            None => Dimension::Auto,
        }
    }
}

/// A named, fixed resolution choice from the preset catalog.
///
/// Unset width/height mean "use the platform default"; the catalog's first
/// entry is always of that shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPreset {
    pub label: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ResolutionPreset {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// A preset that leaves the resolution to the platform.
    pub fn platform_default(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: None,
            height: None,
        }
    }

    pub fn is_platform_default(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// The active resolution selection.
///
/// Exactly one input mode is active by construction; mode switches go
/// through [`crate::configurator::CaptureConfigurator::set_custom_mode`],
/// so a mode flag and the dimensions can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResolutionChoice {
    Preset(ResolutionPreset),
    Custom { width: Dimension, height: Dimension },
}

impl ResolutionChoice {
    /// The requested width, whichever mode is active.
    pub fn width(&self) -> Dimension {
        match self {
            ResolutionChoice::Preset(preset) => Dimension::from(preset.width),
            ResolutionChoice::Custom { width, .. } => width.clone(),
        }
    }

    /// The requested height, whichever mode is active.
    pub fn height(&self) -> Dimension {
        match self {
            ResolutionChoice::Preset(preset) => Dimension::from(preset.height),
            ResolutionChoice::Custom { height, .. } => height.clone(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ResolutionChoice::Custom { .. })
    }
}

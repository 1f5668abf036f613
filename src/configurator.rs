//! The selection state model behind the preview panel.
//!
//! All mutation rules of the panel live here: device-list reconciliation,
//! preset/custom resolution switching, and the derivation of the constraints
//! handed to the preview renderer. Methods are synchronous; the async edge
//! (platform enumeration) lives in the command layer, which applies results
//! through [`CaptureConfigurator::apply_enumeration`].

use crate::catalog::PresetCatalog;
use crate::constraints::{AudioConstraints, CaptureConstraints, VideoConstraints};
use crate::errors::ConfiguratorError;
use crate::types::{DeviceDescriptor, DeviceKind, Dimension, ResolutionChoice};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of the current selection, for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Empty means "unspecified, let the platform choose".
    pub video_device_id: String,
    /// Empty means "unspecified, let the platform choose".
    pub audio_device_id: String,
    pub resolution: ResolutionChoice,
    pub mirrored: bool,
}

/// Device lists as last reported by enumeration, partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceLists {
    pub video: Vec<DeviceDescriptor>,
    pub audio: Vec<DeviceDescriptor>,
}

/// Holds the panel's session state and applies its reconciliation rules.
///
/// State is memory-only and discarded with the process; there is no
/// persistence across sessions.
#[derive(Debug, Clone)]
pub struct CaptureConfigurator {
    catalog: PresetCatalog,
    devices: DeviceLists,
    video_device_id: String,
    audio_device_id: String,
    resolution: ResolutionChoice,
    mirrored: bool,
    enumeration_seq: u64,
}

impl CaptureConfigurator {
    /// Create a configurator over an injected preset catalog.
    ///
    /// Initial state: no devices selected, the catalog's first preset
    /// active, mirroring off, empty device lists.
    pub fn new(catalog: PresetCatalog) -> Self {
        let resolution = ResolutionChoice::Preset(catalog.default_preset().clone());
        Self {
            catalog,
            devices: DeviceLists::default(),
            video_device_id: String::new(),
            audio_device_id: String::new(),
            resolution,
            mirrored: false,
            enumeration_seq: 0,
        }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn devices(&self) -> &DeviceLists {
        &self.devices
    }

    /// Snapshot the current selection.
    pub fn selection(&self) -> SelectionState {
        SelectionState {
            video_device_id: self.video_device_id.clone(),
            audio_device_id: self.audio_device_id.clone(),
            resolution: self.resolution.clone(),
            mirrored: self.mirrored,
        }
    }

    /// Issue a new enumeration sequence number.
    ///
    /// Only the completion carrying the latest number may update the device
    /// lists; see [`CaptureConfigurator::apply_enumeration`].
    pub fn begin_enumeration(&mut self) -> u64 {
        self.enumeration_seq += 1;
        self.enumeration_seq
    }

    /// Apply an enumeration result, partitioning the combined descriptor
    /// list by kind. Returns false (and changes nothing) when a newer
    /// request has been issued since `seq` was handed out.
    ///
    /// Selected device ids are left alone even when they no longer match a
    /// descriptor; the selector simply shows no active entry for a stale id.
    pub fn apply_enumeration(&mut self, seq: u64, found: Vec<DeviceDescriptor>) -> bool {
        if seq != self.enumeration_seq {
            log::debug!(
                "Dropping superseded enumeration result (seq {}, latest {})",
                seq,
                self.enumeration_seq
            );
            return false;
        }

        let mut lists = DeviceLists::default();
        for device in found {
            match device.kind {
                DeviceKind::VideoInput => lists.video.push(device),
                DeviceKind::AudioInput => lists.audio.push(device),
                DeviceKind::Other => {}
            }
        }
        self.devices = lists;
        true
    }

    /// Select the video input device by id. Empty clears the selection.
    /// No validation against the device lists: a not-yet-enumerated or
    /// stale id is stored as given.
    pub fn select_video_device(&mut self, device_id: String) {
        self.video_device_id = device_id;
    }

    /// Select the audio input device by id. Empty clears the selection.
    pub fn select_audio_device(&mut self, device_id: String) {
        self.audio_device_id = device_id;
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    /// Select a preset by exact label match against the catalog.
    ///
    /// Unknown labels are a caller contract violation and fail loudly,
    /// leaving the current choice in place.
    pub fn select_preset(&mut self, label: &str) -> Result<(), ConfiguratorError> {
        let preset = self.catalog.resolve(label)?.clone();
        self.resolution = ResolutionChoice::Preset(preset);
        Ok(())
    }

    /// Toggle custom resolution entry.
    ///
    /// Switching on carries the current width/height over into the custom
    /// fields and touches nothing else; switching on while already in
    /// custom mode is a no-op. Switching off forcibly resets the choice to
    /// the catalog's first preset, regardless of prior state.
    pub fn set_custom_mode(&mut self, enabled: bool) {
        if enabled {
            if !self.resolution.is_custom() {
                self.resolution = ResolutionChoice::Custom {
                    width: self.resolution.width(),
                    height: self.resolution.height(),
                };
            }
        } else {
            self.resolution = ResolutionChoice::Preset(self.catalog.default_preset().clone());
        }
    }

    /// Replace the custom width from a raw field edit; the height field is
    /// untouched. Ignored outside custom mode, where the field is not shown.
    pub fn set_custom_width(&mut self, raw: &str) {
        if let ResolutionChoice::Custom { width, .. } = &mut self.resolution {
            *width = Dimension::parse(raw);
        }
    }

    /// Replace the custom height from a raw field edit; the width field is
    /// untouched. Ignored outside custom mode.
    pub fn set_custom_height(&mut self, raw: &str) {
        if let ResolutionChoice::Custom { height, .. } = &mut self.resolution {
            *height = Dimension::parse(raw);
        }
    }

    /// Derive the constraints handed to the preview renderer.
    ///
    /// A pure projection of the current selection, recomputed on every call
    /// so the renderer always sees live state.
    pub fn constraints(&self) -> CaptureConstraints {
        CaptureConstraints {
            video: VideoConstraints {
                device_id: self.video_device_id.clone(),
                width: self.resolution.width(),
                height: self.resolution.height(),
            },
            audio: AudioConstraints {
                device_id: self.audio_device_id.clone(),
            },
            mirrored: self.mirrored,
        }
    }
}

impl Default for CaptureConfigurator {
    fn default() -> Self {
        Self::new(PresetCatalog::default())
    }
}

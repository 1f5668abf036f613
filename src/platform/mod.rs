//! Host platform device enumeration backends.

pub mod audio;
pub mod video;

use crate::errors::ConfiguratorError;
use crate::types::DeviceDescriptor;

/// Source of capture-capable input devices.
///
/// The system implementation queries the host platform; tests substitute
/// fixed descriptor sets instead.
pub trait DeviceSource: Send + Sync {
    /// Query the current devices. The returned list is unordered and may
    /// mix kinds; callers partition it.
    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, ConfiguratorError>;
}

/// Enumerates through the native video and audio backends.
///
/// A failure in either backend fails the whole query; the command layer
/// swallows it and keeps the previous lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDeviceSource;

impl DeviceSource for SystemDeviceSource {
    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, ConfiguratorError> {
        let mut devices = video::list_video_inputs()?;
        devices.extend(audio::list_audio_inputs()?);
        Ok(devices)
    }
}

/// Name of the host platform, for diagnostics.
pub fn platform_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

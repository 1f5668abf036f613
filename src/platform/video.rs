//! Video input enumeration via nokhwa.

use crate::errors::ConfiguratorError;
use crate::types::DeviceDescriptor;
use nokhwa::query;
use nokhwa::utils::ApiBackend;

/// List the platform's video input devices.
///
/// Ids are the backend's camera indices, stringified; they stay opaque to
/// the rest of the crate. Labels come from the backend and may be empty.
pub fn list_video_inputs() -> Result<Vec<DeviceDescriptor>, ConfiguratorError> {
    let cameras = query(ApiBackend::Auto).map_err(|e| {
        ConfiguratorError::EnumerationError(format!("Failed to query cameras: {}", e))
    })?;

    Ok(cameras
        .into_iter()
        .map(|info| DeviceDescriptor::video(info.index().to_string(), info.human_name()))
        .collect())
}

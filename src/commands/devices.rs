use crate::commands::CONFIGURATOR;
use crate::configurator::DeviceLists;
use crate::platform::{DeviceSource, SystemDeviceSource};
use tauri::command;

/// Re-run device enumeration and return the resulting lists.
///
/// Platform failures are swallowed: the previous lists are kept and the
/// command still succeeds, matching the panel's no-fatal-error policy.
/// When refreshes overlap, only the most recently issued request may apply
/// its results; superseded completions are dropped.
#[command]
pub async fn refresh_devices() -> Result<DeviceLists, String> {
    let seq = CONFIGURATOR.write().await.begin_enumeration();

    let result = tokio::task::spawn_blocking(|| SystemDeviceSource.enumerate())
        .await
        .map_err(|e| format!("Task join error: {}", e))?;

    let mut configurator = CONFIGURATOR.write().await;
    match result {
        Ok(found) => {
            if configurator.apply_enumeration(seq, found) {
                log::info!(
                    "Enumeration found {} video and {} audio inputs",
                    configurator.devices().video.len(),
                    configurator.devices().audio.len()
                );
            }
        }
        Err(e) => {
            log::warn!("Device enumeration failed, keeping previous lists: {}", e);
        }
    }

    Ok(configurator.devices().clone())
}

/// Get the most recently enumerated device lists
#[command]
pub async fn get_device_lists() -> Result<DeviceLists, String> {
    Ok(CONFIGURATOR.read().await.devices().clone())
}

/// Select the video input device by id. Empty means "let the platform
/// choose". The id is not checked against the device lists; a stale id is
/// kept and the selector shows no active entry for it.
#[command]
pub async fn select_video_device(device_id: String) -> Result<(), String> {
    log::debug!("Selecting video device: {:?}", device_id);
    CONFIGURATOR.write().await.select_video_device(device_id);
    Ok(())
}

/// Select the audio input device by id. Empty means "let the platform
/// choose".
#[command]
pub async fn select_audio_device(device_id: String) -> Result<(), String> {
    log::debug!("Selecting audio device: {:?}", device_id);
    CONFIGURATOR.write().await.select_audio_device(device_id);
    Ok(())
}

//! Audio input enumeration via cpal.

use cpal::traits::{DeviceTrait, HostTrait};

use crate::errors::ConfiguratorError;
use crate::types::DeviceDescriptor;

/// List the platform's audio input devices.
///
/// cpal does not expose unique device ids on every platform, so ids combine
/// the enumeration index with a hash of the device name to stay stable
/// across refreshes of an unchanged device set.
pub fn list_audio_inputs() -> Result<Vec<DeviceDescriptor>, ConfiguratorError> {
    let host = cpal::default_host();

    let devices = host
        .input_devices()
        .map_err(|e| {
            ConfiguratorError::EnumerationError(format!(
                "Failed to enumerate audio devices: {}",
                e
            ))
        })?
        .enumerate()
        .filter_map(|(index, device)| {
            let name = device.name().ok()?;
            let id = format!("audio_{}_{}", index, name_hash(&name));
            Some(DeviceDescriptor::audio(id, name))
        })
        .collect();

    Ok(devices)
}

fn name_hash(name: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    format!("{:08x}", hasher.finish() & 0xFFFFFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_audio_inputs_no_panic() {
        // Should not panic even with no audio devices present.
        let _ = list_audio_inputs();
    }

    #[test]
    fn test_listed_devices_are_audio_inputs() {
        if let Ok(devices) = list_audio_inputs() {
            assert!(devices.iter().all(|d| d.is_audio_input()));
        }
    }

    #[test]
    fn test_name_hash_is_stable() {
        assert_eq!(name_hash("Built-in Microphone"), name_hash("Built-in Microphone"));
        assert_ne!(name_hash("Mic A"), name_hash("Mic B"));
    }
}

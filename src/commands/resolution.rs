use crate::commands::CONFIGURATOR;
use crate::configurator::SelectionState;
use crate::types::ResolutionPreset;
use tauri::command;

/// List the preset catalog in display order
#[command]
pub async fn get_resolution_catalog() -> Result<Vec<ResolutionPreset>, String> {
    Ok(CONFIGURATOR.read().await.catalog().presets().to_vec())
}

/// Select a resolution preset by its exact label
///
/// The selector only offers catalog labels; an unknown label is rejected
/// and the current selection is left in place.
#[command]
pub async fn select_resolution_preset(label: String) -> Result<SelectionState, String> {
    let mut configurator = CONFIGURATOR.write().await;
    match configurator.select_preset(&label) {
        Ok(()) => {
            log::info!("Selected resolution preset '{}'", label);
            Ok(configurator.selection())
        }
        Err(e) => {
            log::error!("Failed to select preset: {}", e);
            Err(format!("Failed to select preset: {}", e))
        }
    }
}

/// Toggle custom resolution entry
///
/// Switching on carries the current width/height into the custom fields;
/// switching off resets the choice to the catalog's first preset.
#[command]
pub async fn set_custom_resolution(enabled: bool) -> Result<SelectionState, String> {
    let mut configurator = CONFIGURATOR.write().await;
    configurator.set_custom_mode(enabled);
    log::debug!("Custom resolution mode: {}", enabled);
    Ok(configurator.selection())
}

/// Replace the custom width from the raw field text
///
/// Text that does not parse as a pixel count is stored as-is in a typed
/// invalid state and passed through to the renderer unchanged.
#[command]
pub async fn set_custom_width(raw: String) -> Result<SelectionState, String> {
    let mut configurator = CONFIGURATOR.write().await;
    configurator.set_custom_width(&raw);
    log::debug!("Custom width edit: {:?}", raw);
    Ok(configurator.selection())
}

/// Replace the custom height from the raw field text
#[command]
pub async fn set_custom_height(raw: String) -> Result<SelectionState, String> {
    let mut configurator = CONFIGURATOR.write().await;
    configurator.set_custom_height(&raw);
    log::debug!("Custom height edit: {:?}", raw);
    Ok(configurator.selection())
}

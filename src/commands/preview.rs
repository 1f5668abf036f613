use crate::commands::CONFIGURATOR;
use crate::configurator::SelectionState;
use crate::constraints::CaptureConstraints;
use tauri::command;

/// Set the preview mirroring flag. Mirroring flips the rendered preview
/// horizontally; the captured stream is untouched.
#[command]
pub async fn set_mirrored(mirrored: bool) -> Result<(), String> {
    log::debug!("Preview mirroring: {}", mirrored);
    CONFIGURATOR.write().await.set_mirrored(mirrored);
    Ok(())
}

/// Snapshot the current selection state
#[command]
pub async fn get_selection_state() -> Result<SelectionState, String> {
    Ok(CONFIGURATOR.read().await.selection())
}

/// Derive the constraints for the preview renderer from the current
/// selection. Computed fresh on every call, never cached, so the renderer
/// always sees live state.
#[command]
pub async fn get_preview_constraints() -> Result<CaptureConstraints, String> {
    Ok(CONFIGURATOR.read().await.constraints())
}

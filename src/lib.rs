//! Viewfinder: webcam preview configuration for Tauri applications
//!
//! This crate owns the state model behind a webcam preview panel: device
//! enumeration, device and resolution selection, mirroring, and the
//! derivation of the capture constraints handed to the frontend preview
//! component.
//!
//! # Features
//! - Video and audio input enumeration (nokhwa / cpal)
//! - Resolution preset catalog with freeform custom width/height entry
//! - Live capture-constraint derivation for the preview renderer
//! - Refresh that is safe against overlapping enumerations
//!
//! # Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! viewfinder = "0.2"
//! tauri = { version = "2.0", features = ["protocol-asset"] }
//! ```
//!
//! Then in your Tauri app:
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(viewfinder::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
pub mod catalog;
pub mod commands;
pub mod config;
pub mod configurator;
pub mod constraints;
pub mod errors;
pub mod permissions;
pub mod platform;
pub mod types;

// Re-exports for convenience
pub use catalog::PresetCatalog;
pub use configurator::{CaptureConfigurator, DeviceLists, SelectionState};
pub use constraints::{AudioConstraints, CaptureConstraints, VideoConstraints};
pub use errors::ConfiguratorError;
pub use types::{DeviceDescriptor, DeviceKind, Dimension, ResolutionChoice, ResolutionPreset};

use tauri::{
    plugin::{Builder, TauriPlugin},
    Runtime,
};

/// Initialize the viewfinder plugin with all commands
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("viewfinder")
        .invoke_handler(tauri::generate_handler![
            // Initialization commands
            commands::init::initialize_configurator,
            commands::init::check_capture_permission,
            commands::init::get_configurator_diagnostics,
            // Device commands
            commands::devices::refresh_devices,
            commands::devices::get_device_lists,
            commands::devices::select_video_device,
            commands::devices::select_audio_device,
            // Resolution commands
            commands::resolution::get_resolution_catalog,
            commands::resolution::select_resolution_preset,
            commands::resolution::set_custom_resolution,
            commands::resolution::set_custom_width,
            commands::resolution::set_custom_height,
            // Preview commands
            commands::preview::set_mirrored,
            commands::preview::get_selection_state,
            commands::preview::get_preview_constraints,
        ])
        .build()
}

/// Initialize logging for the configurator
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "viewfinder=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
        platform: platform::platform_name().to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub platform: String,
}

use crate::catalog::PresetCatalog;
use crate::commands::CONFIGURATOR;
use crate::config::ViewfinderConfig;
use crate::configurator::CaptureConfigurator;
use crate::permissions::{self, PermissionInfo};
use crate::platform;
use tauri::command;

/// Initialize the configurator: load configuration, install the preset
/// catalog, and run the startup device enumeration.
#[command]
pub async fn initialize_configurator() -> Result<String, String> {
    let config = ViewfinderConfig::load_or_default();

    let catalog = match config.build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Invalid preset catalog in configuration, using built-in: {}", e);
            PresetCatalog::default()
        }
    };

    {
        let mut configurator = CONFIGURATOR.write().await;
        *configurator = CaptureConfigurator::new(catalog);
        configurator.set_mirrored(config.preview.mirrored);
    }

    if config.preview.auto_enumerate {
        let lists = crate::commands::devices::refresh_devices().await?;
        log::info!(
            "Startup enumeration found {} video and {} audio inputs",
            lists.video.len(),
            lists.audio.len()
        );
    }

    log::info!("Capture configurator initialized");
    Ok("Capture configurator initialized".to_string())
}

/// Probe capture device permission status
#[command]
pub async fn check_capture_permission() -> Result<PermissionInfo, String> {
    let info = permissions::check_permission();
    log::debug!("Capture permission: {} ({})", info.status, info.message);
    Ok(info)
}

/// Diagnostics snapshot for troubleshooting
///
/// Returns the configurator's view of the system: device counts, input
/// mode, and permission status.
#[command]
pub async fn get_configurator_diagnostics() -> Result<ConfiguratorDiagnostics, String> {
    let (video_device_count, audio_device_count, custom_mode, mirrored) = {
        let configurator = CONFIGURATOR.read().await;
        let selection = configurator.selection();
        (
            configurator.devices().video.len(),
            configurator.devices().audio.len(),
            selection.resolution.is_custom(),
            selection.mirrored,
        )
    };

    let diagnostics = ConfiguratorDiagnostics {
        crate_version: crate::VERSION.to_string(),
        platform: platform::platform_name().to_string(),
        video_device_count,
        audio_device_count,
        custom_mode,
        mirrored,
        permission_status: permissions::check_permission().status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    log::info!(
        "Diagnostics: {} video / {} audio inputs on {}",
        diagnostics.video_device_count,
        diagnostics.audio_device_count,
        diagnostics.platform
    );

    Ok(diagnostics)
}

/// Diagnostics response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConfiguratorDiagnostics {
    pub crate_version: String,
    pub platform: String,
    pub video_device_count: usize,
    pub audio_device_count: usize,
    pub custom_mode: bool,
    pub mirrored: bool,
    pub permission_status: String,
    pub timestamp: String,
}

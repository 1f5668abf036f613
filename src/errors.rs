use thiserror::Error;

/// Errors surfaced by the configurator core.
///
/// Enumeration failures are swallowed by the command layer (the device lists
/// simply stay as they were); the remaining variants are contract violations
/// that surface loudly at the command boundary.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("Device enumeration error: {0}")]
    EnumerationError(String),
    #[error("Preset error: {0}")]
    PresetError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

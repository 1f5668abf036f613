//! The configuration object handed to the preview renderer.

use crate::types::Dimension;
use serde::{Deserialize, Serialize};

/// Video track constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConstraints {
    /// Empty means "let the platform choose".
    pub device_id: String,
    pub width: Dimension,
    pub height: Dimension,
}

/// Audio track constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConstraints {
    /// Empty means "let the platform choose".
    pub device_id: String,
}

/// The full constraint set consumed by the preview renderer.
///
/// Derived from the current selection on every request and never cached.
/// The renderer owns stream teardown and reacquisition when constraints
/// change, and owns fallback when they are unsatisfiable; dimensions arrive
/// uninspected, including [`Dimension::Invalid`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConstraints {
    pub video: VideoConstraints,
    pub audio: AudioConstraints,
    /// Horizontal flip of the rendered preview only, not the capture.
    pub mirrored: bool,
}

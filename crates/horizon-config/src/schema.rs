//! Configuration schema types for the horizon viewer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching a full-sphere 360
//! panorama setup.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Surface Config
// =============================================================================

/// Sphere tessellation preset.
///
/// Presets map to segment counts in the mesh crate; explicit
/// `segments_w`/`segments_h` overrides win when non-zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DetailPreset {
    Low,
    Medium,
    #[default]
    High,
}

/// Projection surface configuration.
///
/// Angles are in degrees here and converted to radians at the mesh
/// boundary. Defaults describe a full sphere of radius 50.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Sphere radius in world units (must be positive).
    pub radius: f64,
    pub detail: DetailPreset,
    /// Explicit horizontal segment count; 0 means use the preset.
    pub segments_w: u32,
    /// Explicit vertical segment count; 0 means use the preset.
    pub segments_h: u32,
    /// Longitude sweep start in degrees (valid range: -360 to 360).
    pub phi_start_deg: f64,
    /// Longitude sweep length in degrees (valid range: 0 exclusive to 360).
    pub phi_length_deg: f64,
    /// Latitude sweep start in degrees from the north pole (0-180).
    pub theta_start_deg: f64,
    /// Latitude sweep length in degrees (0 exclusive to 180).
    pub theta_length_deg: f64,
    pub mirror_uvs: bool,
    pub generate_uvs: bool,
    pub generate_colors: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            detail: DetailPreset::High,
            segments_w: 0,
            segments_h: 0,
            phi_start_deg: 0.0,
            phi_length_deg: 360.0,
            theta_start_deg: 0.0,
            theta_length_deg: 180.0,
            mirror_uvs: false,
            generate_uvs: true,
            generate_colors: false,
        }
    }
}

// =============================================================================
// Camera Config
// =============================================================================

/// How drag gestures turn into rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum RotationMode {
    /// Raw scroll deltas go to the listener; the camera itself stays put.
    #[default]
    Delegated,
    /// Sphere-mapped drag vectors rotate the camera directly.
    Arcball,
}

/// Orbit camera configuration.
///
/// The zoom window (`fov_min_degrees`, `fov_max_degrees`) is
/// order-independent; the camera normalizes it at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f64; 3],
    pub look_at: [f64; 3],
    pub up: [f64; 3],
    /// Initial vertical field of view in degrees (valid range: 0-180 exclusive).
    pub fov_degrees: f64,
    pub fov_min_degrees: f64,
    pub fov_max_degrees: f64,
    pub rotation: RotationMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 0.0],
            look_at: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 45.0,
            fov_min_degrees: 30.0,
            fov_max_degrees: 50.0,
            rotation: RotationMode::Delegated,
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration for a horizon viewer.
///
/// All options have defaults describing a full-sphere panorama with
/// the camera at the center. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ViewerConfig {
    pub surface: SurfaceConfig,
    pub camera: CameraConfig,
}

// =============================================================================
// Tests
// =============================================================================

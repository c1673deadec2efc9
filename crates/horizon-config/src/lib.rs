//! Horizon viewer configuration.
//!
//! TOML-based configuration for the projection surface and the orbit
//! camera. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use horizon_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("sphere radius: {}", config.surface.radius);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    CameraConfig, DetailPreset, RotationMode, SurfaceConfig, ViewerConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_from_path, load_from_str};

use horizon_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `viewer.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ViewerConfig, ConfigError> {
    toml_loader::load_default()
}

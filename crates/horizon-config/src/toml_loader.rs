//! TOML config file loading and creation.

use crate::schema::ViewerConfig;
use crate::validation;
use horizon_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Parse a config from a TOML string.
///
/// Strict variant for programmatic use: parse and validation errors both
/// surface as `ConfigError`.
pub fn load_from_str(content: &str) -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ViewerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but never hand a bad config to the viewer
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(ViewerConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/horizon/viewer.toml`
/// On Linux: `~/.config/horizon/viewer.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ViewerConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(ViewerConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("horizon").join("viewer.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r#"# Horizon Viewer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[surface]
# radius = 50.0
# detail = "high"          # low, medium, high
# segments_w = 0           # 0 = use preset (explicit override: 1-2048)
# segments_h = 0
# phi_start_deg = 0.0      # -360 to 360
# phi_length_deg = 360.0   # (0, 360]
# theta_start_deg = 0.0    # 0-180, measured from the north pole
# theta_length_deg = 180.0 # (0, 180]
# mirror_uvs = false
# generate_uvs = true
# generate_colors = false

[camera]
# eye = [0.0, 0.0, 0.0]
# look_at = [0.0, 0.0, -1.0]
# up = [0.0, 1.0, 0.0]
# fov_degrees = 45.0       # (0, 180)
# fov_min_degrees = 30.0   # pinch zoom window, order-independent
# fov_max_degrees = 50.0
# rotation = "delegated"   # delegated, arcball
"#
    .to_string()
}

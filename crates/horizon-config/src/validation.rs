//! Full configuration validation.
//!
//! Validates numeric ranges for the surface sweep and the camera frustum,
//! collecting all errors before reporting.

use crate::schema::ViewerConfig;
use horizon_common::ConfigError;

/// Run all validations on a config, collecting all errors.
///
/// The zoom window bounds are deliberately not ordered here; the camera
/// normalizes `fov_min_degrees`/`fov_max_degrees` itself, so a reversed
/// pair is a valid config.
pub fn validate(config: &ViewerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Surface constraints
    validate_positive(&mut errors, "surface.radius", config.surface.radius);
    validate_range(&mut errors, "surface.segments_w", config.surface.segments_w, 0, 2048);
    validate_range(&mut errors, "surface.segments_h", config.surface.segments_h, 0, 2048);
    validate_range_f64(
        &mut errors,
        "surface.phi_start_deg",
        config.surface.phi_start_deg,
        -360.0,
        360.0,
    );
    validate_sweep(&mut errors, "surface.phi_length_deg", config.surface.phi_length_deg, 360.0);
    validate_range_f64(
        &mut errors,
        "surface.theta_start_deg",
        config.surface.theta_start_deg,
        0.0,
        180.0,
    );
    validate_sweep(
        &mut errors,
        "surface.theta_length_deg",
        config.surface.theta_length_deg,
        180.0,
    );
    // The latitude window must stay on the sphere
    let theta_end = config.surface.theta_start_deg + config.surface.theta_length_deg;
    if theta_end > 180.0 + 1e-9 {
        errors.push(format!(
            "surface.theta_start_deg + surface.theta_length_deg = {theta_end} exceeds 180"
        ));
    }

    // Camera constraints
    validate_fov(&mut errors, "camera.fov_degrees", config.camera.fov_degrees);
    validate_fov(&mut errors, "camera.fov_min_degrees", config.camera.fov_min_degrees);
    validate_fov(&mut errors, "camera.fov_max_degrees", config.camera.fov_max_degrees);
    validate_vec3_finite(&mut errors, "camera.eye", config.camera.eye);
    validate_vec3_finite(&mut errors, "camera.look_at", config.camera.look_at);
    validate_vec3_finite(&mut errors, "camera.up", config.camera.up);
    if config.camera.up.iter().all(|c| c.abs() < 1e-12) {
        errors.push("camera.up must not be the zero vector".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be positive and finite"));
    }
}

/// An angular sweep must be positive and at most `max` degrees.
fn validate_sweep(errors: &mut Vec<String>, name: &str, value: f64, max: f64) {
    if !value.is_finite() || value <= 0.0 || value > max {
        errors.push(format!("{name} = {value} is out of range (0, {max}]"));
    }
}

/// A field of view must sit strictly between 0 and 180 degrees.
fn validate_fov(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 || value >= 180.0 {
        errors.push(format!("{name} = {value} is out of range (0, 180)"));
    }
}

fn validate_vec3_finite(errors: &mut Vec<String>, name: &str, value: [f64; 3]) {
    if value.iter().any(|c| !c.is_finite()) {
        errors.push(format!("{name} contains a non-finite component"));
    }
}

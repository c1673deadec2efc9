//! Sphere build parameters and validation.

use horizon_common::MeshError;
use horizon_config::{DetailPreset, SurfaceConfig};

/// Tessellation presets for the projection sphere.
///
/// `segments_w` counts longitude columns, `segments_h` latitude rings.
#[derive(Debug, Clone, Copy)]
pub struct SphereDetail {
    pub segments_w: u32,
    pub segments_h: u32,
}

impl SphereDetail {
    pub const LOW: Self = Self {
        segments_w: 24,
        segments_h: 16,
    };
    pub const MEDIUM: Self = Self {
        segments_w: 48,
        segments_h: 32,
    };
    pub const HIGH: Self = Self {
        segments_w: 64,
        segments_h: 48,
    };
}

impl From<DetailPreset> for SphereDetail {
    fn from(preset: DetailPreset) -> Self {
        match preset {
            DetailPreset::Low => Self::LOW,
            DetailPreset::Medium => Self::MEDIUM,
            DetailPreset::High => Self::HIGH,
        }
    }
}

/// Immutable description of a sphere (or sphere wedge) to build.
///
/// Angles are radians. `theta` is the polar angle measured from the
/// +Y pole, `phi` the azimuth. A full sphere is `phi_length = 2π`,
/// `theta_start = 0`, `theta_length = π`.
#[derive(Debug, Clone, Copy)]
pub struct SphereSpec {
    pub radius: f32,
    pub segments_w: u32,
    pub segments_h: u32,
    pub phi_start: f32,
    pub phi_length: f32,
    pub theta_start: f32,
    pub theta_length: f32,
    /// Flip texture coordinates horizontally (inside-view panoramas
    /// want the default unflipped layout).
    pub mirror_uvs: bool,
    pub generate_uvs: bool,
    pub generate_colors: bool,
}

impl SphereSpec {
    /// A full sphere with texture coordinates and no vertex colors.
    pub fn full(radius: f32, segments_w: u32, segments_h: u32) -> Self {
        Self::wedge(
            radius,
            segments_w,
            segments_h,
            0.0,
            std::f32::consts::PI * 2.0,
            0.0,
            std::f32::consts::PI,
        )
    }

    /// A partial sphere covering the given longitude/latitude window.
    #[allow(clippy::too_many_arguments)]
    pub fn wedge(
        radius: f32,
        segments_w: u32,
        segments_h: u32,
        phi_start: f32,
        phi_length: f32,
        theta_start: f32,
        theta_length: f32,
    ) -> Self {
        Self {
            radius,
            segments_w,
            segments_h,
            phi_start,
            phi_length,
            theta_start,
            theta_length,
            mirror_uvs: false,
            generate_uvs: true,
            generate_colors: false,
        }
    }

    /// Build a spec from the viewer config, converting degrees to radians.
    ///
    /// Explicit segment overrides win over the detail preset when non-zero.
    pub fn from_config(surface: &SurfaceConfig) -> Self {
        let detail = SphereDetail::from(surface.detail.clone());
        let segments_w = if surface.segments_w > 0 {
            surface.segments_w
        } else {
            detail.segments_w
        };
        let segments_h = if surface.segments_h > 0 {
            surface.segments_h
        } else {
            detail.segments_h
        };

        Self {
            radius: surface.radius as f32,
            segments_w,
            segments_h,
            phi_start: surface.phi_start_deg.to_radians() as f32,
            phi_length: surface.phi_length_deg.to_radians() as f32,
            theta_start: surface.theta_start_deg.to_radians() as f32,
            theta_length: surface.theta_length_deg.to_radians() as f32,
            mirror_uvs: surface.mirror_uvs,
            generate_uvs: surface.generate_uvs,
            generate_colors: surface.generate_colors,
        }
    }

    pub fn with_mirror_uvs(mut self, mirror: bool) -> Self {
        self.mirror_uvs = mirror;
        self
    }

    pub fn with_uvs(mut self, generate: bool) -> Self {
        self.generate_uvs = generate;
        self
    }

    pub fn with_colors(mut self, generate: bool) -> Self {
        self.generate_colors = generate;
        self
    }

    /// Check all parameters, reporting the first violation.
    ///
    /// Out-of-range input is an error, never silently clamped.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (field, value) in [
            ("radius", self.radius),
            ("phi_start", self.phi_start),
            ("phi_length", self.phi_length),
            ("theta_start", self.theta_start),
            ("theta_length", self.theta_length),
        ] {
            if !value.is_finite() {
                return Err(MeshError::NonFinite { field });
            }
        }
        if self.radius <= 0.0 {
            return Err(MeshError::Radius {
                value: self.radius as f64,
            });
        }
        if self.segments_w < 1 {
            return Err(MeshError::Segments {
                axis: "width",
                value: self.segments_w,
            });
        }
        if self.segments_h < 1 {
            return Err(MeshError::Segments {
                axis: "height",
                value: self.segments_h,
            });
        }
        if self.phi_length <= 0.0 || self.phi_length > std::f32::consts::PI * 2.0 + ANGLE_EPS {
            return Err(MeshError::PhiLength {
                length: self.phi_length as f64,
            });
        }
        let theta_end = self.theta_start + self.theta_length;
        if self.theta_start < 0.0
            || self.theta_length <= 0.0
            || theta_end > std::f32::consts::PI + ANGLE_EPS
        {
            return Err(MeshError::ThetaRange {
                start: self.theta_start as f64,
                length: self.theta_length as f64,
            });
        }
        Ok(())
    }
}

/// Slack for angle range checks at the f32 precision boundary.
pub(crate) const ANGLE_EPS: f32 = 1e-5;

// =============================================================================
// Tests
// =============================================================================

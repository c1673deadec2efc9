//! Unit quaternion for camera orientation.
//!
//! Hamilton convention: `a * b` rotates by `b` first, then `a`, so
//! committing a drag is `baseline * delta`.

use super::vec::Vec3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_rad` around `axis`. The axis is normalized
    /// here; a degenerate axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle_rad: f64) -> Self {
        let axis = axis.normalized();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let half = angle_rad * 0.5;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// The rotation carrying unit vector `a` onto unit vector `b`.
    ///
    /// Nearly identical vectors give the identity; nearly opposite
    /// vectors pick an arbitrary orthogonal axis for the half turn.
    pub fn from_unit_vectors(a: Vec3, b: Vec3) -> Self {
        let dot = a.dot(b).clamp(-1.0, 1.0);

        if dot > 1.0 - 1e-9 {
            return Self::IDENTITY;
        }
        if dot < -1.0 + 1e-9 {
            let mut axis = Vec3::new(1.0, 0.0, 0.0).cross(a);
            if axis.dot(axis) < 1e-12 {
                axis = Vec3::new(0.0, 1.0, 0.0).cross(a);
            }
            let axis = axis.normalized();
            return Self::new(axis.x, axis.y, axis.z, 0.0);
        }

        let axis = a.cross(b);
        Self::new(axis.x, axis.y, axis.z, 1.0 + dot).normalized()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion in the same direction, or identity when the
    /// length is too small to divide by.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 1e-10 {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector by this quaternion (assumed unit length).
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        v + t * self.w + qv.cross(t)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, b: Self) -> Self::Output {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

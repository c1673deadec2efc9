//! Drag-to-rotation strategies.
//!
//! A strategy turns a drag between two screen points into a rotation.
//! The camera applies whichever strategy is installed; swapping one in
//! at runtime changes how drags feel without touching the gesture
//! plumbing.

use horizon_common::{Quaternion, Vec2, Vec3};

/// Maps a drag onto a rotation.
pub trait RotationStrategy: Send + Sync {
    /// Rotation for a drag from `start` to `current`, both in surface
    /// pixels. `viewport` is the surface size used for normalization.
    ///
    /// Called with the full drag so far, so the result replaces the
    /// previous in-progress rotation rather than composing with it.
    fn rotate(&self, start: Vec2, current: Vec2, viewport: Vec2) -> Quaternion;
}

/// Leaves the camera orientation alone. Drags still reach the listener,
/// which is expected to steer the scene itself.
pub struct DelegatedRotation;

impl RotationStrategy for DelegatedRotation {
    fn rotate(&self, _start: Vec2, _current: Vec2, _viewport: Vec2) -> Quaternion {
        Quaternion::IDENTITY
    }
}

/// Classic arcball: both drag endpoints are projected onto a unit sphere
/// floating over the viewport, and the rotation is the one carrying the
/// first projection onto the second.
pub struct ArcballRotation;

impl ArcballRotation {
    /// Pixel coordinates to normalized device coordinates, y up.
    fn map_to_screen(position: Vec2, viewport: Vec2) -> Vec2 {
        let width = viewport.x.max(1.0);
        let height = viewport.y.max(1.0);
        Vec2::new(
            (2.0 * position.x - width) / width,
            -(2.0 * position.y - height) / height,
        )
    }

    /// Normalized screen point onto the arcball sphere. Points outside
    /// the unit disc land on the rim.
    fn map_to_sphere(point: Vec2) -> Vec3 {
        let length_squared = point.x * point.x + point.y * point.y;
        if length_squared > 1.0 {
            Vec3::new(point.x, point.y, 0.0).normalized()
        } else {
            Vec3::new(point.x, point.y, (1.0 - length_squared).sqrt())
        }
    }
}

impl RotationStrategy for ArcballRotation {
    fn rotate(&self, start: Vec2, current: Vec2, viewport: Vec2) -> Quaternion {
        let from = Self::map_to_sphere(Self::map_to_screen(start, viewport));
        let to = Self::map_to_sphere(Self::map_to_screen(current, viewport));
        Quaternion::from_unit_vectors(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2 { x: 800.0, y: 600.0 };

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn delegated_rotation_is_always_identity() {
        let strategy = DelegatedRotation;
        let q = strategy.rotate(Vec2::new(0.0, 0.0), Vec2::new(400.0, 300.0), VIEWPORT);
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn arcball_zero_drag_is_identity() {
        let strategy = ArcballRotation;
        let q = strategy.rotate(Vec2::new(123.0, 456.0), Vec2::new(123.0, 456.0), VIEWPORT);
        assert_close(q.dot(Quaternion::IDENTITY).abs(), 1.0);
    }

    #[test]
    fn map_to_screen_normalizes_corners() {
        let center = ArcballRotation::map_to_screen(Vec2::new(400.0, 300.0), VIEWPORT);
        assert_close(center.x, 0.0);
        assert_close(center.y, 0.0);

        let top_left = ArcballRotation::map_to_screen(Vec2::new(0.0, 0.0), VIEWPORT);
        assert_close(top_left.x, -1.0);
        assert_close(top_left.y, 1.0);

        let bottom_right = ArcballRotation::map_to_screen(Vec2::new(800.0, 600.0), VIEWPORT);
        assert_close(bottom_right.x, 1.0);
        assert_close(bottom_right.y, -1.0);
    }

    #[test]
    fn map_to_sphere_center_and_rim() {
        let center = ArcballRotation::map_to_sphere(Vec2::new(0.0, 0.0));
        assert_eq!(center, Vec3::new(0.0, 0.0, 1.0));

        let rim = ArcballRotation::map_to_sphere(Vec2::new(1.0, 0.0));
        assert_close(rim.z, 0.0);
        assert_close(rim.x, 1.0);
    }

    #[test]
    fn map_to_sphere_clamps_outside_points_to_rim() {
        let v = ArcballRotation::map_to_sphere(Vec2::new(3.0, 4.0));
        assert_close(v.length(), 1.0);
        assert_close(v.z, 0.0);
        assert_close(v.x, 0.6);
        assert_close(v.y, 0.8);
    }

    #[test]
    fn arcball_center_to_rim_is_quarter_turn() {
        let strategy = ArcballRotation;
        // Center of an 800x600 surface to the middle of its right edge:
        // sphere points (0,0,1) and (1,0,0), ninety degrees apart.
        let q = strategy.rotate(Vec2::new(400.0, 300.0), Vec2::new(800.0, 300.0), VIEWPORT);
        let rotated = q.rotate(Vec3::new(0.0, 0.0, 1.0));
        assert_close(rotated.x, 1.0);
        assert_close(rotated.y, 0.0);
        assert_close(rotated.z, 0.0);
    }

    #[test]
    fn arcball_output_is_unit_length() {
        let strategy = ArcballRotation;
        let q = strategy.rotate(Vec2::new(100.0, 500.0), Vec2::new(650.0, 40.0), VIEWPORT);
        assert_close(q.length(), 1.0);
    }

    #[test]
    fn degenerate_viewport_does_not_divide_by_zero() {
        let strategy = ArcballRotation;
        let q = strategy.rotate(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::ZERO);
        assert!(q.is_finite());
    }
}

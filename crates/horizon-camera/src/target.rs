//! Orbit pivot targets.

use std::sync::Mutex;

use horizon_common::Vec3;

/// Something the camera can pivot around.
///
/// The camera holds targets weakly: dropping the last strong handle
/// reverts it to plain orbiting instead of pinning a dead object alive.
/// `world_position` runs while the camera holds its view lock, so an
/// implementation must not call back into the camera.
pub trait Target: Send + Sync {
    fn world_position(&self) -> Vec3;
}

/// A movable point in world space.
pub struct PointTarget {
    position: Mutex<Vec3>,
}

impl PointTarget {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Mutex::new(position),
        }
    }

    pub fn set_position(&self, position: Vec3) {
        *self.position.lock().unwrap() = position;
    }
}

impl Target for PointTarget {
    fn world_position(&self) -> Vec3 {
        *self.position.lock().unwrap()
    }
}

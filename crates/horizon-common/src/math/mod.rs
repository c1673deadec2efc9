//! Minimal linear algebra for mesh and camera math.

pub mod matrix;
mod quaternion;
mod vec;

pub use matrix::Mat4;
pub use quaternion::Quaternion;
pub use vec::{Vec2, Vec3};

//! Shared vocabulary for the horizon viewer core.
//!
//! Small f64 math types (vectors, quaternion, column-major matrix) and
//! the workspace error enums. Camera math runs in double precision; mesh
//! output converts to f32 at the buffer boundary.

pub mod errors;
pub mod math;

pub use errors::{ConfigError, HorizonError, MeshError};
pub use math::{Mat4, Quaternion, Vec2, Vec3};

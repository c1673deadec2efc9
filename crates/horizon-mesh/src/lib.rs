//! Partial-sphere mesh generation for the horizon viewer.
//!
//! Builds the projection surface a panoramic frame is mapped onto: a UV
//! sphere (or a wedge of one) with positions, outward normals, texture
//! coordinates, and a triangle-list index buffer. The output is plain
//! buffers plus an interleaved GPU vertex form; uploading and drawing
//! stay with the embedding renderer.

pub mod buffers;
pub mod builder;
pub mod spec;
mod types;

pub use buffers::MeshBuffers;
pub use builder::build;
pub use spec::{SphereDetail, SphereSpec};
pub use types::MeshVertex;

//! Sphere mesh construction.
//!
//! Generates a partial UV sphere as indexed triangles. Vertices run in
//! ring-major order from the north pole; rings that collapse into a pole
//! contribute a triangle fan instead of quads. The +Y axis is up and the
//! seam at `phi_start` faces -X.

use crate::buffers::MeshBuffers;
use crate::spec::{SphereSpec, ANGLE_EPS};
use horizon_common::MeshError;
use tracing::debug;

/// Debug fill for requested vertex color buffers.
const PLACEHOLDER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Build the mesh described by `spec`.
///
/// Validates first and allocates nothing on invalid input. The result is
/// deterministic for a given spec.
pub fn build(spec: &SphereSpec) -> Result<MeshBuffers, MeshError> {
    spec.validate()?;

    let w = spec.segments_w;
    let h = spec.segments_h;
    let vertex_count = ((w + 1) * (h + 1)) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);

    let norm_len = 1.0 / spec.radius;
    let theta_end = spec.theta_start + spec.theta_length;

    for j in 0..=h {
        let v = j as f32 / h as f32;
        let theta = spec.theta_start + v * spec.theta_length;
        for i in 0..=w {
            let u = i as f32 / w as f32;
            let phi = spec.phi_start + u * spec.phi_length;

            let x = -(spec.radius * phi.cos() * theta.sin());
            let y = spec.radius * theta.cos();
            let z = spec.radius * phi.sin() * theta.sin();

            positions.push([x, y, z]);
            normals.push([x * norm_len, y * norm_len, z * norm_len]);
        }
    }

    // Ring-major vertex id for ring j, column i
    let vertex_id = |j: u32, i: u32| j * (w + 1) + i;

    let touches_north = spec.theta_start <= ANGLE_EPS;
    let touches_south = theta_end >= std::f32::consts::PI - ANGLE_EPS;

    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    for j in 0..h {
        for i in 0..w {
            let a = vertex_id(j, i + 1);
            let b = vertex_id(j, i);
            let c = vertex_id(j + 1, i);
            let d = vertex_id(j + 1, i + 1);

            // A ring sitting on a pole collapses its upper or lower
            // triangle into a degenerate sliver; emit only the other one.
            if j != 0 || !touches_north {
                indices.extend_from_slice(&[a, b, d]);
            }
            if j != h - 1 || !touches_south {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    // Flip winding to the renderer's front-face convention
    indices.reverse();

    let uvs = spec.generate_uvs.then(|| {
        let mut uvs = Vec::with_capacity(vertex_count);
        for j in 0..=h {
            let v = j as f32 / h as f32;
            // Columns are walked right to left: the default layout is
            // flipped along longitude, and `mirror_uvs` undoes the flip.
            for i in (0..=w).rev() {
                let u = i as f32 / w as f32;
                uvs.push([if spec.mirror_uvs { 1.0 - u } else { u }, v]);
            }
        }
        uvs
    });

    let colors = spec
        .generate_colors
        .then(|| vec![PLACEHOLDER_COLOR; vertex_count]);

    debug!(
        "built sphere mesh: {} vertices, {} triangles (phi {:.3} rad, theta {:.3} rad)",
        vertex_count,
        indices.len() / 3,
        spec.phi_length,
        spec.theta_length,
    );

    Ok(MeshBuffers {
        positions,
        normals,
        uvs,
        colors,
        indices,
    })
}

// =============================================================================
// Tests
// =============================================================================

//! Built mesh output buffers.

use crate::types::MeshVertex;

/// Plain CPU-side buffers for a built sphere mesh.
///
/// Positions and normals always exist and have equal length; texture
/// coordinates and vertex colors are present only when requested in the
/// spec. Indices form a triangle list.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Option<Vec<[f32; 2]>>,
    pub colors: Option<Vec<[f32; 4]>>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave into GPU-uploadable vertices.
    ///
    /// Vertices without texture coordinates get a zero UV; vertex colors
    /// are not part of the interleaved form.
    pub fn interleave(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(self.normals.iter())
            .enumerate()
            .map(|(i, (position, normal))| MeshVertex {
                position: *position,
                normal: *normal,
                uv: self.uvs.as_ref().map_or([0.0, 0.0], |uvs| uvs[i]),
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertex_buffers() -> MeshBuffers {
        MeshBuffers {
            positions: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            uvs: Some(vec![[0.0, 0.0], [1.0, 1.0]]),
            colors: None,
            indices: vec![0, 1, 0],
        }
    }

    #[test]
    fn counts_match_buffers() {
        let buffers = two_vertex_buffers();
        assert_eq!(buffers.vertex_count(), 2);
        assert_eq!(buffers.triangle_count(), 1);
    }

    #[test]
    fn interleave_copies_planes() {
        let buffers = two_vertex_buffers();
        let vertices = buffers.interleave();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[1].uv, [1.0, 1.0]);
    }

    #[test]
    fn interleave_without_uvs_zero_fills() {
        let mut buffers = two_vertex_buffers();
        buffers.uvs = None;
        let vertices = buffers.interleave();
        assert_eq!(vertices[0].uv, [0.0, 0.0]);
        assert_eq!(vertices[1].uv, [0.0, 0.0]);
    }
}

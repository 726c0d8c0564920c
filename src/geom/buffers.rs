//! Interleaved, indexed vertex buffers ready for GPU upload.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use super::mesh::{FaceCorner, Mesh};

/// Interleaved vertex layout: position, normal, uv.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Unique vertices plus a triangle list indexing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Raw vertex data.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index data.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Mesh {
    /// Flatten into indexed buffers, sharing vertices between triangles
    /// whose corners reference the same position, texcoord and normal.
    ///
    /// Corners without a texcoord get `(0, 0)`.
    pub fn to_buffers(&self) -> MeshBuffers {
        let mut out = MeshBuffers {
            vertices: Vec::with_capacity(self.vertices.len()),
            indices: Vec::with_capacity(self.faces.len() * 3),
        };
        let mut seen: HashMap<FaceCorner, u32> = HashMap::with_capacity(self.vertices.len());

        for corner in self.faces.iter().flatten() {
            let index = *seen.entry(*corner).or_insert_with(|| {
                let position = self
                    .vertices
                    .get(corner.vertex as usize)
                    .copied()
                    .unwrap_or_default();
                let normal = corner
                    .normal
                    .and_then(|n| self.normals.get(n as usize).copied())
                    .unwrap_or_default();
                let uv = corner
                    .texcoord
                    .and_then(|t| self.texcoords.get(t as usize).copied())
                    .unwrap_or_default();
                out.vertices.push(Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: uv.to_array(),
                });
                (out.vertices.len() - 1) as u32
            });
            out.indices.push(index);
        }

        tracing::trace!(
            corners = out.indices.len(),
            unique = out.vertices.len(),
            "built mesh buffers"
        );
        out
    }
}

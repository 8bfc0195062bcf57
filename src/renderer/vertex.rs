//! Vertex types and static mesh tables
//!
//! Uploaded once by the host renderer. Positions are in normalized device
//! coordinates; the untextured meshes are unit-sized and placed by the model
//! transform, the textured ones are already laid out on screen.

use bytemuck::{Pod, Zeroable};

use crate::sim::MeshId;

/// Position-only vertex (location 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
        }
    }
}

/// Position (location 0) + texture coordinates (location 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            tex_coords: [u, v],
        }
    }
}

/// Flat shape colors
pub mod colors {
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

pub static TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5),
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, -0.5),
];

pub static RECT: [Vertex; 4] = [
    Vertex::new(-0.5, 0.5),
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, -0.5),
    Vertex::new(0.5, 0.5),
];

pub static RECT_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Left half of the screen
pub static TEXTURED_SQUARE: [TexturedVertex; 6] = [
    TexturedVertex::new(-0.9, 0.75, 0.0, 1.0),
    TexturedVertex::new(-0.9, -0.75, 0.0, 0.0),
    TexturedVertex::new(-0.1, -0.75, 1.0, 0.0),
    TexturedVertex::new(-0.9, 0.75, 0.0, 1.0),
    TexturedVertex::new(-0.1, -0.75, 1.0, 0.0),
    TexturedVertex::new(-0.1, 0.75, 1.0, 1.0),
];

/// Right half of the screen
pub static TEXTURED_TRIANGLE: [TexturedVertex; 3] = [
    TexturedVertex::new(0.1, -0.75, 0.0, 0.0),
    TexturedVertex::new(0.9, -0.75, 1.0, 0.0),
    TexturedVertex::new(0.5, 0.75, 0.5, 1.0),
];

/// Raw buffers for one mesh
#[derive(Debug, Clone, Copy)]
pub struct MeshData {
    pub vertices: &'static [u8],
    /// Bytes between consecutive vertices
    pub stride: usize,
    pub vertex_count: u32,
    pub indices: Option<&'static [u32]>,
}

impl MeshData {
    /// Number of elements the draw call consumes
    pub fn draw_count(&self) -> u32 {
        match self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertex_count,
        }
    }
}

/// Buffers backing a mesh id
pub fn mesh_data(mesh: MeshId) -> MeshData {
    match mesh {
        MeshId::Triangle => MeshData {
            vertices: bytemuck::cast_slice(&TRIANGLE),
            stride: std::mem::size_of::<Vertex>(),
            vertex_count: TRIANGLE.len() as u32,
            indices: None,
        },
        MeshId::Rect => MeshData {
            vertices: bytemuck::cast_slice(&RECT),
            stride: std::mem::size_of::<Vertex>(),
            vertex_count: RECT.len() as u32,
            indices: Some(&RECT_INDICES),
        },
        MeshId::TexturedSquare => MeshData {
            vertices: bytemuck::cast_slice(&TEXTURED_SQUARE),
            stride: std::mem::size_of::<TexturedVertex>(),
            vertex_count: TEXTURED_SQUARE.len() as u32,
            indices: None,
        },
        MeshId::TexturedTriangle => MeshData {
            vertices: bytemuck::cast_slice(&TEXTURED_TRIANGLE),
            stride: std::mem::size_of::<TexturedVertex>(),
            vertex_count: TEXTURED_TRIANGLE.len() as u32,
            indices: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_strides() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
        assert_eq!(std::mem::size_of::<TexturedVertex>(), 20);
    }

    #[test]
    fn test_mesh_draw_counts() {
        assert_eq!(mesh_data(MeshId::Triangle).draw_count(), 3);
        assert_eq!(mesh_data(MeshId::Rect).draw_count(), 6);
        assert_eq!(mesh_data(MeshId::Rect).vertex_count, 4);
        assert_eq!(mesh_data(MeshId::TexturedSquare).draw_count(), 6);
        assert_eq!(mesh_data(MeshId::TexturedTriangle).draw_count(), 3);
    }

    #[test]
    fn test_mesh_bytes_match_stride() {
        for mesh in [
            MeshId::Triangle,
            MeshId::Rect,
            MeshId::TexturedSquare,
            MeshId::TexturedTriangle,
        ] {
            let data = mesh_data(mesh);
            assert_eq!(data.vertices.len(), data.stride * data.vertex_count as usize);
        }
    }

    #[test]
    fn test_unit_meshes_span_half_size() {
        let max = RECT
            .iter()
            .map(|v| v.position[0].abs().max(v.position[1].abs()))
            .fold(0.0f32, f32::max);
        assert_eq!(max, crate::consts::MESH_HALF_SIZE);
    }
}

//! Per-frame draw commands handed to the host renderer

use bytemuck::{Pod, Zeroable};

use crate::consts::CLEAR_COLOR;
use crate::sim::{MeshId, SceneState, Shape, TextureSlot};

/// Uniform block for one draw: `uTransform`, `uColor`, `uMixFactor`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeUniforms {
    /// Column-major model matrix
    pub transform: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub mix_factor: f32,
    pub _padding: [f32; 3],
}

impl ShapeUniforms {
    pub fn new(shape: &Shape, elapsed: f32, mix_factor: f32) -> Self {
        Self {
            transform: shape.transform(elapsed).to_cols_array_2d(),
            color: shape.color,
            mix_factor,
            _padding: [0.0; 3],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// One draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshId,
    pub texture: Option<TextureSlot>,
    pub uniforms: ShapeUniforms,
}

/// Everything the host needs to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    /// Visible shapes in scene order
    pub commands: Vec<DrawCommand>,
}

/// Build the frame for the current scene state
pub fn build_frame(state: &SceneState) -> Frame {
    build_frame_with_clear(state, CLEAR_COLOR)
}

pub fn build_frame_with_clear(state: &SceneState, clear_color: [f32; 4]) -> Frame {
    let commands = state
        .visible_shapes()
        .map(|shape| DrawCommand {
            mesh: shape.mesh,
            texture: shape.texture,
            uniforms: ShapeUniforms::new(shape, state.elapsed, state.mix_factor),
        })
        .collect();

    Frame {
        clear_color,
        commands,
    }
}

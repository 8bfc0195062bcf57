//! Renderer-facing data
//!
//! The host owns the window, shaders and GPU buffers. This module only
//! produces what it uploads: static mesh tables and per-frame uniforms.

pub mod frame;
pub mod vertex;

pub use frame::{DrawCommand, Frame, ShapeUniforms, build_frame, build_frame_with_clear};
pub use vertex::{MeshData, TexturedVertex, Vertex, mesh_data};

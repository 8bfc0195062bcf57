//! Shape Motion - animated 2D shapes in normalized device coordinates
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, transforms, scene state, input)
//! - `renderer`: Per-frame draw commands and static mesh tables for the host renderer
//! - `settings`: JSON configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ScenePreset, Settings};

/// Scene configuration constants
pub mod consts {
    /// Fixed motion step applied once per frame
    pub const MOTION_DT: f32 = 0.01;

    /// Viewport bounds in normalized device coordinates
    pub const NDC_MIN: f32 = -1.0;
    pub const NDC_MAX: f32 = 1.0;

    /// Default window size in pixels
    pub const SCR_WIDTH: u32 = 800;
    pub const SCR_HEIGHT: u32 = 600;

    /// Mix factor change per scroll notch
    pub const SCROLL_STEP: f32 = 0.05;

    /// Half size of the unit triangle/rectangle meshes before scaling
    pub const MESH_HALF_SIZE: f32 = 0.5;

    /// Background clear color
    pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
}

/// Half-extent of a mesh of half size `mesh_half_size` drawn at its largest scale
#[inline]
pub fn half_extent(mesh_half_size: f32, max_scale: f32) -> f32 {
    mesh_half_size * max_scale
}

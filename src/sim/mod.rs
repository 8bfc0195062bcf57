//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure:
//! - Caller-supplied time step only
//! - Input arrives as queued events, never from callbacks
//! - No GPU or platform dependencies (flat colors come from `renderer::vertex`)

pub mod input;
pub mod motion;
pub mod state;
pub mod tick;
pub mod transform;

pub use input::{EventQueue, InputEvent, Key};
pub use motion::{ShapeMotionState, advance};
pub use state::{
    MeshId, Placement, ScenePreset, SceneState, Shape, TextureSlot, Toggle, Toggles,
};
pub use tick::{TickInput, apply_event, tick};
pub use transform::{ScalePulse, TransformOptions, compose_transform};

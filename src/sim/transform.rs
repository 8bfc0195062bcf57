//! Model transform composition
//!
//! Every shape is drawn with `M = T * R * S`: scaled and rotated in its local
//! frame, then translated to its position in normalized device coordinates.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Scale applied to a shape each frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ScalePulse {
    /// Identity scale
    #[default]
    None,
    /// Constant uniform scale
    Uniform(f32),
    /// `baseline + amplitude * sin(frequency * t + phase)`
    Sinusoidal {
        amplitude: f32,
        frequency: f32,
        phase: f32,
        baseline: f32,
    },
}

impl ScalePulse {
    /// Scale factor at elapsed time `t` (seconds)
    pub fn factor(&self, t: f32) -> f32 {
        match *self {
            ScalePulse::None => 1.0,
            ScalePulse::Uniform(s) => s,
            ScalePulse::Sinusoidal {
                amplitude,
                frequency,
                phase,
                baseline,
            } => baseline + amplitude * (frequency * t + phase).sin(),
        }
    }

    /// Largest factor this pulse ever reaches
    pub fn max_factor(&self) -> f32 {
        match *self {
            ScalePulse::None => 1.0,
            ScalePulse::Uniform(s) => s,
            ScalePulse::Sinusoidal {
                amplitude, baseline, ..
            } => baseline + amplitude.abs(),
        }
    }
}

/// Per-shape transform options
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Rotate by the elapsed time (radians) around the view-plane normal
    pub rotate: bool,
    pub scale: ScalePulse,
}

impl TransformOptions {
    pub const NONE: Self = Self {
        rotate: false,
        scale: ScalePulse::None,
    };

    pub fn rotating(scale: ScalePulse) -> Self {
        Self {
            rotate: true,
            scale,
        }
    }

    pub fn scaled(scale: ScalePulse) -> Self {
        Self {
            rotate: false,
            scale,
        }
    }
}

/// Compose `Translate(position) * Rotate(elapsed) * Scale(s)` for one shape
pub fn compose_transform(position: Vec2, elapsed: f32, options: &TransformOptions) -> Mat4 {
    let translation = Mat4::from_translation(position.extend(0.0));
    let rotation = if options.rotate {
        Mat4::from_rotation_z(elapsed)
    } else {
        Mat4::IDENTITY
    };
    let scale = match options.scale {
        ScalePulse::None => Mat4::IDENTITY,
        pulse => Mat4::from_scale(Vec3::splat(pulse.factor(elapsed))),
    };

    translation * rotation * scale
}

//! Scene state and shape definitions
//!
//! Everything the host loop needs between frames lives in [`SceneState`].

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use super::motion::ShapeMotionState;
use super::transform::{ScalePulse, TransformOptions, compose_transform};
use crate::consts::*;
use crate::half_extent;
use crate::renderer::vertex::colors;

/// Which demo scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenePreset {
    /// Four flat-colored figures: bouncing, spinning, pulsing
    #[default]
    Animated,
    /// Textured square and triangle toggled from the keyboard
    Textured,
}

impl ScenePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Animated => "animated",
            ScenePreset::Textured => "textured",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "animated" => Some(ScenePreset::Animated),
            "textured" => Some(ScenePreset::Textured),
            _ => None,
        }
    }
}

/// Static mesh a shape is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshId {
    Triangle,
    Rect,
    TexturedSquare,
    TexturedTriangle,
}

/// Texture unit binding, resolved to a file by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureSlot(pub u8);

/// Keyboard-controlled visibility group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    Square,
    Triangle,
}

/// Visibility flags for the toggle groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toggles {
    pub square: bool,
    pub triangle: bool,
}

impl Toggles {
    pub fn is_on(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Square => self.square,
            Toggle::Triangle => self.triangle,
        }
    }

    pub fn flip(&mut self, toggle: Toggle) {
        match toggle {
            Toggle::Square => self.square = !self.square,
            Toggle::Triangle => self.triangle = !self.triangle,
        }
    }

    /// Show both, unless both are already shown, in which case hide both
    pub fn flip_both(&mut self) {
        let both = self.square && self.triangle;
        self.square = !both;
        self.triangle = !both;
    }
}

/// Where a shape sits each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    Fixed(Vec2),
    Bouncing(ShapeMotionState),
}

impl Placement {
    pub fn position(&self) -> Vec2 {
        match self {
            Placement::Fixed(pos) => *pos,
            Placement::Bouncing(motion) => motion.position,
        }
    }
}

/// A drawable shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub mesh: MeshId,
    pub color: [f32; 4],
    pub placement: Placement,
    pub options: TransformOptions,
    pub texture: Option<TextureSlot>,
    /// Visibility group; `None` means always drawn
    pub toggle: Option<Toggle>,
}

impl Shape {
    pub fn new(name: &str, mesh: MeshId, color: [f32; 4], placement: Placement) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            color,
            placement,
            options: TransformOptions::NONE,
            texture: None,
            toggle: None,
        }
    }

    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    pub fn with_toggle(mut self, toggle: Toggle) -> Self {
        self.toggle = Some(toggle);
        self
    }

    /// Model transform at elapsed time `t`
    pub fn transform(&self, t: f32) -> Mat4 {
        compose_transform(self.placement.position(), t, &self.options)
    }
}

/// Complete scene state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    pub preset: ScenePreset,
    pub shapes: Vec<Shape>,
    pub toggles: Toggles,
    /// Blend weight between texture color and flat color, in [0, 1]
    pub mix_factor: f32,
    /// Seconds of animation time
    pub elapsed: f32,
    pub ticks: u64,
}

impl SceneState {
    pub fn new(preset: ScenePreset) -> Self {
        let shapes = match preset {
            ScenePreset::Animated => animated_shapes(),
            ScenePreset::Textured => textured_shapes(),
        };
        log::info!("Scene '{}' built with {} shapes", preset.as_str(), shapes.len());

        Self {
            preset,
            shapes,
            toggles: Toggles::default(),
            mix_factor: 0.0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Whether a shape is drawn under the current toggles
    pub fn is_visible(&self, shape: &Shape) -> bool {
        shape.toggle.is_none_or(|t| self.toggles.is_on(t))
    }

    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| self.is_visible(s))
    }

    /// Add `delta` to the mix factor, clamped to [0, 1]
    pub fn adjust_mix(&mut self, delta: f32) {
        self.mix_factor = (self.mix_factor + delta).clamp(0.0, 1.0);
    }
}

fn animated_shapes() -> Vec<Shape> {
    let tri_scale = ScalePulse::Uniform(0.6);
    let pulse = ScalePulse::Sinusoidal {
        amplitude: 0.1,
        frequency: 2.0,
        phase: 0.0,
        baseline: 0.4,
    };
    // cos(t) expressed as a quarter-turn phase shift
    let slow_pulse = ScalePulse::Sinusoidal {
        amplitude: 0.1,
        frequency: 1.0,
        phase: std::f32::consts::FRAC_PI_2,
        baseline: 0.4,
    };

    let bouncer = ShapeMotionState::new(
        Vec2::new(-0.6, 0.6),
        Vec2::new(1.0, 0.5),
        0.5,
        half_extent(MESH_HALF_SIZE, tri_scale.max_factor()),
    );
    let tumbler = ShapeMotionState::new(
        Vec2::new(0.6, -0.6),
        Vec2::new(-1.0, 0.3),
        0.4,
        half_extent(MESH_HALF_SIZE, slow_pulse.max_factor()),
    );

    vec![
        Shape::new("bouncer", MeshId::Triangle, colors::RED, Placement::Bouncing(bouncer))
            .with_options(TransformOptions::scaled(tri_scale)),
        Shape::new(
            "spinner",
            MeshId::Triangle,
            colors::GREEN,
            Placement::Fixed(Vec2::new(0.6, 0.6)),
        )
        .with_options(TransformOptions::rotating(tri_scale)),
        Shape::new(
            "pulser",
            MeshId::Rect,
            colors::BLUE,
            Placement::Fixed(Vec2::new(-0.6, -0.6)),
        )
        .with_options(TransformOptions::scaled(pulse)),
        Shape::new("tumbler", MeshId::Rect, colors::YELLOW, Placement::Bouncing(tumbler))
            .with_options(TransformOptions::rotating(slow_pulse)),
    ]
}

fn textured_shapes() -> Vec<Shape> {
    // Geometry is already laid out in NDC, so both use the identity transform
    vec![
        Shape::new(
            "square",
            MeshId::TexturedSquare,
            colors::WHITE,
            Placement::Fixed(Vec2::ZERO),
        )
        .with_texture(TextureSlot(0))
        .with_toggle(Toggle::Square),
        Shape::new(
            "triangle",
            MeshId::TexturedTriangle,
            colors::WHITE,
            Placement::Fixed(Vec2::ZERO),
        )
        .with_texture(TextureSlot(1))
        .with_toggle(Toggle::Triangle),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_animated_scene_layout() {
        let scene = SceneState::new(ScenePreset::Animated);
        assert_eq!(scene.shapes.len(), 4);
        assert_eq!(scene.visible_shapes().count(), 4);

        let Placement::Bouncing(bouncer) = scene.shapes[0].placement else {
            panic!("first figure should bounce");
        };
        assert!((bouncer.half_extent - 0.3).abs() < EPS);
        assert!((bouncer.velocity.length() - 0.5).abs() < EPS);

        let Placement::Bouncing(tumbler) = scene.shapes[3].placement else {
            panic!("fourth figure should bounce");
        };
        assert!((tumbler.half_extent - 0.25).abs() < EPS);
        assert!((tumbler.velocity.length() - 0.4).abs() < EPS);
    }

    #[test]
    fn test_textured_scene_starts_hidden() {
        let scene = SceneState::new(ScenePreset::Textured);
        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.visible_shapes().count(), 0);
        assert_eq!(scene.mix_factor, 0.0);
    }

    #[test]
    fn test_flip_both() {
        let mut toggles = Toggles::default();
        toggles.flip_both();
        assert!(toggles.square && toggles.triangle);

        toggles.flip_both();
        assert!(!toggles.square && !toggles.triangle);

        // Only one shown: both become shown
        toggles.flip(Toggle::Square);
        toggles.flip_both();
        assert!(toggles.square && toggles.triangle);
    }

    #[test]
    fn test_adjust_mix_clamps() {
        let mut scene = SceneState::new(ScenePreset::Textured);
        scene.adjust_mix(-0.3);
        assert_eq!(scene.mix_factor, 0.0);
        scene.adjust_mix(0.4);
        assert!((scene.mix_factor - 0.4).abs() < EPS);
        scene.adjust_mix(5.0);
        assert_eq!(scene.mix_factor, 1.0);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(ScenePreset::from_str("Textured"), Some(ScenePreset::Textured));
        assert_eq!(ScenePreset::from_str("animated"), Some(ScenePreset::Animated));
        assert_eq!(ScenePreset::from_str("spinning"), None);
        assert_eq!(ScenePreset::Textured.as_str(), "textured");
    }
}

//! Per-frame simulation tick
//!
//! Applies queued input, then advances every bouncing shape.

use super::input::{InputEvent, Key};
use super::state::{Placement, SceneState, Toggle};
use crate::consts::SCROLL_STEP;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events drained from the host's queue, in arrival order
    pub events: Vec<InputEvent>,
    /// Wall-clock seconds since start; when absent the scene accumulates `dt`
    pub elapsed: Option<f32>,
    /// Mix factor change per scroll notch; `None` uses the default step
    pub scroll_step: Option<f32>,
}

impl TickInput {
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }
}

/// Apply one event to the scene
pub fn apply_event(state: &mut SceneState, event: InputEvent, scroll_step: f32) {
    match event {
        InputEvent::KeyPressed(Key::Q) => state.toggles.flip(Toggle::Square),
        InputEvent::KeyPressed(Key::T) => state.toggles.flip(Toggle::Triangle),
        InputEvent::KeyPressed(Key::B) => state.toggles.flip_both(),
        InputEvent::KeyPressed(Key::Other) => {}
        InputEvent::Scroll { delta_y } => {
            state.adjust_mix(delta_y * scroll_step);
            log::debug!("Mix factor now {:.2}", state.mix_factor);
        }
    }
}

/// Advance the scene by one step of `dt` seconds
pub fn tick(state: &mut SceneState, input: &TickInput, dt: f32) {
    let scroll_step = input.scroll_step.unwrap_or(SCROLL_STEP);
    for event in &input.events {
        apply_event(state, *event, scroll_step);
    }

    for shape in &mut state.shapes {
        if let Placement::Bouncing(motion) = &mut shape.placement {
            motion.step(dt);
        }
    }

    state.elapsed = input.elapsed.unwrap_or(state.elapsed + dt);
    state.ticks += 1;
}

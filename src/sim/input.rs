//! Input events delivered to the simulation as discrete messages
//!
//! The host's window callbacks only push into an [`EventQueue`]; the queue is
//! drained once per tick, so scene state is never mutated from a callback.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Keys the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Toggle the square
    Q,
    /// Toggle the triangle
    T,
    /// Show both, or hide both if both are already shown
    B,
    Other,
}

impl Key {
    /// Map a character key name as reported by the windowing layer
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'q' => Key::Q,
            't' => Key::T,
            'b' => Key::B,
            _ => Key::Other,
        }
    }
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key went down (repeats and releases are filtered by the host)
    KeyPressed(Key),
    /// Vertical scroll offset, in notches
    Scroll { delta_y: f32 },
}

/// FIFO buffer of events between ticks
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

//! Straight-line motion with edge reflection
//!
//! A bouncing shape is tracked by its center and an axis-aligned half-extent.
//! Reflection is decided on the post-move position, so a shape may overshoot
//! the viewport edge by at most `|velocity| * dt` for one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{NDC_MAX, NDC_MIN};

/// Position, velocity and bounding half-extent of one animated shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMotionState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Half of the bounding width/height tested against the viewport edges
    pub half_extent: f32,
}

impl ShapeMotionState {
    /// Start at `position`, moving along `direction` (normalized) at `speed`
    pub fn new(position: Vec2, direction: Vec2, speed: f32, half_extent: f32) -> Self {
        Self {
            position,
            velocity: direction.normalize_or_zero() * speed,
            half_extent,
        }
    }

    /// Advance in place by one step
    pub fn step(&mut self, dt: f32) {
        *self = advance(*self, dt);
    }

    /// Whether either edge on the x axis lies outside the viewport
    #[inline]
    pub fn crosses_x(&self) -> bool {
        crosses(self.position.x, self.half_extent)
    }

    /// Whether either edge on the y axis lies outside the viewport
    #[inline]
    pub fn crosses_y(&self) -> bool {
        crosses(self.position.y, self.half_extent)
    }
}

#[inline]
fn crosses(center: f32, half_extent: f32) -> bool {
    center + half_extent > NDC_MAX || center - half_extent < NDC_MIN
}

/// Move by `velocity * dt`, then flip each velocity component whose axis crossed an edge
pub fn advance(state: ShapeMotionState, dt: f32) -> ShapeMotionState {
    let mut next = state;
    next.position += next.velocity * dt;

    if next.crosses_x() {
        next.velocity.x = -next.velocity.x;
    }
    if next.crosses_y() {
        next.velocity.y = -next.velocity.y;
    }

    next
}

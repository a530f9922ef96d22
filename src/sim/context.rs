//! Shared per-frame simulation inputs
//!
//! Event listeners write into the context; the next animation tick reads it.
//! Last write before the tick wins.

use glam::Vec2;

use crate::consts::SCROLL_DECAY;

/// Inputs the field consumes each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Viewport size in CSS pixels
    pub bounds: Vec2,
    /// Absolute pointer position, `None` while the pointer is off the page
    pub pointer: Option<Vec2>,
    /// Signed proxy for recent vertical scroll velocity
    pub scroll_speed: f32,
}

impl FrameContext {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bounds,
            pointer: None,
            scroll_speed: 0.0,
        }
    }

    /// Decay scroll speed toward zero (called once per frame, after updates)
    pub fn decay_scroll(&mut self) {
        self.scroll_speed *= SCROLL_DECAY;
        if self.scroll_speed.abs() < 1e-3 {
            self.scroll_speed = 0.0;
        }
    }
}

/// Turns absolute scrollY samples into instantaneous deltas.
///
/// The baseline seeds from the first sample (or an explicit seed), so a page
/// restored mid-scroll does not kick the field with its absolute offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_y: Option<f64>,
}

impl ScrollTracker {
    /// Tracker with a known starting scroll position
    pub fn seeded(y: f64) -> Self {
        Self { last_y: Some(y) }
    }

    /// Record a scrollY sample and return the delta since the previous one
    pub fn sample(&mut self, y: f64) -> f32 {
        let delta = match self.last_y {
            Some(prev) => (y - prev) as f32,
            None => 0.0,
        };
        self.last_y = Some(y);
        delta
    }
}

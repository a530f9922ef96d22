//! Per-particle motion
//!
//! Update order per frame: scroll bias, integrate, wrap, pointer repel,
//! damping, anti-stall kick.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::context::FrameContext;
use crate::consts::*;
use crate::wrap_coord;

/// One blob in the field
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Base radius, fixed at spawn
    pub radius: f32,
    /// Palette index, fixed at spawn
    pub color: usize,
    /// Accumulated rotation applied at draw time
    pub rotation: f32,
    /// Rotation advance per frame
    pub spin: f32,
    /// Fixed phase offsets feeding the blob morph
    pub morph_offsets: [f32; MORPH_OFFSETS],
}

impl Particle {
    /// Spawn a particle with randomized position, motion, size, and color
    pub fn spawn(rng: &mut Pcg32, bounds: Vec2) -> Self {
        use std::f32::consts::TAU;

        let mut morph_offsets = [0.0; MORPH_OFFSETS];
        for offset in &mut morph_offsets {
            *offset = rng.random_range(0.0..TAU);
        }

        Self {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x.max(1.0)),
                rng.random_range(0.0..bounds.y.max(1.0)),
            ),
            vel: Vec2::new(
                rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
                rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
            ),
            radius: rng.random_range(RADIUS_MIN..RADIUS_MAX),
            color: rng.random_range(0..PALETTE.len()),
            rotation: rng.random_range(0.0..TAU),
            spin: rng.random_range(-SPIN_MAX..SPIN_MAX),
            morph_offsets,
        }
    }

    /// Advance one frame
    pub fn advance(&mut self, ctx: &FrameContext, rng: &mut Pcg32) {
        // Parallax: drift opposite the scroll direction
        self.vel.y -= ctx.scroll_speed * SCROLL_FORCE;

        self.pos += self.vel;
        self.rotation += self.spin;

        // Toroidal wrap, buffered by own radius so blobs leave fully
        self.pos.x = wrap_coord(self.pos.x, ctx.bounds.x, self.radius);
        self.pos.y = wrap_coord(self.pos.y, ctx.bounds.y, self.radius);

        if let Some(pointer) = ctx.pointer {
            self.vel += repel_impulse(self.pos, pointer);
        }

        self.vel *= DAMPING;

        // Keep the field from going fully static
        if self.vel.x.abs() < MIN_DRIFT {
            self.vel.x += rng.random_range(-DRIFT_KICK..DRIFT_KICK);
        }
        if self.vel.y.abs() < MIN_DRIFT {
            self.vel.y += rng.random_range(-DRIFT_KICK..DRIFT_KICK);
        }
    }
}

/// Impulse pushing a particle away from the pointer.
///
/// Magnitude falls off linearly from `REPEL_FORCE` at zero distance to zero
/// at `REPEL_RADIUS`; beyond the radius (or at zero distance, where the
/// direction is undefined) no impulse applies.
pub fn repel_impulse(pos: Vec2, pointer: Vec2) -> Vec2 {
    let delta = pos - pointer;
    let dist = delta.length();
    if dist >= REPEL_RADIUS || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let strength = (REPEL_RADIUS - dist) / REPEL_RADIUS * REPEL_FORCE;
    delta / dist * strength
}

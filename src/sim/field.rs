//! The particle field
//!
//! Fixed-size collection of particles plus the seeded RNG that drives spawn
//! randomization and anti-stall kicks. The whole field is rebuilt on resize;
//! individual particles are never destroyed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::context::FrameContext;
use super::particle::Particle;

#[derive(Debug, Clone)]
pub struct Field {
    particles: Vec<Particle>,
    rng: Pcg32,
    count: usize,
}

impl Field {
    /// Create a field of `count` particles randomized within `bounds`
    pub fn new(seed: u64, count: usize, bounds: Vec2) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            rng: Pcg32::seed_from_u64(seed),
            count,
        };
        field.reset(bounds);
        field
    }

    /// Rebuild the whole field, re-randomizing every particle
    pub fn reset(&mut self, bounds: Vec2) {
        self.particles.clear();
        for _ in 0..self.count {
            let particle = Particle::spawn(&mut self.rng, bounds);
            self.particles.push(particle);
        }
    }

    /// Advance every particle one frame, in array order
    pub fn advance(&mut self, ctx: &FrameContext) {
        for particle in &mut self.particles {
            particle.advance(ctx, &mut self.rng);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PALETTE, PARTICLE_COUNT, RADIUS_MAX, RADIUS_MIN};

    const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_new_spawns_exact_count() {
        let field = Field::new(42, PARTICLE_COUNT, BOUNDS);
        assert_eq!(field.len(), 12);
    }

    #[test]
    fn test_reset_keeps_count_and_rerandomizes() {
        let mut field = Field::new(42, PARTICLE_COUNT, BOUNDS);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();

        field.reset(Vec2::new(1920.0, 1080.0));
        assert_eq!(field.len(), PARTICLE_COUNT);

        let after: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_spawned_particles_within_parameter_ranges() {
        let field = Field::new(7, PARTICLE_COUNT, BOUNDS);
        for p in field.particles() {
            assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MAX);
            assert!(p.color < PALETTE.len());
            assert!(p.pos.x >= 0.0 && p.pos.x <= BOUNDS.x);
            assert!(p.pos.y >= 0.0 && p.pos.y <= BOUNDS.y);
        }
    }

    #[test]
    fn test_advance_preserves_count() {
        let mut field = Field::new(42, PARTICLE_COUNT, BOUNDS);
        let ctx = FrameContext::new(BOUNDS);
        for _ in 0..240 {
            field.advance(&ctx);
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Field::new(99, PARTICLE_COUNT, BOUNDS);
        let b = Field::new(99, PARTICLE_COUNT, BOUNDS);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.color, pb.color);
        }
    }
}

//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (array order)
//! - No rendering or platform dependencies

pub mod blob;
pub mod context;
pub mod field;
pub mod particle;

pub use context::{FrameContext, ScrollTracker};
pub use field::Field;
pub use particle::Particle;

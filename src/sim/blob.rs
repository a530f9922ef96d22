//! Procedural blob outlines
//!
//! A blob is a closed polygon sampled at evenly spaced angles, with each
//! vertex radius perturbed by two sinusoids: one phase-shifted by the
//! particle's fixed per-vertex offsets (shape identity), one phased by
//! wall-clock time (continuous morphing).

use glam::Vec2;

use crate::consts::*;

/// Sample the outline of a blob of base `radius` at `time_ms`.
///
/// Vertices are returned around the origin; the caller positions and rotates
/// them via its own transform. The polygon closes by joining the last vertex
/// back to the first.
pub fn outline(radius: f32, morph_offsets: &[f32; MORPH_OFFSETS], time_ms: f64) -> Vec<Vec2> {
    use std::f32::consts::TAU;

    let t = time_ms as f32 * MORPH_TIME_RATE;
    (0..BLOB_POINTS)
        .map(|i| {
            let angle = i as f32 / BLOB_POINTS as f32 * TAU;
            let shape = (angle * MORPH_FREQ_SHAPE + morph_offsets[i % MORPH_OFFSETS]).sin()
                * MORPH_AMP_SHAPE;
            let drift = (angle * MORPH_FREQ_TIME + t).sin() * MORPH_AMP_TIME;
            let r = radius * (1.0 + shape + drift);
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> [f32; MORPH_OFFSETS] {
        [0.3, 1.1, 2.6, 4.0, 5.2, 0.7, 3.3, 1.9]
    }

    #[test]
    fn test_outline_vertex_count() {
        let pts = outline(100.0, &offsets(), 0.0);
        assert_eq!(pts.len(), BLOB_POINTS);
    }

    #[test]
    fn test_outline_within_morph_envelope() {
        let radius = 100.0;
        let envelope = radius * (MORPH_AMP_SHAPE + MORPH_AMP_TIME);
        for t in [0.0, 250.0, 1000.0, 60_000.0] {
            for p in outline(radius, &offsets(), t) {
                let r = p.length();
                assert!(
                    (r - radius).abs() <= envelope + 1e-3,
                    "vertex radius {r} outside envelope at t={t}"
                );
            }
        }
    }

    #[test]
    fn test_outline_morphs_over_time() {
        let a = outline(100.0, &offsets(), 0.0);
        let b = outline(100.0, &offsets(), 500.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_outline_deterministic_at_fixed_time() {
        let a = outline(80.0, &offsets(), 1234.0);
        let b = outline(80.0, &offsets(), 1234.0);
        assert_eq!(a, b);
    }
}

//! Canvas 2D rendering (wasm only)
//!
//! Draws the field back-to-front in array order. Each blob is a filled,
//! closed polygon sampled from `sim::blob`, drawn under an accumulated
//! translate + rotate transform.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BLOB_ALPHA, PALETTE};
use crate::sim::{Field, blob};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Precomputed rgba() fill styles, one per palette entry
    fill_styles: [String; PALETTE.len()],
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        let fill_styles = PALETTE
            .map(|(r, g, b)| format!("rgba({r}, {g}, {b}, {BLOB_ALPHA})"));
        Self { ctx, fill_styles }
    }

    /// Clear the surface and draw every particle for this frame
    pub fn render(&self, field: &Field, bounds: Vec2, time_ms: f64) {
        self.ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

        for particle in field.particles() {
            let points = blob::outline(particle.radius, &particle.morph_offsets, time_ms);

            self.ctx.save();
            let _ = self
                .ctx
                .translate(particle.pos.x as f64, particle.pos.y as f64);
            let _ = self.ctx.rotate(particle.rotation as f64);

            self.ctx.begin_path();
            if let Some(first) = points.first() {
                self.ctx.move_to(first.x as f64, first.y as f64);
                for p in &points[1..] {
                    self.ctx.line_to(p.x as f64, p.y as f64);
                }
            }
            self.ctx.close_path();

            self.ctx.set_fill_style_str(&self.fill_styles[particle.color]);
            self.ctx.fill();

            self.ctx.restore();
        }
    }
}

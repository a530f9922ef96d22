//! Blobfield - ambient morphing blob background
//!
//! Core modules:
//! - `sim`: Deterministic particle simulation (drift, wrap, pointer repel, blob shapes)
//! - `render`: Canvas 2D rendering (wasm only)
//! - `settings`: User preferences persisted in LocalStorage
//! - `mailto`: Contact form to mail-compose handoff

pub mod mailto;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Animation tuning constants
pub mod consts {
    /// Number of blobs in the field
    pub const PARTICLE_COUNT: usize = 12;
    /// Vertices per blob outline
    pub const BLOB_POINTS: usize = 11;
    /// Fixed morph phase offsets carried by each particle
    pub const MORPH_OFFSETS: usize = 8;

    /// Pointer interaction radius (CSS pixels)
    pub const REPEL_RADIUS: f32 = 600.0;
    /// Repel impulse at zero pointer distance
    pub const REPEL_FORCE: f32 = 0.25;
    /// Per-frame velocity damping
    pub const DAMPING: f32 = 0.98;
    /// Below this speed a velocity component gets a random kick
    pub const MIN_DRIFT: f32 = 0.2;
    /// Anti-stall kick amplitude
    pub const DRIFT_KICK: f32 = 0.3;

    /// Scroll speed decay per frame
    pub const SCROLL_DECAY: f32 = 0.9;
    /// Vertical acceleration per unit of scroll speed
    pub const SCROLL_FORCE: f32 = 0.03;

    /// Blob radius range at spawn
    pub const RADIUS_MIN: f32 = 40.0;
    pub const RADIUS_MAX: f32 = 140.0;
    /// Initial velocity component range (+/-)
    pub const SPAWN_SPEED: f32 = 0.35;
    /// Spin rate range (+/-, radians per frame)
    pub const SPIN_MAX: f32 = 0.002;

    /// Morph amplitude from the per-vertex phase offsets (fraction of radius)
    pub const MORPH_AMP_SHAPE: f32 = 0.15;
    /// Morph amplitude from the time-phased sinusoid (fraction of radius)
    pub const MORPH_AMP_TIME: f32 = 0.08;
    /// Time-phase advance (radians per millisecond)
    pub const MORPH_TIME_RATE: f32 = 0.0012;
    /// Angular frequency of the offset-phased sinusoid
    pub const MORPH_FREQ_SHAPE: f32 = 3.0;
    /// Angular frequency of the time-phased sinusoid
    pub const MORPH_FREQ_TIME: f32 = 2.0;

    /// Fill palette (r, g, b); every blob keeps one entry for life
    pub const PALETTE: [(u8, u8, u8); 5] = [
        (129, 140, 248),
        (96, 165, 250),
        (45, 212, 191),
        (244, 114, 182),
        (192, 132, 252),
    ];
    /// Fill alpha shared by all palette entries
    pub const BLOB_ALPHA: f32 = 0.35;

    /// Contact form recipient
    pub const CONTACT_RECIPIENT: &str = "hello@blobfield.studio";
}

/// Wrap a coordinate toroidally across `[0, dim]` expanded by `buffer` on
/// both sides: past `dim + buffer` resets to `-buffer`, and symmetrically.
#[inline]
pub fn wrap_coord(value: f32, dim: f32, buffer: f32) -> f32 {
    if value > dim + buffer {
        -buffer
    } else if value < -buffer {
        dim + buffer
    } else {
        value
    }
}

// Shared tuning constants for the landing-page effects.

// Float field: idle oscillation
pub const FLOAT_FREQUENCY: f32 = 1.0; // rad/s at float speed 1 (one cycle ~6.3 s)
pub const FLOAT_AMPLITUDE: f32 = 10.0; // px at float speed 1

// Float field: cursor repulsion and spring return
pub const REPULSION_RANGE: f32 = 150.0; // px
pub const REPULSION_FORCE: f32 = 80.0; // peak push in px at zero distance
pub const RETURN_SPEED: f32 = 0.05; // spring stiffness per frame
pub const DAMPING: f32 = 0.9; // velocity kept per frame

// Per-element defaults
pub const DEFAULT_FLOAT_SPEED: f32 = 1.0;

// Particle network
pub const PARTICLE_AREA_PER_COUNT: f32 = 15_000.0; // px² of canvas per particle
pub const PARTICLE_SPEED: f32 = 0.3; // px per frame, max per axis is half of this
pub const PARTICLE_LINK_DISTANCE: f32 = 120.0; // px
pub const PARTICLE_OPACITY: f32 = 0.3;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;

// Matrix rain
pub const RAIN_FONT_SIZE: u32 = 14; // px, also the column and row pitch
pub const RAIN_DENSITY: f32 = 0.95; // chance a drop below the fold keeps falling
pub const RAIN_GLYPH_BASE: u32 = 0x30A0; // katakana block
pub const RAIN_GLYPH_SPAN: u32 = 96;

// Hero parallax
pub const PARALLAX_RATE: f32 = 0.5;
pub const PARALLAX_FADE_DISTANCE: f32 = 600.0; // px of scroll until fully faded

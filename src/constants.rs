/// Page wiring constants: selectors, element ids and timings.
///
/// Simulation tuning lives in `core::constants`; these only describe how the
/// effects attach to the landing page markup.
// Opted-in floating elements and their attributes
pub const FLOATING_SELECTOR: &str = ".floating-element";
pub const ATTR_FLOAT_SPEED: &str = "floatSpeed"; // dataset key of data-float-speed
pub const ATTR_REPEL: &str = "repel"; // dataset key of data-repel

// Canvases and decorative nodes
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const MATRIX_CANVAS_ID: &str = "matrix-canvas";
pub const CURSOR_GLOW_ID: &str = "cursor-glow";
pub const HERO_CONTENT_SELECTOR: &str = "#hero .hero-content";
pub const REVEAL_SELECTOR: &str = "section";

// Timings
pub const FIELD_START_DELAY_MS: i32 = 3500; // wait for the intro to clear
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

// Cursor glow
pub const CURSOR_GLOW_OPACITY: &str = "0.6";

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Canvas colors
pub const PARTICLE_DOT_RGB: &str = "0, 255, 136";
pub const PARTICLE_LINK_RGB: &str = "0, 212, 255";
pub const RAIN_FADE_FILL: &str = "rgba(11, 15, 20, 0.05)";
pub const RAIN_GLYPH_FILL: &str = "#00ff88";

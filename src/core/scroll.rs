use super::constants::{PARALLAX_FADE_DISTANCE, PARALLAX_RATE};

/// Hero content parallax for a scroll offset: (translateY px, opacity).
#[inline]
pub fn parallax(scroll_y: f32) -> (f32, f32) {
    let offset = scroll_y * PARALLAX_RATE;
    let opacity = (1.0 - scroll_y / PARALLAX_FADE_DISTANCE).clamp(0.0, 1.0);
    (offset, opacity)
}

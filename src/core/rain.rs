// Matrix rain: one falling glyph per column, reset at random once it has
// passed the bottom edge.

use super::config::RainParams;
use super::constants::{RAIN_GLYPH_BASE, RAIN_GLYPH_SPAN};
use rand::Rng;

pub struct MatrixRain {
    /// Current row of the head glyph for each column.
    pub drops: Vec<u32>,
    pub height: f32,
    pub params: RainParams,
}

impl MatrixRain {
    pub fn new(width: f32, height: f32, params: RainParams) -> Self {
        let mut rain = Self {
            drops: Vec::new(),
            height,
            params,
        };
        rain.resize(width, height);
        rain
    }

    /// Rebuild the columns for a new surface; every drop restarts at row 1.
    pub fn resize(&mut self, width: f32, height: f32) {
        let font = self.params.font_size.max(1) as f32;
        let columns = if width > 0.0 {
            (width / font).floor() as usize
        } else {
            0
        };
        self.drops = vec![1; columns];
        self.height = height;
    }

    /// Advance every column by one row, calling `emit(glyph, x, y)` for the
    /// glyph drawn this frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R, mut emit: impl FnMut(char, f32, f32)) {
        let font = self.params.font_size.max(1) as f32;
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let x = i as f32 * font;
            let y = *drop as f32 * font;
            emit(random_glyph(rng), x, y);
            if y > self.height && rng.gen::<f32>() > self.params.density {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }
}

#[inline]
pub fn random_glyph<R: Rng>(rng: &mut R) -> char {
    let code = RAIN_GLYPH_BASE + rng.gen_range(0..RAIN_GLYPH_SPAN);
    char::from_u32(code).unwrap_or('0')
}

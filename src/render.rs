//! Canvas 2D drawing for the background layers.

use crate::constants::{PARTICLE_DOT_RGB, PARTICLE_LINK_RGB, RAIN_FADE_FILL, RAIN_GLYPH_FILL};
use crate::core::{MatrixRain, ParticleNetwork, ParticleParams, RainParams};
use crate::dom;
use rand::Rng;
use std::f64::consts::TAU;
use web_sys as web;

/// Particle network on a canvas spanning the full document height.
pub struct ParticleLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub net: ParticleNetwork,
}

impl ParticleLayer {
    pub fn new<R: Rng>(
        canvas: web::HtmlCanvasElement,
        params: ParticleParams,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let (w, h) = Self::surface_size();
        dom::set_canvas_size(&canvas, w, h);
        let net = ParticleNetwork::new(w, h, params, rng);
        log::info!("[particles] {} particles on {}x{}", net.particles.len(), w, h);
        Ok(Self { canvas, ctx, net })
    }

    fn surface_size() -> (f32, f32) {
        let Some(window) = web::window() else {
            return (0.0, 0.0);
        };
        let (w, _) = dom::viewport_size(&window);
        let h = window
            .document()
            .map(|d| dom::document_scroll_height(&d))
            .unwrap_or(0.0);
        (w, h)
    }

    pub fn resize(&mut self) {
        let (w, h) = Self::surface_size();
        dom::set_canvas_size(&self.canvas, w, h);
        self.net.resize(w, h);
    }

    pub fn draw(&mut self) {
        self.net.step();
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let opacity = self.net.params.opacity;
        ctx.set_fill_style_str(&format!("rgba({PARTICLE_DOT_RGB}, {opacity})"));
        for p in &self.net.particles {
            ctx.begin_path();
            _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            ctx.fill();
        }

        ctx.set_line_width(1.0);
        for (i, j, alpha) in self.net.links() {
            let a = self.net.particles[i].pos;
            let b = self.net.particles[j].pos;
            ctx.begin_path();
            ctx.set_stroke_style_str(&format!("rgba({PARTICLE_LINK_RGB}, {alpha})"));
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        }
    }
}

/// Matrix rain on a viewport-sized canvas.
pub struct RainLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub rain: MatrixRain,
}

impl RainLayer {
    pub fn new(canvas: web::HtmlCanvasElement, params: RainParams) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let (w, h) = web::window()
            .map(|w| dom::viewport_size(&w))
            .unwrap_or((0.0, 0.0));
        dom::set_canvas_size(&canvas, w, h);
        let rain = MatrixRain::new(w, h, params);
        log::info!("[rain] {} columns", rain.columns());
        Ok(Self { canvas, ctx, rain })
    }

    pub fn resize(&mut self) {
        let (w, h) = web::window()
            .map(|w| dom::viewport_size(&w))
            .unwrap_or((0.0, 0.0));
        dom::set_canvas_size(&self.canvas, w, h);
        self.rain.resize(w, h);
    }

    pub fn draw<R: Rng>(&mut self, rng: &mut R) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(RAIN_FADE_FILL);
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        ctx.set_fill_style_str(RAIN_GLYPH_FILL);
        ctx.set_font(&format!("{}px monospace", self.rain.params.font_size));
        let mut buf = [0u8; 4];
        self.rain.step(rng, |glyph, x, y| {
            _ = ctx.fill_text(glyph.encode_utf8(&mut buf), x as f64, y as f64);
        });
    }
}

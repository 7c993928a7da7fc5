// Drifting particle network drawn behind the page.

use super::config::ParticleParams;
use super::constants::{PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

pub struct ParticleNetwork {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    pub params: ParticleParams,
}

/// Particle count for a surface, one per `area_per_particle` px².
#[inline]
pub fn particle_count(width: f32, height: f32, params: &ParticleParams) -> usize {
    if width <= 0.0 || height <= 0.0 || params.area_per_particle <= 0.0 {
        return 0;
    }
    (width * height / params.area_per_particle).floor() as usize
}

impl ParticleNetwork {
    pub fn new<R: Rng>(width: f32, height: f32, params: ParticleParams, rng: &mut R) -> Self {
        let count = particle_count(width, height, &params);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * params.speed,
                    (rng.gen::<f32>() - 0.5) * params.speed,
                ),
                radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            })
            .collect();
        Self {
            particles,
            width,
            height,
            params,
        }
    }

    /// New bounds; existing particles keep drifting and bounce back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Pairs closer than the link distance, with the line alpha for each.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let max_d = self.params.link_distance;
        let opacity = self.params.opacity;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let d = ps[i].pos.distance(ps[j].pos);
                (d < max_d).then(|| (i, j, (1.0 - d / max_d) * opacity))
            })
        })
    }
}

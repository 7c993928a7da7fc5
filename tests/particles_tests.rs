// Host-side tests for the particle network and matrix rain.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod rain {
        include!("../src/core/rain.rs");
    }
}

use crate::core::config::{ParticleParams, RainParams};
use crate::core::constants::*;
use crate::core::particles::*;
use crate::core::rain::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn particle_count_scales_with_area() {
    let p = ParticleParams::default();
    assert_eq!(particle_count(1500.0, 1000.0, &p), 100);
    assert_eq!(particle_count(100.0, 100.0, &p), 0);
    assert_eq!(particle_count(0.0, 1000.0, &p), 0);
}

#[test]
fn seeded_particles_start_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let net = ParticleNetwork::new(800.0, 600.0, ParticleParams::default(), &mut rng);
    assert_eq!(net.particles.len(), 32);
    for p in &net.particles {
        assert!((0.0..=800.0).contains(&p.pos.x));
        assert!((0.0..=600.0).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= PARTICLE_SPEED * 0.5);
        assert!(p.vel.y.abs() <= PARTICLE_SPEED * 0.5);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius < PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn particles_bounce_off_edges() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut net = ParticleNetwork::new(100.0, 100.0, ParticleParams::default(), &mut rng);
    net.particles = vec![Particle {
        pos: Vec2::new(99.9, 50.0),
        vel: Vec2::new(0.15, 0.0),
        radius: 1.0,
    }];
    net.step();
    assert!(net.particles[0].vel.x < 0.0);
    for _ in 0..10_000 {
        net.step();
    }
    let p = net.particles[0];
    assert!(p.pos.x > -1.0 && p.pos.x < 101.0);
}

#[test]
fn links_respect_distance_and_fade() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut net = ParticleNetwork::new(500.0, 500.0, ParticleParams::default(), &mut rng);
    let at = |x: f32, y: f32| Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        radius: 1.0,
    };
    net.particles = vec![at(0.0, 0.0), at(60.0, 0.0), at(300.0, 300.0)];
    let links: Vec<_> = net.links().collect();
    assert_eq!(links.len(), 1);
    let (i, j, alpha) = links[0];
    assert_eq!((i, j), (0, 1));
    assert!((alpha - 0.5 * PARTICLE_OPACITY).abs() < 1e-5);
}

#[test]
fn resize_keeps_particles() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut net = ParticleNetwork::new(600.0, 500.0, ParticleParams::default(), &mut rng);
    let before = net.particles.len();
    net.resize(1200.0, 900.0);
    assert_eq!(net.particles.len(), before);
    assert_eq!(net.width, 1200.0);
}

#[test]
fn rain_columns_follow_font_size() {
    let rain = MatrixRain::new(140.0, 100.0, RainParams::default());
    assert_eq!(rain.columns(), 10);
    assert!(rain.drops.iter().all(|&d| d == 1));
}

#[test]
fn rain_emits_one_katakana_glyph_per_column() {
    let mut rain = MatrixRain::new(70.0, 100.0, RainParams::default());
    let mut rng = StdRng::seed_from_u64(5);
    let mut emitted = Vec::new();
    rain.step(&mut rng, |c, x, y| emitted.push((c, x, y)));
    assert_eq!(emitted.len(), 5);
    for (i, (c, x, y)) in emitted.iter().enumerate() {
        let code = *c as u32;
        assert!((RAIN_GLYPH_BASE..RAIN_GLYPH_BASE + RAIN_GLYPH_SPAN).contains(&code));
        assert_eq!(*x, i as f32 * RAIN_FONT_SIZE as f32);
        assert_eq!(*y, RAIN_FONT_SIZE as f32);
    }
    assert!(rain.drops.iter().all(|&d| d == 2));
}

#[test]
fn rain_resets_only_below_the_fold() {
    let params = RainParams {
        font_size: 10,
        density: 0.0,
    };
    let mut rain = MatrixRain::new(10.0, 50.0, params);
    let mut rng = StdRng::seed_from_u64(3);
    // rows 1..=5 are on screen, never reset
    for _ in 0..5 {
        rain.step(&mut rng, |_, _, _| {});
    }
    assert_eq!(rain.drops[0], 6);
    // row 6 is at y=60 > 50; density 0 resets on any non-zero draw
    rain.step(&mut rng, |_, _, _| {});
    assert_eq!(rain.drops[0], 1);
}

#[test]
fn rain_resize_restarts_drops() {
    let mut rain = MatrixRain::new(28.0, 40.0, RainParams::default());
    let mut rng = StdRng::seed_from_u64(3);
    rain.step(&mut rng, |_, _, _| {});
    rain.resize(56.0, 40.0);
    assert_eq!(rain.columns(), 4);
    assert!(rain.drops.iter().all(|&d| d == 1));
}

// Host-side tests for the particle engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use core::particles::*;
use core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Recorder {
    clears: usize,
    circles: Vec<(Vec2, f32, Rgba)>,
    lines: Vec<(Vec2, Vec2, Rgba)>,
}

impl Surface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push((center, radius, color));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _line_width: f32, color: Rgba) {
        self.lines.push((from, to, color));
    }
    fn stroke_polygon(&mut self, _points: &[Vec2], _line_width: f32, _color: Rgba) {}
    fn fill_text(&mut self, _text: &str, _at: Vec2, _font: &str, _color: Rgba) {}
}

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        radius: 1.0,
        opacity: 0.5,
    }
}

#[test]
fn particle_count_is_area_derived_and_capped() {
    let ambient = ParticleConfig::ambient();
    let hero = ParticleConfig::hero();
    // 800*600 / 10000 = 48, below the cap
    assert_eq!(hero.particle_count(800.0, 600.0), 48);
    // 1920*1080 / 10000 = 207, capped at 100
    assert_eq!(hero.particle_count(1920.0, 1080.0), 100);
    // 1024*768 / 20000 = 39.3 -> floor
    assert_eq!(ambient.particle_count(1024.0, 768.0), 39);
    assert_eq!(ambient.particle_count(1920.0, 1080.0), 50);
    assert_eq!(ambient.particle_count(0.0, 1080.0), 0);
}

#[test]
fn new_field_respects_configured_ranges() {
    let cfg = ParticleConfig::hero();
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(cfg.clone(), 1280.0, 720.0, &mut rng);
    assert_eq!(field.len(), 92);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1280.0);
        assert!(p.position.y >= 0.0 && p.position.y < 720.0);
        assert!(p.velocity.x.abs() <= cfg.max_speed());
        assert!(p.velocity.y.abs() <= cfg.max_speed());
        assert!(p.radius >= cfg.radius_range[0] && p.radius <= cfg.radius_range[1]);
        assert!(p.opacity >= cfg.opacity_range[0] && p.opacity <= cfg.opacity_range[1]);
    }
}

#[test]
fn positions_overshoot_by_at_most_one_frame() {
    for cfg in [ParticleConfig::ambient(), ParticleConfig::hero()] {
        let (w, h) = (640.0, 480.0);
        let max_v = cfg.max_speed() + 1e-3;
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(cfg, w, h, &mut rng);
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!(p.position.x >= -max_v && p.position.x <= w + max_v, "x={}", p.position.x);
                assert!(p.position.y >= -max_v && p.position.y <= h + max_v, "y={}", p.position.y);
            }
        }
    }
}

#[test]
fn crossing_an_edge_flips_velocity_without_clamping() {
    let cfg = ParticleConfig::hero();
    let mut field =
        ParticleField::from_particles(cfg, 800.0, 600.0, vec![particle(799.9, 300.0, 0.25, 0.0)]);
    field.step();
    let p = field.particles()[0];
    assert!(p.position.x > 800.0, "must not clamp, got {}", p.position.x);
    assert_eq!(p.velocity.x, -0.25);

    field.step();
    let p = field.particles()[0];
    assert!(p.position.x < 800.0);
    assert_eq!(p.velocity.x, -0.25);
}

#[test]
fn lower_edges_reflect_too() {
    let cfg = ParticleConfig::ambient();
    let mut field =
        ParticleField::from_particles(cfg, 100.0, 100.0, vec![particle(0.1, 0.05, -0.15, -0.1)]);
    field.step();
    let p = field.particles()[0];
    assert!(p.position.x < 0.0 && p.position.y < 0.0);
    assert_eq!(p.velocity, Vec2::new(0.15, 0.1));
}

#[test]
fn link_opacity_falls_off_linearly_and_is_zero_at_threshold() {
    assert_eq!(link_opacity(100.0, 100.0, 0.3), 0.0);
    assert_eq!(link_opacity(150.0, 100.0, 0.3), 0.0);
    assert!((link_opacity(0.0, 100.0, 0.3) - 0.3).abs() < 1e-6);
    assert!((link_opacity(50.0, 100.0, 0.3) - 0.15).abs() < 1e-6);
    assert!((link_opacity(75.0, 150.0, 0.2) - 0.1).abs() < 1e-6);
}

#[test]
fn pair_at_exact_threshold_is_not_connected() {
    let cfg = ParticleConfig::hero();
    let field = ParticleField::from_particles(
        cfg,
        800.0,
        600.0,
        vec![particle(100.0, 100.0, 0.0, 0.0), particle(200.0, 100.0, 0.0, 0.0)],
    );
    assert_eq!(field.connections().count(), 0);
}

#[test]
fn connections_are_symmetric_and_never_self_links() {
    let cfg = ParticleConfig::hero();
    let mut rng = StdRng::seed_from_u64(3);
    let forward = ParticleField::new(cfg.clone(), 800.0, 600.0, &mut rng);
    let mut reversed_pool = forward.particles().to_vec();
    reversed_pool.reverse();
    let reversed = ParticleField::from_particles(cfg, 800.0, 600.0, reversed_pool);

    let normalize = |c: &Connection| {
        let (a, b) = (c.from.to_array(), c.to.to_array());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo, hi, c.opacity.to_bits())
    };
    let mut fwd: Vec<_> = forward.connections().map(|c| normalize(&c)).collect();
    let mut rev: Vec<_> = reversed.connections().map(|c| normalize(&c)).collect();
    fwd.sort_by(|x, y| x.partial_cmp(y).unwrap());
    rev.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert!(!fwd.is_empty());
    assert_eq!(fwd, rev);

    for c in forward.connections() {
        assert!(c.a < c.b);
        assert!(c.opacity > 0.0);
    }
}

#[test]
fn connections_cover_every_close_pair() {
    let cfg = ParticleConfig::ambient();
    let mut rng = StdRng::seed_from_u64(11);
    let field = ParticleField::new(cfg.clone(), 900.0, 700.0, &mut rng);
    let ps = field.particles();
    let mut expected = 0;
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            if ps[i].position.distance(ps[j].position) < cfg.link_distance {
                expected += 1;
            }
        }
    }
    assert_eq!(field.connections().count(), expected);
}

#[test]
fn resize_changes_bounds_but_not_pool() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new(ParticleConfig::hero(), 1000.0, 800.0, &mut rng);
    let before: Vec<Particle> = field.particles().to_vec();
    field.resize(500.0, 400.0);
    assert_eq!(field.size(), (500.0, 400.0));
    assert_eq!(field.len(), before.len());
    assert_eq!(field.particles(), before.as_slice());
}

#[test]
fn particle_stranded_by_shrink_returns_inside() {
    let cfg = ParticleConfig::hero();
    let mut field =
        ParticleField::from_particles(cfg, 1000.0, 800.0, vec![particle(700.0, 100.0, 0.2, 0.0)]);
    field.resize(400.0, 800.0);
    field.step();
    assert!(field.particles()[0].velocity.x < 0.0);
    for _ in 0..2_000 {
        field.step();
    }
    assert!(field.particles()[0].position.x <= 400.0 + 0.2);
}

#[test]
fn draw_emits_one_circle_per_particle_and_one_line_per_connection() {
    let mut rng = StdRng::seed_from_u64(9);
    let field = ParticleField::new(ParticleConfig::hero(), 600.0, 400.0, &mut rng);
    let mut surface = Recorder::default();
    field.draw(&mut surface);
    assert_eq!(surface.circles.len(), field.len());
    assert_eq!(surface.lines.len(), field.connections().count());
    for ((_, radius, color), p) in surface.circles.iter().zip(field.particles()) {
        assert_eq!(*radius, p.radius);
        assert_eq!(color.alpha, p.opacity);
        assert_eq!(color.rgb, [0, 255, 65]);
    }
}

#[test]
fn rgba_renders_css() {
    assert_eq!(Rgba::new([0, 255, 65], 0.25).css(), "rgba(0, 255, 65, 0.25)");
}

// Host-side tests for the frame loop, resize/visibility coordination and
// the hero decorations.

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
    pub mod decor {
        include!("../src/core/decor.rs");
    }
    pub mod animation {
        include!("../src/core/animation.rs");
    }
    pub mod coordinator {
        include!("../src/core/coordinator.rs");
    }
}

use core::animation::*;
use core::coordinator::*;
use core::decor::*;
use core::particles::ParticleConfig;
use core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Tally {
    clears: usize,
    circles: usize,
    lines: usize,
    polygons: usize,
    texts: Vec<String>,
}

impl Surface for Tally {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.circles += 1;
    }
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _line_width: f32, _color: Rgba) {
        self.lines += 1;
    }
    fn stroke_polygon(&mut self, points: &[Vec2], _line_width: f32, _color: Rgba) {
        assert_eq!(points.len(), 6);
        self.polygons += 1;
    }
    fn fill_text(&mut self, text: &str, _at: Vec2, font: &str, _color: Rgba) {
        assert_eq!(font, constants::CODE_SNIPPET_FONT);
        self.texts.push(text.to_string());
    }
}

/// Browser-free stand-in for the rAF driver: handles are plain counters.
struct SimLoop {
    scene: BackgroundScene,
    frame_loop: FrameLoop,
    surface: Tally,
    next_handle: FrameHandle,
    cancelled: Vec<FrameHandle>,
    requests: usize,
}

impl SimLoop {
    fn new(config: ParticleConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(1);
        Self {
            scene: BackgroundScene::new(config, 800.0, 600.0, &mut rng),
            frame_loop: FrameLoop::new(),
            surface: Tally::default(),
            next_handle: 0,
            cancelled: Vec::new(),
            requests: 0,
        }
    }

    fn request(&mut self) {
        self.next_handle += 1;
        self.requests += 1;
        self.frame_loop.scheduled(self.next_handle);
    }

    /// Fire the pending frame callback, as the browser would.
    fn fire(&mut self) -> bool {
        if self.frame_loop.on_frame() {
            self.scene.render_frame(&mut self.surface);
            self.request();
            true
        } else {
            false
        }
    }
}

impl AnimationHooks for SimLoop {
    fn resize(&mut self, width: f32, height: f32) {
        self.scene.resize(width, height);
    }
    fn suspend(&mut self) {
        if let Some(h) = self.frame_loop.suspend() {
            self.cancelled.push(h);
        }
    }
    fn resume(&mut self) {
        if self.frame_loop.resume() {
            self.request();
        }
    }
}

#[derive(Default)]
struct Calls {
    resizes: Vec<(f32, f32)>,
    suspends: usize,
    resumes: usize,
}

impl AnimationHooks for Calls {
    fn resize(&mut self, width: f32, height: f32) {
        self.resizes.push((width, height));
    }
    fn suspend(&mut self) {
        self.suspends += 1;
    }
    fn resume(&mut self) {
        self.resumes += 1;
    }
}

#[test]
fn frame_loop_tracks_the_pending_request() {
    let mut fl = FrameLoop::new();
    assert_eq!(fl.pending(), None);
    fl.scheduled(7);
    assert_eq!(fl.pending(), Some(7));
    assert!(fl.on_frame());
    assert_eq!(fl.pending(), None);
}

#[test]
fn suspend_hands_back_the_handle_to_cancel() {
    let mut fl = FrameLoop::new();
    fl.scheduled(3);
    assert_eq!(fl.suspend(), Some(3));
    assert!(fl.is_suspended());
    assert_eq!(fl.suspend(), None);
    // A callback that slipped through before cancellation must not reschedule.
    assert!(!fl.on_frame());
}

#[test]
fn resume_never_starts_a_second_chain() {
    let mut fl = FrameLoop::new();
    fl.scheduled(1);
    assert!(!fl.resume(), "a frame is already pending");

    fl.suspend();
    assert!(fl.resume());
    fl.scheduled(2);
    assert!(!fl.resume());
    assert!(!fl.is_suspended());
}

#[test]
fn debouncer_only_honours_the_latest_trigger() {
    let mut d = Debouncer::new();
    let first = d.trigger();
    let second = d.trigger();
    assert!(!d.is_current(first));
    assert!(d.is_current(second));
}

#[test]
fn immediate_policy_applies_resize_at_once() {
    let mut coord = Coordinator::for_config(&ParticleConfig::hero());
    let mut hooks = Calls::default();
    assert_eq!(coord.viewport_resized(&mut hooks, 640.0, 480.0), ResizeAction::Applied);
    assert_eq!(hooks.resizes, vec![(640.0, 480.0)]);
}

#[test]
fn debounced_policy_applies_only_the_last_resize() {
    let mut coord = Coordinator::for_config(&ParticleConfig::ambient());
    let mut hooks = Calls::default();
    let tokens: Vec<u64> = (0..3)
        .map(|i| match coord.viewport_resized(&mut hooks, 100.0 + i as f32, 100.0) {
            ResizeAction::Deferred { token, delay_ms } => {
                assert_eq!(delay_ms, 250);
                token
            }
            ResizeAction::Applied => panic!("ambient resize must be debounced"),
        })
        .collect();
    assert!(hooks.resizes.is_empty());

    assert!(!coord.apply_deferred_resize(&mut hooks, tokens[0], 1.0, 1.0));
    assert!(!coord.apply_deferred_resize(&mut hooks, tokens[1], 2.0, 2.0));
    assert!(coord.apply_deferred_resize(&mut hooks, tokens[2], 1024.0, 768.0));
    assert_eq!(hooks.resizes, vec![(1024.0, 768.0)]);
}

#[test]
fn visibility_is_ignored_when_pausing_is_off() {
    let coord = Coordinator::new(false, None);
    let mut hooks = Calls::default();
    coord.visibility_changed(&mut hooks, true);
    coord.visibility_changed(&mut hooks, false);
    assert_eq!((hooks.suspends, hooks.resumes), (0, 0));
}

#[test]
fn hidden_page_cancels_and_visible_page_resumes_one_chain() {
    let coord = Coordinator::for_config(&ParticleConfig::ambient());
    let mut sim = SimLoop::new(ParticleConfig::ambient());
    sim.request();
    assert!(sim.fire());
    assert!(sim.fire());
    let pending = sim.frame_loop.pending();

    coord.visibility_changed(&mut sim, true);
    assert_eq!(sim.cancelled, vec![pending.unwrap()]);
    assert!(!sim.fire());
    let requests_while_hidden = sim.requests;

    coord.visibility_changed(&mut sim, false);
    coord.visibility_changed(&mut sim, false);
    assert_eq!(sim.requests, requests_while_hidden + 1);
    assert!(sim.fire());
    assert_eq!(sim.surface.clears, 3);
}

#[test]
fn resize_through_hooks_keeps_the_particle_pool() {
    let mut coord = Coordinator::for_config(&ParticleConfig::hero());
    let mut sim = SimLoop::new(ParticleConfig::hero());
    let before = sim.scene.field.len();
    coord.viewport_resized(&mut sim, 320.0, 240.0);
    assert_eq!(sim.scene.field.size(), (320.0, 240.0));
    assert_eq!(sim.scene.field.len(), before);
}

#[test]
fn ambient_scene_has_no_decorations() {
    let mut sim = SimLoop::new(ParticleConfig::ambient());
    assert!(sim.scene.decorations.is_none());
    sim.request();
    sim.fire();
    assert_eq!(sim.surface.polygons, 0);
    assert!(sim.surface.texts.is_empty());
    assert_eq!(sim.surface.circles, sim.scene.field.len());
}

#[test]
fn hero_frame_draws_grid_particles_and_snippets() {
    let mut sim = SimLoop::new(ParticleConfig::hero());
    let cells = sim.scene.decorations.as_ref().unwrap().grid.cells.len();
    sim.request();
    sim.fire();
    assert_eq!(sim.surface.clears, 1);
    assert_eq!(sim.surface.polygons, cells);
    assert_eq!(sim.surface.circles, sim.scene.field.len());
    assert_eq!(sim.surface.texts.len(), constants::CODE_SNIPPET_COUNT);
    assert!(sim.surface.texts.iter().all(|t| CODE_SNIPPETS.contains(&t.as_str())));
}

#[test]
fn hex_grid_offsets_odd_columns_by_half_a_row() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = HexGrid::new(120.0, 100.0, 40.0, &mut rng);
    assert_eq!(grid.cells.len(), 4);
    let row_step = 40.0 * 3f32.sqrt();
    assert_eq!(grid.cells[0].center, Vec2::new(0.0, 0.0));
    assert_eq!(grid.cells[1].center, Vec2::new(60.0, row_step * 0.5));
    for cell in &grid.cells {
        assert!(cell.opacity >= 0.05 && cell.opacity <= 0.15);
        for corner in grid.outline(cell) {
            assert!((corner.distance(cell.center) - 40.0).abs() < 1e-3);
        }
    }
}

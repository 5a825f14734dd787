use crate::core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

/// Tuning for one particle background.
///
/// The ambient (full page) and hero backgrounds run the same engine with
/// different presets; both are valid design points.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Hard cap on the pool size.
    pub max_particles: usize,
    /// Canvas area (px²) per particle before the cap applies.
    pub density_divisor: f64,
    /// Velocity components are drawn from `[-spread/2, spread/2)` px/frame.
    pub speed_spread: f32,
    pub radius_range: [f32; 2],
    pub opacity_range: [f32; 2],
    /// Pairs closer than this are joined by a line.
    pub link_distance: f32,
    pub max_link_opacity: f32,
    pub link_width: f32,
    pub color: [u8; 3],
    /// `None` applies viewport resizes immediately.
    pub resize_debounce_ms: Option<u32>,
    pub pause_when_hidden: bool,
    /// Hex grid and drifting code snippets under the particles.
    pub decorations: bool,
}

impl ParticleConfig {
    /// Dim full-page background.
    pub fn ambient() -> Self {
        Self {
            max_particles: 50,
            density_divisor: 20_000.0,
            speed_spread: 0.3,
            radius_range: [0.5, 2.0],
            opacity_range: [0.1, 0.4],
            link_distance: 150.0,
            max_link_opacity: 0.2,
            link_width: 1.0,
            color: [0, 255, 65],
            resize_debounce_ms: Some(250),
            pause_when_hidden: true,
            decorations: false,
        }
    }

    /// Denser background behind the hero section.
    pub fn hero() -> Self {
        Self {
            max_particles: 100,
            density_divisor: 10_000.0,
            speed_spread: 0.5,
            radius_range: [1.0, 3.0],
            opacity_range: [0.2, 0.7],
            link_distance: 100.0,
            max_link_opacity: 0.3,
            link_width: 1.0,
            color: [0, 255, 65],
            resize_debounce_ms: None,
            pause_when_hidden: false,
            decorations: true,
        }
    }

    /// Largest per-axis speed a particle can be created with.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.speed_spread * 0.5
    }

    /// `min(max_particles, floor(area / density_divisor))`.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        if self.density_divisor <= 0.0 || width <= 0.0 || height <= 0.0 {
            return 0;
        }
        let by_area = (width as f64 * height as f64 / self.density_divisor).floor() as usize;
        by_area.min(self.max_particles)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, cfg: &ParticleConfig) -> Self {
        let max_speed = cfg.max_speed();
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * max_speed,
                (rng.gen::<f32>() * 2.0 - 1.0) * max_speed,
            ),
            radius: lerp_range(cfg.radius_range, rng.gen()),
            opacity: lerp_range(cfg.opacity_range, rng.gen()),
        }
    }

    /// Advance one frame and reflect off the `[0, width] x [0, height]` box.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        self.velocity.x = reflect(self.position.x, self.velocity.x, width);
        self.velocity.y = reflect(self.position.y, self.velocity.y, height);
    }
}

// Negates the component once the edge is crossed. Position is never clamped,
// so the particle is drawn one frame past the edge before coming back. Only
// outward motion is flipped so a particle left outside by a shrinking resize
// walks back in instead of oscillating in place.
#[inline]
fn reflect(pos: f32, vel: f32, extent: f32) -> f32 {
    if (pos <= 0.0 && vel < 0.0) || (pos >= extent && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

#[inline]
fn lerp_range(range: [f32; 2], t: f32) -> f32 {
    range[0] + (range[1] - range[0]) * t
}

/// Line opacity for two particles `distance` apart; zero at or beyond the threshold.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32, max_opacity: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (threshold - distance) / threshold * max_opacity
}

/// Derived edge between two nearby particles, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// The particle pool plus the surface dimensions it bounces within.
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let count = config.particle_count(width, height);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height, &config))
            .collect();
        Self {
            config,
            particles,
            width,
            height,
        }
    }

    /// Field with a caller-provided pool.
    #[allow(dead_code)] // host tests
    pub fn from_particles(config: ParticleConfig, width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            config,
            particles,
            width,
            height,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[allow(dead_code)] // host tests
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Record new surface bounds. The pool and current positions are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// All-pairs proximity search; O(n²) over a capped pool.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let n = self.particles.len();
        let threshold = self.config.link_distance;
        let max_opacity = self.config.max_link_opacity;
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter_map(move |(i, j)| {
                let pa = self.particles[i].position;
                let pb = self.particles[j].position;
                let distance = pa.distance(pb);
                if distance < threshold {
                    Some(Connection {
                        a: i,
                        b: j,
                        from: pa,
                        to: pb,
                        opacity: link_opacity(distance, threshold, max_opacity),
                    })
                } else {
                    None
                }
            })
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, Rgba::new(self.config.color, p.opacity));
        }
        for c in self.connections() {
            surface.stroke_line(
                c.from,
                c.to,
                self.config.link_width,
                Rgba::new(self.config.color, c.opacity),
            );
        }
    }
}

use crate::core::decor::Decorations;
use crate::core::particles::{ParticleConfig, ParticleField};
use crate::core::surface::Surface;
use rand::Rng;

/// Everything one background canvas draws each frame.
pub struct BackgroundScene {
    pub field: ParticleField,
    pub decorations: Option<Decorations>,
}

impl BackgroundScene {
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let decorations = config
            .decorations
            .then(|| Decorations::new(width, height, rng));
        let field = ParticleField::new(config, width, height, rng);
        Self { field, decorations }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    /// Clear, advance and redraw. Decorations sit under the particles except
    /// the code snippets, which are drawn last.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (w, h) = self.field.size();
        surface.clear(w, h);
        if let Some(d) = &self.decorations {
            d.draw_grid(surface);
        }
        self.field.step();
        self.field.draw(surface);
        if let Some(d) = &mut self.decorations {
            d.step(w, h);
            d.draw_snippets(surface);
        }
    }
}

/// Host handle returned by the frame scheduler (`requestAnimationFrame` id).
pub type FrameHandle = i32;

/// Bookkeeping for a self-rescheduling animation-frame loop.
///
/// The loop never owns a timer; it only remembers whether a frame request is
/// outstanding so that suspending can cancel it and resuming never starts a
/// second chain.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    suspended: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    #[allow(dead_code)] // host tests
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Record the handle of a just-issued frame request.
    pub fn scheduled(&mut self, handle: FrameHandle) {
        self.pending = Some(handle);
    }

    /// Called at the top of the frame callback. Returns whether to render and
    /// schedule the next frame.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        !self.suspended
    }

    /// Stop the loop; the returned handle, if any, must be cancelled.
    pub fn suspend(&mut self) -> Option<FrameHandle> {
        self.suspended = true;
        self.pending.take()
    }

    /// Restart the loop; true when the caller must request a frame.
    pub fn resume(&mut self) -> bool {
        self.suspended = false;
        self.pending.is_none()
    }
}

/// Trailing-edge debounce by generation: each `trigger` supersedes the
/// previous one, and only the latest token passes `is_current`.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}

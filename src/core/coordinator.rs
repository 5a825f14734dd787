use crate::core::animation::Debouncer;
use crate::core::particles::ParticleConfig;

/// Hooks a background renderer exposes to host events.
pub trait AnimationHooks {
    fn resize(&mut self, width: f32, height: f32);
    fn suspend(&mut self);
    fn resume(&mut self);
}

/// What the host must do after a viewport resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeAction {
    Applied,
    /// Call `apply_deferred_resize` with `token` after `delay_ms`.
    Deferred { token: u64, delay_ms: u32 },
}

/// Routes viewport-resize and page-visibility signals to a renderer
/// according to its configured policy.
#[derive(Debug)]
pub struct Coordinator {
    pause_when_hidden: bool,
    resize_debounce_ms: Option<u32>,
    debouncer: Debouncer,
}

impl Coordinator {
    pub fn new(pause_when_hidden: bool, resize_debounce_ms: Option<u32>) -> Self {
        Self {
            pause_when_hidden,
            resize_debounce_ms,
            debouncer: Debouncer::new(),
        }
    }

    pub fn for_config(config: &ParticleConfig) -> Self {
        Self::new(config.pause_when_hidden, config.resize_debounce_ms)
    }

    pub fn visibility_changed<H: AnimationHooks + ?Sized>(&self, hooks: &mut H, hidden: bool) {
        if !self.pause_when_hidden {
            return;
        }
        if hidden {
            hooks.suspend();
        } else {
            hooks.resume();
        }
    }

    pub fn viewport_resized<H: AnimationHooks + ?Sized>(
        &mut self,
        hooks: &mut H,
        width: f32,
        height: f32,
    ) -> ResizeAction {
        match self.resize_debounce_ms {
            Some(delay_ms) => ResizeAction::Deferred {
                token: self.debouncer.trigger(),
                delay_ms,
            },
            None => {
                hooks.resize(width, height);
                ResizeAction::Applied
            }
        }
    }

    /// Apply a debounced resize if no newer resize superseded it. The size is
    /// read when the timer fires, not when the event arrived.
    pub fn apply_deferred_resize<H: AnimationHooks + ?Sized>(
        &self,
        hooks: &mut H,
        token: u64,
        width: f32,
        height: f32,
    ) -> bool {
        if self.debouncer.is_current(token) {
            hooks.resize(width, height);
            true
        } else {
            false
        }
    }
}

pub mod animation;
pub mod coordinator;
pub mod cooldown;
pub mod counter;
pub mod decor;
pub mod konami;
pub mod notify;
pub mod particles;
pub mod profile;
pub mod relay;
pub mod site;
pub mod surface;
pub mod terminal;
pub mod typing;
pub mod validation;

pub use animation::{BackgroundScene, FrameLoop};
pub use coordinator::{AnimationHooks, Coordinator, ResizeAction};
pub use particles::ParticleConfig;
pub use surface::{Rgba, Surface};

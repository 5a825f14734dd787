use crate::canvas::Canvas2d;
use crate::core::{AnimationHooks, BackgroundScene, Coordinator, FrameLoop, ParticleConfig};
use crate::dom;
use crate::events;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const AMBIENT_CANVAS_ID: &str = "global-bg";
const AMBIENT_CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     z-index: -3; opacity: 0.1; pointer-events: none;";

pub struct FrameContext {
    pub scene: BackgroundScene,
    pub surface: Canvas2d,
    pub frame_loop: FrameLoop,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.scene.render_frame(&mut self.surface);
    }
}

/// A running background: shared frame state plus the self-rescheduling
/// animation-frame closure.
#[derive(Clone)]
pub struct BackgroundLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    label: &'static str,
}

impl BackgroundLoop {
    pub fn new(label: &'static str, ctx: FrameContext) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            label,
        }
    }

    pub fn start(&self) {
        let this = self.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !this.ctx.borrow_mut().frame_loop.on_frame() {
                return;
            }
            this.ctx.borrow_mut().frame();
            this.request_frame();
        }) as Box<dyn FnMut()>));
        self.request_frame();
    }

    fn request_frame(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.ctx.borrow_mut().frame_loop.scheduled(handle),
            Err(e) => log::error!("[{}] requestAnimationFrame failed: {:?}", self.label, e),
        }
    }
}

impl AnimationHooks for BackgroundLoop {
    fn resize(&mut self, width: f32, height: f32) {
        let mut ctx = self.ctx.borrow_mut();
        ctx.surface.set_size(width, height);
        ctx.scene.resize(width, height);
        log::debug!("[{}] resized to {}x{}", self.label, width, height);
    }

    fn suspend(&mut self) {
        if self.ctx.borrow().frame_loop.is_suspended() {
            return;
        }
        let pending = self.ctx.borrow_mut().frame_loop.suspend();
        if let (Some(handle), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        log::debug!("[{}] suspended", self.label);
    }

    fn resume(&mut self) {
        let must_schedule = self.ctx.borrow_mut().frame_loop.resume();
        if must_schedule {
            self.request_frame();
        }
        log::debug!("[{}] resumed", self.label);
    }
}

/// Size `canvas` to the viewport, seed its scene and start the frame loop.
pub fn mount_background(
    label: &'static str,
    canvas: web::HtmlCanvasElement,
    config: ParticleConfig,
) -> anyhow::Result<BackgroundLoop> {
    let surface = Canvas2d::acquire(canvas)?;
    let (width, height) = dom::viewport_size();
    surface.set_size(width, height);

    let mut rng = StdRng::from_entropy();
    let scene = BackgroundScene::new(config, width, height, &mut rng);
    let coordinator = Coordinator::for_config(scene.field.config());
    if scene.field.is_empty() {
        log::warn!("[{}] viewport {}x{} too small for any particle", label, width, height);
    }
    log::info!(
        "[{}] {} particles on {}x{}",
        label,
        scene.field.len(),
        width,
        height
    );

    let background = BackgroundLoop::new(
        label,
        FrameContext {
            scene,
            surface,
            frame_loop: FrameLoop::new(),
        },
    );
    events::viewport::wire(background.clone(), coordinator);
    background.start();
    Ok(background)
}

/// Full-page dim background on a canvas appended to `<body>`.
pub fn mount_ambient(document: &web::Document) -> anyhow::Result<BackgroundLoop> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(AMBIENT_CANVAS_ID);
    _ = canvas.set_attribute("style", AMBIENT_CANVAS_STYLE);
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    mount_background("ambient", canvas, ParticleConfig::ambient())
}

/// Denser background on the hero section's `#cyberpunk-bg` canvas.
pub fn mount_hero(document: &web::Document) -> anyhow::Result<BackgroundLoop> {
    let canvas: web::HtmlCanvasElement = dom::require(document, "cyberpunk-bg")?;
    mount_background("hero", canvas, ParticleConfig::hero())
}

#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
/// Cooldown window, form limits and the timings of every page effect.
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod mailer;
mod notify;
mod widgets;

/// Start one component; a failure is logged and leaves the rest of the page running.
fn mount<T>(name: &str, init: impl FnOnce() -> anyhow::Result<T>) -> Option<T> {
    match init() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] not started: {:?}", name, e);
            None
        }
    }
}

fn mount_all(document: &web::Document) {
    mount("ambient", || frame::mount_ambient(document));
    mount("hero", || frame::mount_hero(document));
    mount("typing", || widgets::typing::init(document));
    mount("reveal", || widgets::reveal::init(document));
    let nav = mount("nav", || widgets::nav::init(document));
    mount("contact", || widgets::contact::init(document));
    mount("projects", || widgets::projects::init(document));
    mount("terminal", || widgets::terminal::init(document));
    events::keyboard::wire_global_keydown(document, nav);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if !crate::core::site::dom_parsed(&document.ready_state()) {
        let doc = document.clone();
        let mut started = false;
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            if !std::mem::replace(&mut started, true) {
                mount_all(&doc);
            }
        });
    } else {
        mount_all(&document);
    }
    Ok(())
}

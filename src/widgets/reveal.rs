use crate::constants::COUNTER_TICK_MS;
use crate::core::counter::Counter;
use crate::core::site::{page_loaded, parallax_translate};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SELECTOR: &str =
    ".skill-card, .project-card, .certification-card, .badge-card, .stat-card, .connect-category";

/// Observe `elements` and call `on_visible` as each one intersects the
/// viewport. With `once`, an element is unobserved after its first hit.
fn observe(
    elements: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    once: bool,
    on_visible: impl Fn(&web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

fn run_counter(el: web::Element, mut counter: Counter) {
    let Some(value) = counter.tick() else {
        return;
    };
    el.set_text_content(Some(&format!("{}", value)));
    dom::set_timeout(COUNTER_TICK_MS, move || run_counter(el, counter));
}

fn start_counter(el: &web::Element) {
    let Some(target) = el
        .get_attribute("data-target")
        .and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
    else {
        log::warn!("[reveal] stat counter without numeric data-target");
        return;
    };
    let start = el
        .text_content()
        .and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
        .unwrap_or(0.0);
    run_counter(el.clone(), Counter::new(start, target));
}

fn load_lazy_image(img: &web::Element) {
    if let Some(src) = img.get_attribute("data-src") {
        _ = img.set_attribute("src", &src);
        _ = img.class_list().remove_1("lazy");
    }
}

fn wire_parallax(document: &web::Document) {
    let layers = dom::query_all(document, ".matrix-bg");
    if layers.is_empty() {
        return;
    }
    dom::listen_window("scroll", move |_: web::Event| {
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let transform = parallax_translate(scroll_y);
        for layer in &layers {
            dom::set_style(layer, "transform", &transform);
        }
    });
}

fn mark_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("loaded");
    }
}

// The module may start after `load` has fired.
fn wire_loaded(document: &web::Document) {
    if page_loaded(&document.ready_state()) {
        mark_loaded(document);
        return;
    }
    let doc = document.clone();
    dom::listen_window("load", move |_: web::Event| mark_loaded(&doc));
}

/// Scroll-triggered reveals, stat counters, lazy images, parallax and the
/// body load flag.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, REVEAL_SELECTOR);
    observe(&cards, 0.1, Some("0px 0px -50px 0px"), false, |el| {
        _ = el.class_list().add_1("fade-in-up");
    })?;

    let counters = dom::query_all(document, ".stat-number");
    observe(&counters, 0.5, None, true, start_counter)?;

    let images = dom::query_all(document, "img[data-src]");
    observe(&images, 0.0, None, true, load_lazy_image)?;

    wire_parallax(document);
    wire_loaded(document);
    log::info!(
        "[reveal] {} cards, {} counters, {} lazy images",
        cards.len(),
        counters.len(),
        images.len()
    );
    Ok(())
}

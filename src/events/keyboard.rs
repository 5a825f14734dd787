use crate::constants::{KONAMI_HIGHLIGHT_MS, MATRIX_RAIN_IDLE_OPACITY, MATRIX_RAIN_LIT_OPACITY};
use crate::core::konami::KonamiDetector;
use crate::dom;
use crate::widgets::nav::NavMenu;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    konami: &mut KonamiDetector,
    nav: Option<&NavMenu>,
    document: &web::Document,
) {
    let key = ev.key();
    if key == "Escape" {
        if let Some(nav) = nav {
            nav.close();
        }
    }
    if konami.push(&key) {
        log::info!("[keys] konami");
        light_matrix_rain(document);
    }
}

fn light_matrix_rain(document: &web::Document) {
    let Some(rain) = dom::query::<web::Element>(document, ".matrix-rain") else {
        return;
    };
    dom::set_style(&rain, "opacity", MATRIX_RAIN_LIT_OPACITY);
    dom::set_timeout(KONAMI_HIGHLIGHT_MS, move || {
        dom::set_style(&rain, "opacity", MATRIX_RAIN_IDLE_OPACITY);
    });
}

pub fn wire_global_keydown(document: &web::Document, nav: Option<NavMenu>) {
    let mut konami = KonamiDetector::new();
    let doc = document.clone();
    dom::listen_window("keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &mut konami, nav.as_ref(), &doc);
    });
}

use crate::core::{Coordinator, ResizeAction};
use crate::dom;
use crate::frame::BackgroundLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Forward `resize` and `visibilitychange` to a background through its
/// coordinator policy.
pub fn wire(background: BackgroundLoop, coordinator: Coordinator) {
    let coordinator = Rc::new(RefCell::new(coordinator));
    wire_resize(background.clone(), coordinator.clone());
    wire_visibility(background, coordinator);
}

fn wire_resize(background: BackgroundLoop, coordinator: Rc<RefCell<Coordinator>>) {
    let mut hooks = background;
    dom::listen_window("resize", move |_: web::Event| {
        let (width, height) = dom::viewport_size();
        let action = coordinator
            .borrow_mut()
            .viewport_resized(&mut hooks, width, height);
        if let ResizeAction::Deferred { token, delay_ms } = action {
            let mut hooks = hooks.clone();
            let coordinator = coordinator.clone();
            dom::set_timeout(delay_ms, move || {
                let (width, height) = dom::viewport_size();
                coordinator
                    .borrow()
                    .apply_deferred_resize(&mut hooks, token, width, height);
            });
        }
    });
}

fn wire_visibility(background: BackgroundLoop, coordinator: Rc<RefCell<Coordinator>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let mut hooks = background;
    let doc = document.clone();
    dom::listen(&document, "visibilitychange", move |_: web::Event| {
        coordinator
            .borrow()
            .visibility_changed(&mut hooks, doc.hidden());
    });
}

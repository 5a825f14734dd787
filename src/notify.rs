use crate::constants::{NOTIFY_SLIDE_IN_DELAY_MS, NOTIFY_SLIDE_OUT_MS};
use crate::core::notify::NotificationKind;
use crate::dom;

/// Slide a transient banner in at the top right, then remove it.
pub fn show(message: &str, kind: NotificationKind) {
    match kind {
        NotificationKind::Error => log::error!("[notify] {}", message),
        NotificationKind::Warning => log::warn!("[notify] {}", message),
        _ => log::info!("[notify] {}", message),
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(&format!("notification notification-{}", kind.class_suffix()));
    el.set_text_content(Some(message));
    _ = el.set_attribute(
        "style",
        &format!(
            "position: fixed; top: 20px; right: 20px; padding: 15px 20px; border-radius: 5px; \
             color: white; font-family: 'JetBrains Mono', monospace; font-weight: 600; \
             z-index: 10000; transform: translateX(100%); transition: transform 0.3s ease; \
             background: {}; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3); max-width: 300px; \
             word-wrap: break-word;",
            kind.background()
        ),
    );
    if body.append_child(&el).is_err() {
        return;
    }

    let slide_in = el.clone();
    dom::set_timeout(NOTIFY_SLIDE_IN_DELAY_MS, move || {
        dom::set_style(&slide_in, "transform", "translateX(0)");
    });
    dom::set_timeout(kind.visible_ms(), move || {
        dom::set_style(&el, "transform", "translateX(100%)");
        dom::set_timeout(NOTIFY_SLIDE_OUT_MS, move || el.remove());
    });
}

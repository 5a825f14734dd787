use crate::constants::{NAVBAR_OFFSET_PX, PARALLAX_SPEED};

pub const FILTER_ALL: &str = "all";

/// Whether a project card stays visible under the selected filter.
#[inline]
pub fn card_matches_filter(filter: &str, card_category: Option<&str>) -> bool {
    filter == FILTER_ALL || card_category == Some(filter)
}

/// Scroll position that puts a section just under the fixed navbar.
#[inline]
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}

#[inline]
pub fn parallax_translate(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_SPEED)
}

/// `href="#about"` style in-page anchors only.
#[inline]
pub fn in_page_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// `document.readyState` once the HTML has been parsed.
#[inline]
pub fn dom_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// `document.readyState` once `load` has already fired.
#[inline]
pub fn page_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

use crate::core::site::{in_page_target, section_scroll_top};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile navigation: hamburger button plus the collapsible menu.
#[derive(Clone)]
pub struct NavMenu {
    hamburger: web::Element,
    menu: web::Element,
}

impl NavMenu {
    pub fn resolve(document: &web::Document) -> anyhow::Result<Self> {
        let hamburger = dom::query(document, ".hamburger")
            .ok_or_else(|| anyhow::anyhow!("missing .hamburger"))?;
        let menu = dom::query(document, ".nav-menu")
            .ok_or_else(|| anyhow::anyhow!("missing .nav-menu"))?;
        Ok(Self { hamburger, menu })
    }

    pub fn toggle(&self) {
        _ = self.hamburger.class_list().toggle("active");
        _ = self.menu.class_list().toggle("active");
    }

    pub fn close(&self) {
        _ = self.hamburger.class_list().remove_1("active");
        _ = self.menu.class_list().remove_1("active");
    }

    fn contains(&self, node: Option<&web::Node>) -> bool {
        self.hamburger.contains(node) || self.menu.contains(node)
    }
}

fn scroll_to_section(document: &web::Document, href: &str) {
    let Some(selector) = in_page_target(href) else {
        return;
    };
    let Some(section) = dom::query::<web::HtmlElement>(document, selector) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::ScrollToOptions::new();
    opts.set_top(section_scroll_top(section.offset_top() as f64));
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn init(document: &web::Document) -> anyhow::Result<NavMenu> {
    let nav = NavMenu::resolve(document)?;

    {
        let nav_toggle = nav.clone();
        dom::listen(&nav.hamburger, "click", move |_: web::MouseEvent| nav_toggle.toggle());
    }

    for link in dom::query_all(document, ".nav-link") {
        let nav_link = nav.clone();
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            nav_link.close();
            if in_page_target(&href).is_some() {
                ev.prevent_default();
                scroll_to_section(&doc, &href);
            }
        });
    }

    {
        let nav_outside = nav.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            if !nav_outside.contains(target.as_ref()) {
                nav_outside.close();
            }
        });
    }
    log::info!("[nav] ready");
    Ok(nav)
}

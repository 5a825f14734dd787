use crate::core::site::card_matches_filter;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

fn apply_filter(buttons: &[web::Element], cards: &[web::Element], clicked: &web::Element) {
    let Some(category) = clicked.get_attribute("data-category") else {
        return;
    };
    for b in buttons {
        _ = b.class_list().remove_1("active");
    }
    _ = clicked.class_list().add_1("active");

    for card in cards {
        let card_category = card.get_attribute("data-category");
        if card_matches_filter(&category, card_category.as_deref()) {
            dom::set_style(card, "display", "block");
            _ = card.class_list().add_1("fade-in-up");
        } else {
            dom::set_style(card, "display", "none");
        }
    }
}

/// Category filter buttons over the project cards.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let cards: Vec<web::Element> = dom::query_all(document, ".project-card");
    // Cards carry data-category too; only non-card elements act as buttons.
    let buttons: Vec<web::Element> = dom::query_all(document, "[data-category]")
        .into_iter()
        .filter(|el| !el.class_list().contains("project-card"))
        .collect();
    if buttons.is_empty() {
        anyhow::bail!("no [data-category] filter buttons");
    }
    let buttons = Rc::new(buttons);
    let cards = Rc::new(cards);
    for button in buttons.iter() {
        let all = buttons.clone();
        let cards = cards.clone();
        let clicked = button.clone();
        dom::listen(button, "click", move |_: web::MouseEvent| {
            apply_filter(&all, &cards, &clicked);
        });
    }
    log::info!("[projects] {} filters over {} cards", buttons.len(), cards.len());
    Ok(())
}

use crate::core::profile::HERO_WORDS;
use crate::core::typing::Typewriter;
use crate::dom;
use web_sys as web;

fn step(mut typewriter: Typewriter, target: web::Element) {
    let next = typewriter.tick();
    target.set_text_content(Some(&next.text));
    dom::set_timeout(next.delay_ms, move || step(typewriter, target));
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let target: web::Element = dom::require(document, "typing-animation")?;
    let typewriter = Typewriter::new(HERO_WORDS.iter().copied())
        .ok_or_else(|| anyhow::anyhow!("no hero words"))?;
    step(typewriter, target);
    log::info!("[typing] started with {} words", HERO_WORDS.len());
    Ok(())
}

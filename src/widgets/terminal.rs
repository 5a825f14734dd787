use crate::core::profile::PROFILE;
use crate::core::terminal::{Effect, Entry, Response, Terminal};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn append_entry(document: &web::Document, output: &web::HtmlElement, entry: &Entry) {
    let Ok(line) = document.create_element("div") else {
        return;
    };
    line.set_class_name("output-line");
    if let (Ok(prompt), Ok(command)) = (
        document.create_element("span"),
        document.create_element("span"),
    ) {
        prompt.set_class_name("prompt");
        prompt.set_text_content(Some("$"));
        command.set_class_name("command");
        command.set_text_content(Some(&entry.command));
        _ = line.append_child(&prompt);
        _ = line.append_child(&command);
    }
    _ = output.append_child(&line);

    if let Some(body) = &entry.body {
        if let Ok(content) = document.create_element("div") {
            content.set_class_name("output-content");
            content.set_inner_html(body);
            _ = output.append_child(&content);
        }
    }
    output.set_scroll_top(output.scroll_height());
}

fn apply(document: &web::Document, output: &web::HtmlElement, terminal: &Terminal, response: Response) {
    match response {
        Response::Appended(effect) => {
            if let Some(entry) = terminal.last() {
                append_entry(document, output, entry);
            }
            if let Some(Effect::OpenUrl { url, delay_ms }) = effect {
                dom::set_timeout(delay_ms, move || {
                    if let Some(w) = web::window() {
                        _ = w.open_with_url_and_target(url, "_blank");
                    }
                });
            }
        }
        Response::Cleared => output.set_inner_html(""),
        Response::Ignored => {}
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let output: web::HtmlElement = dom::require(document, "terminal-output")?;
    let input: web::HtmlInputElement = dom::require(document, "terminal-input")?;
    let terminal = Rc::new(RefCell::new(Terminal::new(&PROFILE)));

    {
        let doc = document.clone();
        let output = output.clone();
        let field = input.clone();
        dom::listen(&input, "keydown", move |ev: web::KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            let line = field.value();
            let response = terminal.borrow_mut().execute(&line);
            apply(&doc, &output, &terminal.borrow(), response);
            field.set_value("");
        });
    }

    let focus_target = input;
    dom::listen(&output, "click", move |_: web::MouseEvent| {
        _ = focus_target.focus();
    });
    log::info!("[terminal] ready");
    Ok(())
}

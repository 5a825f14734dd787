use crate::core::cooldown::SubmissionCooldown;
use crate::core::notify::NotificationKind;
use crate::core::relay::RelayConfig;
use crate::core::validation::{
    error_for, validate_field, CharCountLevel, ContactForm, Field, FieldError,
};
use crate::dom;
use crate::mailer;
use crate::notify;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const FORM_ID: &str = "contact-form";
const ERROR_BORDER: &str = "#ff5f56";

enum FieldInput {
    Line(web::HtmlInputElement),
    Area(web::HtmlTextAreaElement),
}

impl FieldInput {
    fn resolve(document: &web::Document, field: Field) -> anyhow::Result<Self> {
        if let Some(input) = dom::by_id::<web::HtmlInputElement>(document, field.id()) {
            return Ok(FieldInput::Line(input));
        }
        dom::require::<web::HtmlTextAreaElement>(document, field.id()).map(FieldInput::Area)
    }

    fn value(&self) -> String {
        match self {
            FieldInput::Line(i) => i.value(),
            FieldInput::Area(a) => a.value(),
        }
    }

    fn element(&self) -> &web::HtmlElement {
        match self {
            FieldInput::Line(i) => i,
            FieldInput::Area(a) => a,
        }
    }
}

/// Contact form controller. Owns the cooldown window and relay settings.
struct ContactWidget {
    form: web::HtmlFormElement,
    inputs: Vec<(Field, FieldInput)>,
    error_slots: Vec<(Field, web::Element)>,
    submit: Option<web::HtmlButtonElement>,
    char_count: Option<web::HtmlElement>,
    relay: RelayConfig,
    cooldown: SubmissionCooldown,
}

impl ContactWidget {
    fn resolve(document: &web::Document) -> anyhow::Result<Self> {
        let form: web::HtmlFormElement = dom::require(document, FORM_ID)?;
        let inputs = Field::ALL
            .iter()
            .map(|&f| FieldInput::resolve(document, f).map(|i| (f, i)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let error_slots = Field::ALL
            .iter()
            .filter_map(|&f| document.get_element_by_id(f.error_id()).map(|el| (f, el)))
            .collect();
        let relay = RelayConfig::default().with_overrides(|key| form.get_attribute(&format!("data-{}", key)));
        Ok(Self {
            submit: dom::by_id(document, "submit-btn"),
            char_count: dom::by_id(document, "char-count"),
            form,
            inputs,
            error_slots,
            relay,
            cooldown: SubmissionCooldown::default(),
        })
    }

    fn input(&self, field: Field) -> Option<&FieldInput> {
        self.inputs.iter().find(|(f, _)| *f == field).map(|(_, i)| i)
    }

    fn error_slot(&self, field: Field) -> Option<&web::Element> {
        self.error_slots.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    fn read(&self) -> ContactForm {
        let value = |f| self.input(f).map(FieldInput::value).unwrap_or_default();
        ContactForm {
            name: value(Field::Name),
            email: value(Field::Email),
            subject: value(Field::Subject),
            message: value(Field::Message),
        }
    }

    fn show_field_error(&self, err: &FieldError) {
        let field = err.field();
        if let Some(slot) = self.error_slot(field) {
            slot.set_text_content(Some(&err.to_string()));
            _ = slot.class_list().add_1("show");
        }
        if let Some(input) = self.input(field) {
            _ = input.element().style().set_property("border-color", ERROR_BORDER);
        }
    }

    fn clear_field_error(&self, field: Field) {
        if let Some(slot) = self.error_slot(field) {
            slot.set_text_content(Some(""));
            _ = slot.class_list().remove_1("show");
        }
        if let Some(input) = self.input(field) {
            _ = input.element().style().set_property("border-color", "");
        }
    }

    fn check_field(&self, field: Field) -> bool {
        let raw = self.input(field).map(FieldInput::value).unwrap_or_default();
        match validate_field(field, &raw) {
            Ok(()) => {
                self.clear_field_error(field);
                true
            }
            Err(e) => {
                self.show_field_error(&e);
                false
            }
        }
    }

    /// Validates the whole form; every field shows or clears its message.
    fn check_all(&self) -> bool {
        let errors = self.read().validate().err().unwrap_or_default();
        for field in Field::ALL {
            match error_for(&errors, field) {
                Some(e) => self.show_field_error(e),
                None => self.clear_field_error(field),
            }
        }
        errors.is_empty()
    }

    fn set_loading(&self, loading: bool) {
        if let Some(btn) = &self.submit {
            let cl = btn.class_list();
            if loading {
                _ = cl.add_1("loading");
            } else {
                _ = cl.remove_1("loading");
            }
            btn.set_disabled(loading);
        }
    }

    fn update_char_counter(&self) {
        let Some(counter) = &self.char_count else {
            return;
        };
        let len = self
            .input(Field::Message)
            .map(|i| i.value().chars().count())
            .unwrap_or(0);
        counter.set_text_content(Some(&len.to_string()));
        _ = counter
            .style()
            .set_property("color", CharCountLevel::for_len(len).color());
    }

    fn reset_char_counter(&self) {
        if let Some(counter) = &self.char_count {
            counter.set_text_content(Some("0"));
            _ = counter
                .style()
                .set_property("color", CharCountLevel::Normal.color());
        }
    }
}

fn handle_submit(widget: &Rc<RefCell<ContactWidget>>) {
    let (form, relay) = {
        let w = widget.borrow();
        if let Err(wait) = w.cooldown.check(Instant::now()) {
            notify::show(&wait.to_string(), NotificationKind::Warning);
            return;
        }
        if !w.check_all() {
            notify::show("Please fix the errors in the form", NotificationKind::Error);
            return;
        }
        w.set_loading(true);
        (w.read().trimmed(), w.relay.clone())
    };

    let widget = widget.clone();
    spawn_local(async move {
        let result = mailer::send(&relay, &form).await;
        let mut w = widget.borrow_mut();
        match result {
            Ok(()) => {
                notify::show(
                    "Message sent successfully! I'll get back to you soon.",
                    NotificationKind::Success,
                );
                w.form.reset();
                w.reset_char_counter();
                w.cooldown.record_success(Instant::now());
            }
            Err(e) => {
                log::error!("[contact] relay failed: {:?}", e);
                notify::show(&e.to_string(), NotificationKind::Error);
            }
        }
        w.set_loading(false);
    });
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let widget = ContactWidget::resolve(document)?;
    let form = widget.form.clone();
    let fields: Vec<(Field, web::HtmlElement)> = widget
        .inputs
        .iter()
        .map(|(f, i)| (*f, i.element().clone()))
        .collect();
    let widget = Rc::new(RefCell::new(widget));

    for (field, el) in fields {
        let on_blur = widget.clone();
        dom::listen(&el, "blur", move |_: web::Event| {
            on_blur.borrow().check_field(field);
        });
        let on_input = widget.clone();
        dom::listen(&el, "input", move |_: web::Event| {
            let w = on_input.borrow();
            w.clear_field_error(field);
            if field == Field::Message {
                w.update_char_counter();
            }
        });
    }

    let on_submit = widget;
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        handle_submit(&on_submit);
    });
    log::info!("[contact] form ready");
    Ok(())
}

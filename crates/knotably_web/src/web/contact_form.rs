use std::rc::Rc;

use knotably::contact::{
    DATE_FIELD_ID, EMAIL_FIELD_ID, FORM_ID, MESSAGE_FIELD_ID, NAME_FIELD_ID, PHONE_FIELD_ID,
};
use knotably::{submit, ContactSubmission, RawContactFields};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use super::{console, dom, PageNotifier};

pub(super) fn init_contact_form(
    document: &Document,
    notifier: Rc<PageNotifier>,
) -> Result<(), String> {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| format!("#{FORM_ID} is not a <form>"))?;

    let document = document.clone();
    let target = form.clone();
    dom::listen(&target, "submit", move |ev| {
        ev.prevent_default();

        let outcome = submit(read_fields(&document));
        notifier.notify(outcome.kind, &outcome.message);

        if outcome.reset {
            form.reset();
        }
        if let Some(record) = &outcome.record {
            log_submission(record);
        }
    })
}

fn read_fields(document: &Document) -> RawContactFields {
    RawContactFields {
        name: field_value(document, NAME_FIELD_ID),
        email: field_value(document, EMAIL_FIELD_ID),
        phone: field_value(document, PHONE_FIELD_ID),
        date: field_value(document, DATE_FIELD_ID),
        message: field_value(document, MESSAGE_FIELD_ID),
    }
}

/// Missing or unsupported controls read as empty.
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

// Sending the record anywhere is up to the page owner; it is only logged here.
fn log_submission(submission: &ContactSubmission) {
    match serde_json::to_string(submission) {
        Ok(json) => console::info(&format!("Form submitted with data: {json}")),
        Err(e) => console::warn(&format!("contact: serialize error: {e}")),
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, SvgElement, Window,
};

pub(super) fn window() -> Result<Window, String> {
    web_sys::window().ok_or("no window".to_string())
}

pub(super) fn document() -> Result<Document, String> {
    window()?.document().ok_or("no document".to_string())
}

pub(super) fn ready_state(document: &Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
}

pub(super) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| format!("document: invalid selector {selector}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Register a page-lifetime listener. The closure is leaked on purpose.
pub(super) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("{event}: add_event_listener failed"))?;
    cb.forget();
    Ok(())
}

/// Register a listener the browser drops after its first call.
pub(super) fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnOnce(Event) + 'static,
{
    let cb = Closure::once_into_js(handler);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.unchecked_ref(),
            &opts,
        )
        .map_err(|_| format!("{event}: add_event_listener failed"))
}

/// Inline style of an HTML or SVG element; other elements have none.
fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        Some(el.style())
    } else {
        el.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

pub(super) fn set_styles(el: &Element, decls: &[(&str, &str)]) -> Result<(), String> {
    let style = style_of(el).ok_or(format!("style: <{}> has no inline style", el.tag_name()))?;
    for (prop, value) in decls {
        style
            .set_property(prop, value)
            .map_err(|_| format!("style: set {prop} failed"))?;
    }
    Ok(())
}

pub(super) fn inline_style(el: &Element, prop: &str) -> Option<String> {
    style_of(el).and_then(|s| s.get_property_value(prop).ok())
}

//! Small DOM helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement};

pub(super) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(super) fn by_id_html(document: &Document, id: &str) -> Option<HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Element with an optional class and text
pub(super) fn create(
    document: &Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Option<Element> {
    let el = document.create_element(tag).ok()?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Some(el)
}

pub(super) fn set_style(el: &Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

pub(super) fn append(parent: &Element, child: &Element) {
    let _ = parent.append_child(child);
}

/// `.value` of an input, select or textarea; empty when the element is missing
pub(super) fn field_value(document: &Document, id: &str) -> String {
    by_id(document, id)
        .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Attach a listener for the page lifetime
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    capture: bool,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let result = target.add_event_listener_with_callback_and_bool(
        event,
        cb.as_ref().unchecked_ref(),
        capture,
    );
    match result {
        Ok(()) => cb.forget(),
        Err(e) => tracing::warn!(event, "Failed to attach listener: {e:?}"),
    }
}

/// Closest ancestor (or self) of the event target carrying `attr`
pub(super) fn target_with_attr(event: &web_sys::Event, attr: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{attr}]")).ok().flatten()
}

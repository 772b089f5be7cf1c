// Typed lookups over the static card markup. Every accessor is fallible:
// the mirror DOM is optional depending on the active layout breakpoint,
// so a missing element is skipped, never an error.

use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(crate) fn element(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub(crate) fn html_element(id: &str) -> Option<HtmlElement> {
    element(id)?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn input(id: &str) -> Option<HtmlInputElement> {
    element(id)?.dyn_into::<HtmlInputElement>().ok()
}

pub(crate) fn canvas(id: &str) -> Option<HtmlCanvasElement> {
    element(id)?.dyn_into::<HtmlCanvasElement>().ok()
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

pub(crate) fn element_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

pub(crate) fn field_value(id: &str) -> Option<String> {
    element_value(&element(id)?)
}

// Returns false when the id does not resolve to a form element.
pub(crate) fn set_field_value(id: &str, value: &str) -> bool {
    let Some(element) = element(id) else {
        return false;
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        return true;
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
        return true;
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
        return true;
    }
    false
}

pub(crate) fn set_text(id: &str, text: &str) {
    if let Some(element) = element(id) {
        element.set_text_content(Some(text));
    }
}

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

// External page collaborators: the icon set, and the blocking
// confirm/prompt/alert dialogs guarding destructive actions.

use wasm_bindgen::{JsCast, JsValue};

use js_sys::{Function, Reflect};

// Re-scans the document for icon placeholders and materializes them.
// Must run after any DOM mutation that introduces new placeholders.
pub(crate) fn refresh_icons() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str("lucide")) else {
        return;
    };
    if value.is_null() || value.is_undefined() {
        return;
    }
    let Ok(icons) = value.dyn_into::<js_sys::Object>() else {
        return;
    };
    let Ok(create) = Reflect::get(&icons, &JsValue::from_str("createIcons")) else {
        return;
    };
    let Ok(func) = create.dyn_into::<Function>() else {
        return;
    };
    let _ = func.call0(&icons);
}

pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn prompt(message: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
        .filter(|name| !name.trim().is_empty())
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

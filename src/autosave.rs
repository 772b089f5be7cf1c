// Unconditional whole-form auto-save. Every input anywhere in the form
// overwrites the single slot with the full id->value map of all form
// elements, a superset of the curated field registry.

use std::collections::BTreeMap;
use std::rc::Rc;

use rangecard_core::{AutoSaveSnapshot, AUTO_SAVE_VERSION};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::app_core::AppContext;
use crate::collab;
use crate::dispatcher::FieldFilter;
use crate::dom;
use crate::persisted::{self, AUTO_SAVE_KEY};

pub(crate) fn wire(ctx: &Rc<AppContext>) {
    let dispatcher = ctx.dispatcher.clone();
    let ctx = ctx.clone();
    dispatcher.subscribe(FieldFilter::Any, move |_| capture_now(&ctx));
}

pub(crate) fn capture_now(ctx: &AppContext) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("input, select, textarea") else {
        return;
    };
    let mut fields = BTreeMap::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let id = element.id();
        if id.is_empty() {
            continue;
        }
        if let Some(value) = dom::element_value(&element) {
            fields.insert(id, value);
        }
    }

    let snapshot = AutoSaveSnapshot::from_fields(fields);
    if let Err(err) = persisted::write_json(AUTO_SAVE_KEY, &snapshot) {
        gloo::console::error!("auto-save: write failed", err.clone());
        // One visible notice, then console-only; this runs on every
        // keystroke once storage is full.
        if !ctx.autosave_warned.replace(true) {
            collab::alert(&format!("Auto-save stopped working: {err}"));
        }
    }
}

// Restores the slot on startup, announcing a change per element so the
// mirrors, compass, and auto-save itself re-synchronize. Corrupt data was
// already logged by the reader; startup proceeds with an empty form.
pub(crate) fn restore(ctx: &AppContext) {
    let Some(snapshot) = persisted::read_json::<AutoSaveSnapshot>(AUTO_SAVE_KEY) else {
        return;
    };
    if snapshot.version != AUTO_SAVE_VERSION {
        gloo::console::log!(
            "auto-save: version mismatch",
            snapshot.version,
            AUTO_SAVE_VERSION
        );
        return;
    }
    for (id, value) in &snapshot.fields {
        if dom::set_field_value(id, value) {
            ctx.dispatcher.publish(id);
        }
    }
}

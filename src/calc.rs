// Arithmetic keypad wiring. Keys carry data-calc tokens; evaluation goes
// through the restricted expression parser. Failures stay inside the
// keypad display.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use rangecard_core::calc::{cos_degrees, evaluate, format_result};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

const DISPLAY_ID: &str = "calc-display";
const ERROR_TOKEN: &str = "Error";
const ERROR_RESET_MS: u32 = 1000;

pub(crate) fn wire() {
    let Some(document) = dom::document() else {
        return;
    };

    if let Ok(keys) = document.query_selector_all("[data-calc]") {
        for index in 0..keys.length() {
            let Some(node) = keys.get(index) else {
                continue;
            };
            let Ok(key) = node.dyn_into::<Element>() else {
                continue;
            };
            let Some(token) = key.get_attribute("data-calc") else {
                continue;
            };
            EventListener::new(&key, "click", move |_| {
                append(&token);
            })
            .forget();
        }
    }

    if let Some(clear_btn) = dom::element("calc-clear") {
        EventListener::new(&clear_btn, "click", move |_| {
            clear();
        })
        .forget();
    }
    if let Some(equals_btn) = dom::element("calc-equals") {
        EventListener::new(&equals_btn, "click", move |_| {
            execute();
        })
        .forget();
    }
    if let Some(cos_btn) = dom::element("calc-cos") {
        EventListener::new(&cos_btn, "click", move |_| {
            cosine();
        })
        .forget();
    }
}

fn append(token: &str) {
    let Some(display) = dom::input(DISPLAY_ID) else {
        return;
    };
    let current = display.value();
    if current == "0" && token != "." {
        display.set_value(token);
    } else {
        display.set_value(&format!("{current}{token}"));
    }
}

pub(crate) fn clear() {
    if let Some(display) = dom::input(DISPLAY_ID) {
        display.set_value("0");
    }
}

fn execute() {
    let Some(display) = dom::input(DISPLAY_ID) else {
        return;
    };
    match evaluate(&display.value()) {
        Ok(value) => display.set_value(&format_result(value)),
        Err(err) => {
            gloo::console::log!("calc: evaluation failed", err.to_string());
            show_error(&display);
        }
    }
}

// Interprets the display as degrees and shows the cosine to four
// decimals. A non-numeric display is left untouched.
fn cosine() {
    let Some(display) = dom::input(DISPLAY_ID) else {
        return;
    };
    let Ok(degrees) = display.value().trim().parse::<f64>() else {
        return;
    };
    if degrees.is_finite() {
        display.set_value(&format!("{:.4}", cos_degrees(degrees)));
    }
}

fn show_error(display: &web_sys::HtmlInputElement) {
    display.set_value(ERROR_TOKEN);
    Timeout::new(ERROR_RESET_MS, || {
        clear();
    })
    .forget();
}

// Card snapshot capture. The visible card is normalized (panel revealed,
// transform reset, scroll pinned, transitions off), handed to the
// rasterization collaborator after a settle delay, and restored on every
// exit path by a guard that undoes the whole arrangement on drop.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement};

use crate::app_core::AppContext;
use crate::collab;
use crate::dom;

// Delay before rasterizing, so pending layout and style changes settle.
const CAPTURE_SETTLE_MS: u32 = 500;

const CONTAINER_ID: &str = "card-container";
const PANEL_ID: &str = "previewPanel";
const CAPTURE_MARKER_CLASS: &str = "is-capturing";
const HIDDEN_PANEL_CLASSES: [&str; 3] = ["opacity-0", "pointer-events-none", "absolute"];

const CAPTURE_SCALE: f64 = 2.0;
const CAPTURE_BACKGROUND: &str = "#ffffff";
const CAPTURE_VIEW_WIDTH: f64 = 1000.0;
const CAPTURE_VIEW_HEIGHT: f64 = 750.0;

const TRIGGER_BUTTON_IDS: [&str; 2] = ["saveProfileBtnManual", "downloadBtn"];

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

// Scoped pre-capture arrangement. Dropping the guard restores the
// transform, scroll position, panel visibility, transitions, and the
// capture marker, whatever the capture outcome was.
struct CaptureGuard {
    container: HtmlElement,
    panel: HtmlElement,
    panel_was_hidden: bool,
    saved_transform: String,
    saved_transition: String,
    saved_scroll_y: f64,
}

impl CaptureGuard {
    fn engage() -> Option<Self> {
        let container = dom::html_element(CONTAINER_ID)?;
        let panel = dom::html_element(PANEL_ID)?;
        let window = dom::window()?;

        let panel_was_hidden = panel.class_list().contains(HIDDEN_PANEL_CLASSES[0]);
        let saved_transform = container
            .style()
            .get_property_value("transform")
            .unwrap_or_default();
        let saved_transition = panel
            .style()
            .get_property_value("transition")
            .unwrap_or_default();
        let saved_scroll_y = window.scroll_y().unwrap_or(0.0);

        if panel_was_hidden {
            for class in HIDDEN_PANEL_CLASSES {
                let _ = panel.class_list().remove_1(class);
            }
            let _ = panel.class_list().add_1("flex");
        }
        // Capture at full resolution, from the document origin.
        let _ = container.style().set_property("transform", "none");
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let _ = panel.style().set_property("transition", "none");
        if let Some(body) = dom::document().and_then(|document| document.body()) {
            let _ = body.class_list().add_1(CAPTURE_MARKER_CLASS);
        }

        Some(Self {
            container,
            panel,
            panel_was_hidden,
            saved_transform,
            saved_transition,
            saved_scroll_y,
        })
    }

    fn container_js(&self) -> JsValue {
        JsValue::from(self.container.clone())
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(body) = dom::document().and_then(|document| document.body()) {
            let _ = body.class_list().remove_1(CAPTURE_MARKER_CLASS);
        }
        restore_style(&self.panel, "transition", &self.saved_transition);
        if self.panel_was_hidden {
            for class in HIDDEN_PANEL_CLASSES {
                let _ = self.panel.class_list().add_1(class);
            }
            let _ = self.panel.class_list().remove_1("flex");
        }
        restore_style(&self.container, "transform", &self.saved_transform);
        if let Some(window) = dom::window() {
            window.scroll_to_with_x_and_y(0.0, self.saved_scroll_y);
        }
    }
}

fn restore_style(element: &HtmlElement, property: &str, saved: &str) {
    if saved.is_empty() {
        let _ = element.style().remove_property(property);
    } else {
        let _ = element.style().set_property(property, saved);
    }
}

// Rasterizes the card and hands back a PNG data URI. At most one capture
// is in flight: while one is pending the triggering controls are inert
// and further requests are dropped.
pub(crate) fn capture_card<F>(ctx: &Rc<AppContext>, on_done: F)
where
    F: FnOnce(Result<String, String>) + 'static,
{
    if ctx.capture_pending.replace(true) {
        return;
    }
    set_trigger_controls_enabled(false);

    let Some(guard) = CaptureGuard::engage() else {
        ctx.capture_pending.set(false);
        set_trigger_controls_enabled(true);
        on_done(Err("card container not found".to_string()));
        return;
    };

    let pending = ctx.capture_pending.clone();
    Timeout::new(CAPTURE_SETTLE_MS, move || {
        spawn_local(async move {
            let result = rasterize(guard.container_js()).await;
            // Visual restoration happens here on success and failure alike.
            drop(guard);
            pending.set(false);
            set_trigger_controls_enabled(true);
            on_done(result);
        });
    })
    .forget();
}

async fn rasterize(container: JsValue) -> Result<String, String> {
    let window = dom::window().ok_or_else(|| "window unavailable".to_string())?;
    let raster = Reflect::get(&window, &JsValue::from_str("html2canvas"))
        .ok()
        .filter(|value| !value.is_null() && !value.is_undefined())
        .ok_or_else(|| "rasterizer not loaded".to_string())?;
    let raster: Function = raster
        .dyn_into()
        .map_err(|_| "rasterizer not callable".to_string())?;

    let options = js_sys::Object::new();
    let set = |key: &str, value: JsValue| {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &value);
    };
    set("scale", JsValue::from_f64(CAPTURE_SCALE));
    set("backgroundColor", JsValue::from_str(CAPTURE_BACKGROUND));
    set("useCORS", JsValue::from_bool(true));
    set("scrollX", JsValue::from_f64(0.0));
    set("scrollY", JsValue::from_f64(0.0));
    set("windowWidth", JsValue::from_f64(CAPTURE_VIEW_WIDTH));
    set("windowHeight", JsValue::from_f64(CAPTURE_VIEW_HEIGHT));

    let promise: Promise = raster
        .call2(&JsValue::NULL, &container, &options)
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "rasterizer returned no promise".to_string())?;
    let canvas: HtmlCanvasElement = JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "rasterizer returned no canvas".to_string())?;
    canvas
        .to_data_url_with_type("image/png")
        .map_err(js_err)
}

fn set_trigger_controls_enabled(enabled: bool) {
    for id in TRIGGER_BUTTON_IDS {
        let Some(button) = dom::element(id) else {
            continue;
        };
        if enabled {
            let _ = button.remove_attribute("disabled");
        } else {
            let _ = button.set_attribute("disabled", "");
        }
    }
}

pub(crate) fn wire_download(ctx: &Rc<AppContext>) {
    let Some(button) = dom::element("downloadBtn") else {
        return;
    };
    let ctx = ctx.clone();
    EventListener::new(&button, "click", move |_| {
        capture_card(&ctx, |result| match result {
            Ok(data_uri) => download_png(&data_uri),
            Err(err) => {
                gloo::console::error!("download: capture failed", err);
                collab::alert("Download failed. See console.");
            }
        });
    })
    .forget();
}

// The file is named from the date field, with a fixed fallback token when
// the date is blank.
fn download_png(data_uri: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = anchor.dyn_into::<HtmlAnchorElement>() else {
        return;
    };
    let date = dom::field_value("date")
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "export".to_string());
    anchor.set_download(&format!("RangeCard-{date}.png"));
    anchor.set_href(data_uri);

    // Appended before the click for mobile/WebView compatibility.
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
}

// Freehand pencil layer. While the toggle is on, strokes drawn on either
// surface replicate in lockstep on all of them through the shared
// normalized sequence; ink rasterizes immediately and can only be wiped
// as a whole.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use rangecard_core::{NormalizedPoint, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::collab;
use crate::dom;

const STROKE_WIDTH: f64 = 1.5;
const STROKE_COLOR: &str = "#6b7280";

pub(crate) struct InkTool {
    surfaces: Vec<(HtmlCanvasElement, CanvasRenderingContext2d)>,
    drawing: Cell<bool>,
}

impl InkTool {
    pub(crate) fn bind(surface_ids: &[&str], toggle_id: &str, clear_btn_id: &str) -> Option<Rc<Self>> {
        let surfaces: Vec<(HtmlCanvasElement, CanvasRenderingContext2d)> = surface_ids
            .iter()
            .filter_map(|id| {
                let canvas = dom::canvas(id)?;
                let ctx = dom::context_2d(&canvas)?;
                Some((canvas, ctx))
            })
            .collect();
        let toggle = dom::input(toggle_id)?;
        if surfaces.is_empty() {
            return None;
        }

        let tool = Rc::new(Self {
            surfaces,
            drawing: Cell::new(false),
        });

        {
            let tool = tool.clone();
            let toggle_el = toggle.clone();
            EventListener::new(&toggle, "change", move |_| {
                tool.set_enabled(toggle_el.checked());
            })
            .forget();
        }

        let non_passive = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        for (canvas, _) in &tool.surfaces {
            for event_name in ["mousedown", "touchstart"] {
                let tool = tool.clone();
                let toggle = toggle.clone();
                EventListener::new_with_options(canvas, event_name, non_passive, move |event| {
                    tool.start(event, &toggle);
                })
                .forget();
            }
            for event_name in ["mousemove", "touchmove"] {
                let tool = tool.clone();
                EventListener::new_with_options(canvas, event_name, non_passive, move |event| {
                    tool.extend(event);
                })
                .forget();
            }
            for event_name in ["mouseup", "mouseleave", "touchend"] {
                let tool = tool.clone();
                EventListener::new(canvas, event_name, move |_| {
                    tool.stop();
                })
                .forget();
            }
        }

        if let Some(clear_btn) = dom::element(clear_btn_id) {
            let tool = tool.clone();
            EventListener::new(&clear_btn, "click", move |_| {
                if collab::confirm("Clear all drawings?") {
                    tool.erase();
                }
            })
            .forget();
        }

        Some(tool)
    }

    // Disabled surfaces must not intercept pointer events, so the
    // controls underneath stay usable.
    fn set_enabled(&self, enabled: bool) {
        for (canvas, _) in &self.surfaces {
            let _ = canvas.class_list().toggle_with_force("pointer-events-none", !enabled);
            let cursor = if enabled { "crosshair" } else { "default" };
            let _ = canvas.style().set_property("cursor", cursor);
        }
    }

    fn start(&self, event: &Event, toggle: &web_sys::HtmlInputElement) {
        if !toggle.checked() {
            return;
        }
        // Suppress scrolling only while a stroke is actually starting.
        if event.type_() == "touchstart" && event.cancelable() {
            event.prevent_default();
        }
        let Some(point) = normalized_position(event) else {
            return;
        };
        self.drawing.set(true);
        for (canvas, ctx) in &self.surfaces {
            ctx.begin_path();
            ctx.set_line_width(STROKE_WIDTH);
            ctx.set_line_cap("round");
            ctx.set_stroke_style_str(STROKE_COLOR);
            let (x, y) = point.to_pixels(surface_size(canvas));
            ctx.move_to(x, y);
        }
    }

    fn extend(&self, event: &Event) {
        if !self.drawing.get() {
            return;
        }
        if event.type_() == "touchmove" && event.cancelable() {
            event.prevent_default();
        }
        let Some(point) = normalized_position(event) else {
            return;
        };
        for (canvas, ctx) in &self.surfaces {
            let (x, y) = point.to_pixels(surface_size(canvas));
            ctx.line_to(x, y);
            ctx.stroke();
        }
    }

    fn stop(&self) {
        if !self.drawing.get() {
            return;
        }
        for (_, ctx) in &self.surfaces {
            ctx.close_path();
        }
        self.drawing.set(false);
    }

    // Wipes the raster on every surface. No vector record is retained, so
    // prior strokes are gone for good.
    pub(crate) fn erase(&self) {
        for (canvas, ctx) in &self.surfaces {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    }
}

fn surface_size(canvas: &HtmlCanvasElement) -> SurfaceSize {
    SurfaceSize::new(canvas.width() as f64, canvas.height() as f64)
}

// Position normalized against the surface actually receiving the gesture;
// the other surfaces project the same fraction onto their own pixel grid.
fn normalized_position(event: &Event) -> Option<NormalizedPoint> {
    let element = event
        .current_target()?
        .dyn_into::<Element>()
        .ok()?;
    let rect = element.get_bounding_client_rect();
    let (client_x, client_y) = if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        (touch.client_x() as f64, touch.client_y() as f64)
    } else if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
        (mouse_event.client_x() as f64, mouse_event.client_y() as f64)
    } else {
        return None;
    };
    NormalizedPoint::from_pixels(
        client_x - rect.left(),
        client_y - rect.top(),
        SurfaceSize::new(rect.width(), rect.height()),
    )
}

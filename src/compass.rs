// Compass vector overlay: up to three bearing/range pairs drawn as dashed
// vectors with an X marker and an adaptively placed range label, on both
// the desktop and mobile compass surfaces.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use rangecard_core::{bearing_endpoint, label_anchor, parse_bearing, LabelAnchor, SurfaceSize};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::app_core::AppContext;
use crate::dispatcher::FieldFilter;
use crate::dom;

pub(crate) const COMPASS_TARGETS: [(&str, &str); 3] = [
    ("shooting-angle", "compass-range"),
    ("shooting-angle-2", "compass-range-2"),
    ("shooting-angle-3", "compass-range-3"),
];

const SURFACE_IDS: [&str; 2] = ["compass-vector", "mobile-compass-vector"];
const MARKER_HALF: f64 = 8.0;
const LABEL_GAP: f64 = 12.0;
const LINE_COLOR: &str = "#000";
const LABEL_COLOR: &str = "#1e3a8a";
const LABEL_FONT: &str = "bold 12px Inter, sans-serif";

// Delay before the first draw, covering late DOM and layout settling.
const STARTUP_REDRAW_MS: u32 = 500;

pub(crate) fn wire(ctx: &AppContext) {
    let surfaces: Rc<Vec<HtmlCanvasElement>> = Rc::new(
        SURFACE_IDS
            .iter()
            .filter_map(|id| dom::canvas(id))
            .collect(),
    );
    if surfaces.is_empty() {
        return;
    }

    let watched: Vec<String> = COMPASS_TARGETS
        .iter()
        .flat_map(|(angle_id, range_id)| [angle_id.to_string(), range_id.to_string()])
        .collect();

    {
        let surfaces = surfaces.clone();
        ctx.dispatcher
            .subscribe(FieldFilter::Fields(watched.clone()), move |_| {
                redraw(&surfaces);
            });
    }

    // Typed input arrives through the document-level delegation; change
    // and blur do not, so the six fields get their own listeners that
    // funnel back into the dispatcher.
    for field_id in watched {
        let Some(field) = dom::element(&field_id) else {
            continue;
        };
        for event_name in ["change", "blur"] {
            let dispatcher = ctx.dispatcher.clone();
            let field_id = field_id.clone();
            EventListener::new(&field, event_name, move |_| {
                dispatcher.publish(&field_id);
            })
            .forget();
        }
    }

    let surfaces_for_startup = surfaces.clone();
    Timeout::new(STARTUP_REDRAW_MS, move || {
        redraw(&surfaces_for_startup);
    })
    .forget();

    redraw(&surfaces);
}

pub(crate) fn redraw(surfaces: &[HtmlCanvasElement]) {
    for canvas in surfaces {
        if let Err(err) = draw_surface(canvas) {
            gloo::console::error!("compass: redraw failed", err);
        }
    }
}

fn draw_surface(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let Some(ctx) = dom::context_2d(canvas) else {
        return Ok(());
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let size = SurfaceSize::new(width, height);
    let (center_x, center_y) = size.center();

    // Stale vectors from prior invocations must never stack up.
    ctx.clear_rect(0.0, 0.0, width, height);

    for (angle_id, range_id) in COMPASS_TARGETS {
        let Some(raw_angle) = dom::field_value(angle_id) else {
            continue;
        };
        // No partial draw for a target whose angle cannot be parsed.
        let Some(bearing) = parse_bearing(&raw_angle) else {
            continue;
        };
        let (end_x, end_y) = bearing_endpoint(bearing, size);

        let dash = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
        ctx.set_line_dash(&dash)?;
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        ctx.line_to(end_x, end_y);
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;

        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.move_to(end_x - MARKER_HALF, end_y - MARKER_HALF);
        ctx.line_to(end_x + MARKER_HALF, end_y + MARKER_HALF);
        ctx.move_to(end_x + MARKER_HALF, end_y - MARKER_HALF);
        ctx.line_to(end_x - MARKER_HALF, end_y + MARKER_HALF);
        ctx.stroke();

        let label = dom::field_value(range_id).unwrap_or_default();
        if !label.is_empty() {
            ctx.set_font(LABEL_FONT);
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_text_baseline("middle");
            match label_anchor(end_x, width) {
                LabelAnchor::LeftOfMarker => {
                    ctx.set_text_align("right");
                    ctx.fill_text(&label, end_x - LABEL_GAP, end_y)?;
                }
                LabelAnchor::RightOfMarker => {
                    ctx.set_text_align("left");
                    ctx.fill_text(&label, end_x + LABEL_GAP, end_y)?;
                }
            }
        }
    }
    Ok(())
}

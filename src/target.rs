// Target diagrams: a fixed ring-and-crosshair backdrop plus the shot
// plot, rendered onto every bound surface from one normalized model so
// the desktop and mobile canvases stay in lockstep.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use rangecard_core::{NormalizedPoint, ShotSet, SurfaceSize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::dom;

const RING_COLOR: &str = "#9ca3af";
const HASH_COLOR: &str = "#000";
const CENTER_DOT_COLOR: &str = "#22c55e";
const SHOT_COLOR: &str = "#ef4444";
const RING_SCALES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];
const HASH_RADIUS: f64 = 2.0;
const SHOT_RADIUS: f64 = 3.0;
const CENTER_DOT_RADIUS: f64 = 4.0;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiagramKind {
    Hold,
    Shot,
}

pub(crate) struct TargetDiagram {
    kind: DiagramKind,
    surfaces: Vec<HtmlCanvasElement>,
    shots: RefCell<ShotSet>,
}

impl TargetDiagram {
    // Binds one logical diagram to its desktop and mobile surfaces plus a
    // clear control. Nothing when either surface is missing.
    pub(crate) fn bind(
        kind: DiagramKind,
        desktop_id: &str,
        mobile_id: &str,
        clear_btn_id: &str,
    ) -> Option<Rc<Self>> {
        let desktop = dom::canvas(desktop_id)?;
        let mobile = dom::canvas(mobile_id)?;
        let diagram = Rc::new(Self {
            kind,
            surfaces: vec![desktop, mobile],
            shots: RefCell::new(ShotSet::new()),
        });

        for canvas in &diagram.surfaces {
            let on_click = diagram.clone();
            EventListener::new(canvas, "click", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_click.plot_from_event(event);
                }
            })
            .forget();

            // Right-click undoes the last point instead of opening the
            // browser menu.
            let on_context = diagram.clone();
            EventListener::new(canvas, "contextmenu", move |event| {
                event.prevent_default();
                on_context.undo_last();
            })
            .forget();
        }

        if let Some(clear_btn) = dom::element(clear_btn_id) {
            let on_clear = diagram.clone();
            EventListener::new(&clear_btn, "click", move |_| {
                on_clear.clear();
            })
            .forget();
        }

        diagram.redraw();
        Some(diagram)
    }

    fn plot_from_event(&self, event: &MouseEvent) {
        let Some(canvas) = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let size = SurfaceSize::new(rect.width(), rect.height());
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();
        let Some(point) = NormalizedPoint::from_pixels(x, y, size) else {
            return;
        };
        self.shots.borrow_mut().plot(point);
        self.redraw();
    }

    fn undo_last(&self) {
        self.shots.borrow_mut().undo_last();
        self.redraw();
    }

    pub(crate) fn clear(&self) {
        self.shots.borrow_mut().clear();
        self.redraw();
    }

    pub(crate) fn shot_points(&self) -> Vec<NormalizedPoint> {
        self.shots.borrow().points().to_vec()
    }

    // Replaces the plot wholesale, e.g. on profile load.
    pub(crate) fn restore(&self, points: Vec<NormalizedPoint>) {
        self.shots.borrow_mut().replace(points);
        self.redraw();
    }

    pub(crate) fn redraw(&self) {
        for canvas in &self.surfaces {
            if let Err(err) = self.draw_surface(canvas) {
                gloo::console::error!("target: redraw failed", err);
            }
        }
    }

    // Backdrop geometry is a function of this surface's own pixel size;
    // shots are projected through the shared normalized model.
    fn draw_surface(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let Some(ctx) = dom::context_2d(canvas) else {
            return Ok(());
        };
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let tau = std::f64::consts::TAU;

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_stroke_style_str(RING_COLOR);
        ctx.set_line_width(1.0);

        for scale in RING_SCALES {
            ctx.begin_path();
            ctx.arc(center_x, center_y, (width / 2.0) * scale, 0.0, tau)?;
            ctx.stroke();
        }

        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(center_x, 0.0);
        ctx.line_to(center_x, height);
        ctx.move_to(0.0, center_y);
        ctx.line_to(width, center_y);
        ctx.stroke();

        ctx.set_fill_style_str(HASH_COLOR);
        for step in 1..5 {
            let offset = (width / 2.0) * (step as f64 * 0.2);
            for (dot_x, dot_y) in [
                (center_x + offset, center_y),
                (center_x - offset, center_y),
                (center_x, center_y + offset),
                (center_x, center_y - offset),
            ] {
                ctx.begin_path();
                ctx.arc(dot_x, dot_y, HASH_RADIUS, 0.0, tau)?;
                ctx.fill();
            }
        }

        if self.kind == DiagramKind::Shot {
            ctx.set_fill_style_str(CENTER_DOT_COLOR);
            ctx.begin_path();
            ctx.arc(center_x, center_y, CENTER_DOT_RADIUS, 0.0, tau)?;
            ctx.fill();
        }

        let size = SurfaceSize::new(width, height);
        ctx.set_fill_style_str(SHOT_COLOR);
        for point in self.shots.borrow().points() {
            let (x, y) = point.to_pixels(size);
            ctx.begin_path();
            ctx.arc(x, y, SHOT_RADIUS, 0.0, tau)?;
            ctx.fill();
        }
        Ok(())
    }
}

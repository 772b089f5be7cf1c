mod app_core;
mod autosave;
mod boot;
mod calc;
mod capture;
mod collab;
mod compass;
mod dispatcher;
mod dom;
mod ink;
mod library;
mod mirror;
mod persisted;
mod profile_store;
mod table;
mod target;

use std::rc::Rc;

use gloo::events::EventListener;
use rangecard_core::is_distance_label;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::app_core::AppContext;

fn main() {
    console_error_panic_hook::set_once();
    boot::set_phase("dom", "locating card");
    let Some(document) = dom::document() else {
        boot::fail("dom", "document unavailable", "reload the page");
        return;
    };

    boot::set_phase("state", "building field registry");
    table::build_rows(&document);
    let ctx = Rc::new(AppContext::new());

    boot::set_phase("wire", "wiring sync and canvases");
    wire_input_delegation(&ctx);
    mirror::wire(&ctx);
    mirror::default_date_today(&ctx);
    compass::wire(&ctx);
    autosave::wire(&ctx);
    library::wire(&ctx);
    capture::wire_download(&ctx);
    calc::wire();
    wire_clear_form(&ctx);

    boot::set_phase("restore", "restoring auto-saved form");
    autosave::restore(&ctx);
    library::refresh_list(&ctx);

    // The generated rows and library controls may carry placeholders.
    collab::refresh_icons();
    boot::ready();
}

// One delegated listener announces every typed change; subscribers react
// through the dispatcher instead of each attaching to the DOM.
fn wire_input_delegation(ctx: &Rc<AppContext>) {
    let Some(document) = dom::document() else {
        return;
    };
    let dispatcher = ctx.dispatcher.clone();
    EventListener::new(&document, "input", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        if !matches!(element.tag_name().as_str(), "INPUT" | "SELECT" | "TEXTAREA") {
            return;
        }
        let id = element.id();
        if !id.is_empty() {
            dispatcher.publish(&id);
        }
    })
    .forget();
}

fn wire_clear_form(ctx: &Rc<AppContext>) {
    let Some(button) = dom::element("clearFormBtn") else {
        return;
    };
    let ctx = ctx.clone();
    EventListener::new(&button, "click", move |_| {
        if !collab::confirm("Clear all tactical data and start fresh? This cannot be undone.") {
            return;
        }
        clear_form(&ctx);
        collab::alert("Tactical data cleared.");
    })
    .forget();
}

// Blanks every registry field except the distance labels, re-defaults the
// date, and wipes all three annotation layers. One confirmation upstream
// covers the whole action.
fn clear_form(ctx: &Rc<AppContext>) {
    for field_id in &ctx.registry {
        if is_distance_label(field_id) {
            continue;
        }
        if dom::set_field_value(field_id, "") {
            ctx.dispatcher.publish(field_id);
        }
    }
    mirror::default_date_today(ctx);
    if let Some(hold) = ctx.hold.as_ref() {
        hold.clear();
    }
    if let Some(shot) = ctx.shot.as_ref() {
        shot.clear();
    }
    if let Some(ink) = ctx.ink.as_ref() {
        ink.erase();
    }
    calc::clear();
    // Compass surfaces follow from the published angle-field changes.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{FieldDispatcher, FieldFilter};
    use crate::persisted::{AUTO_SAVE_KEY, PROFILE_BOOK_KEY};
    use crate::target::{DiagramKind, TargetDiagram};
    use console_error_panic_hook::set_once as set_panic_hook;
    use rangecard_core::{AutoSaveSnapshot, Profile};
    use std::cell::RefCell;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        dom::document().expect("document available")
    }

    fn mount(html: &str) -> Element {
        let document = document();
        let fixture = document.create_element("div").expect("create fixture root");
        fixture.set_inner_html(html);
        document
            .body()
            .expect("body available")
            .append_child(&fixture)
            .expect("append fixture root");
        fixture
    }

    fn click_at_fraction(canvas: &HtmlCanvasElement, event_type: &str, fx: f64, fy: f64) {
        let rect = canvas.get_bounding_client_rect();
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_client_x((rect.left() + rect.width() * fx) as i32);
        init.set_client_y((rect.top() + rect.height() * fy) as i32);
        let event = MouseEvent::new_with_mouse_event_init_dict(event_type, &init)
            .expect("synthetic mouse event");
        canvas.dispatch_event(&event).expect("dispatch mouse event");
    }

    #[wasm_bindgen_test]
    fn mirrors_echo_canonical_value_exactly() {
        set_panic_hook();
        let fixture = mount(
            r#"<input id="caliber" />
               <span id="display-caliber"></span>
               <span id="mobile-display-caliber"></span>
               <input id="zero" value="100y" />
               <span id="display-zero"></span>"#,
        );
        let ctx = Rc::new(AppContext::new());
        mirror::wire(&ctx);

        // The initialization pass covers pre-filled fields.
        assert_eq!(
            dom::element("display-zero").expect("zero mirror").text_content(),
            Some("100y".to_string())
        );

        let input = dom::input("caliber").expect("caliber input");
        input.set_value("6.5 Creedmoor  ");
        ctx.dispatcher.publish("caliber");

        // Exact text echo, both mirrors, no coercion or trimming.
        assert_eq!(
            dom::element("display-caliber").expect("primary mirror").text_content(),
            Some("6.5 Creedmoor  ".to_string())
        );
        assert_eq!(
            dom::element("mobile-display-caliber").expect("mobile mirror").text_content(),
            Some("6.5 Creedmoor  ".to_string())
        );
        fixture.remove();
    }

    #[wasm_bindgen_test]
    fn shot_plot_appends_and_right_click_undoes() {
        set_panic_hook();
        let fixture = mount(
            r#"<canvas id="test-shot-a" width="400" height="400"></canvas>
               <canvas id="test-shot-b" width="200" height="140"></canvas>
               <button id="test-shot-clear"></button>"#,
        );
        let diagram =
            TargetDiagram::bind(DiagramKind::Shot, "test-shot-a", "test-shot-b", "test-shot-clear")
                .expect("both surfaces present");
        let desktop = dom::canvas("test-shot-a").expect("desktop surface");
        let mobile = dom::canvas("test-shot-b").expect("mobile surface");

        click_at_fraction(&desktop, "click", 0.25, 0.5);
        click_at_fraction(&desktop, "click", 0.5, 0.5);
        click_at_fraction(&desktop, "click", 0.75, 0.25);
        // Surfaces of one diagram feed the same set.
        click_at_fraction(&mobile, "click", 0.1, 0.9);
        assert_eq!(diagram.shot_points().len(), 4);

        click_at_fraction(&mobile, "contextmenu", 0.5, 0.5);
        let points = diagram.shot_points();
        assert_eq!(points.len(), 3);
        // Earlier points keep their order and position.
        assert!((points[0].nx - 0.25).abs() < 0.01);
        assert!((points[0].ny - 0.5).abs() < 0.01);
        assert!((points[2].nx - 0.75).abs() < 0.01);

        dom::html_element("test-shot-clear").expect("clear button").click();
        assert!(diagram.shot_points().is_empty());
        // Undo on an empty set stays a no-op.
        click_at_fraction(&desktop, "contextmenu", 0.5, 0.5);
        assert!(diagram.shot_points().is_empty());
        fixture.remove();
    }

    #[wasm_bindgen_test]
    fn profile_store_round_trips_and_lists_reverse_lexicographically() {
        set_panic_hook();
        persisted::remove(PROFILE_BOOK_KEY);
        assert!(profile_store::profile_names().is_empty());

        let mut alpha = Profile::default();
        alpha.fields.insert("caliber".to_string(), "6.5 CM".to_string());
        profile_store::save_profile("Alpha", alpha).expect("save Alpha");
        profile_store::save_profile("Bravo", Profile::default()).expect("save Bravo");

        assert_eq!(
            profile_store::profile_names(),
            vec!["Bravo".to_string(), "Alpha".to_string()]
        );
        let loaded = profile_store::load_profile("Alpha").expect("Alpha exists");
        assert_eq!(loaded.field("caliber"), "6.5 CM");

        profile_store::delete_profile("Alpha").expect("delete Alpha");
        assert_eq!(profile_store::profile_names(), vec!["Bravo".to_string()]);
        profile_store::delete_profile("Alpha").expect("absent delete is a no-op");

        persisted::remove(PROFILE_BOOK_KEY);
    }

    #[wasm_bindgen_test]
    fn autosave_captures_same_tick_and_restores_verbatim() {
        set_panic_hook();
        persisted::remove(AUTO_SAVE_KEY);
        // Neither id is in the curated registry; auto-save covers the
        // superset of all form elements.
        let fixture = mount(
            r#"<input id="autosave-probe" />
               <textarea id="autosave-notes"></textarea>"#,
        );
        let ctx = Rc::new(AppContext::new());
        autosave::wire(&ctx);

        dom::set_field_value("autosave-probe", "2700 fps");
        dom::set_field_value("autosave-notes", "wind left to right");
        ctx.dispatcher.publish("autosave-probe");

        let stored = persisted::read_json::<AutoSaveSnapshot>(AUTO_SAVE_KEY)
            .expect("slot written within the publishing tick");
        assert_eq!(
            stored.fields.get("autosave-probe").map(String::as_str),
            Some("2700 fps")
        );
        assert_eq!(
            stored.fields.get("autosave-notes").map(String::as_str),
            Some("wind left to right")
        );

        dom::set_field_value("autosave-probe", "overwritten");
        autosave::restore(&ctx);
        assert_eq!(
            dom::field_value("autosave-probe").as_deref(),
            Some("2700 fps")
        );
        fixture.remove();
        persisted::remove(AUTO_SAVE_KEY);
    }

    #[wasm_bindgen_test]
    fn dispatcher_runs_matching_subscribers_in_registration_order() {
        set_panic_hook();
        let dispatcher = FieldDispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_any = seen.clone();
        dispatcher.subscribe(FieldFilter::Any, move |field_id| {
            seen_any.borrow_mut().push(format!("any:{field_id}"));
        });
        let seen_date = seen.clone();
        dispatcher.subscribe(FieldFilter::Fields(vec!["date".to_string()]), move |_| {
            seen_date.borrow_mut().push("date".to_string());
        });
        let seen_other = seen.clone();
        dispatcher.subscribe(FieldFilter::Fields(vec!["zero".to_string()]), move |_| {
            seen_other.borrow_mut().push("zero".to_string());
        });
        assert_eq!(dispatcher.subscriber_count(), 3);

        dispatcher.publish("date");
        assert_eq!(
            *seen.borrow(),
            vec!["any:date".to_string(), "date".to_string()]
        );
    }

    #[wasm_bindgen_test]
    fn compass_redraw_skips_unparsable_angles_without_throwing() {
        set_panic_hook();
        let fixture = mount(
            r#"<input id="shooting-angle" value="abc" />
               <input id="compass-range" value="300m" />
               <input id="shooting-angle-2" value="bearing 135 magnetic" />
               <input id="compass-range-2" value="450m" />
               <canvas id="test-compass" width="300" height="300"></canvas>"#,
        );
        let canvas = dom::canvas("test-compass").expect("compass surface");
        // Target one is skipped entirely, target two draws; neither throws.
        compass::redraw(&[canvas]);
        fixture.remove();
    }
}

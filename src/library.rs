// Profile library: the modal listing saved records, the preview panel,
// and the save/load/delete flows that tie the profile store to the form.

use std::rc::Rc;

use gloo::events::EventListener;
use rangecard_core::Profile;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::app_core::AppContext;
use crate::capture;
use crate::collab;
use crate::dom;
use crate::profile_store;

// Preview cells fed straight from stored field values.
const PREVIEW_FIELDS: [(&str, &str); 16] = [
    ("prevVel", "velocity"),
    ("prevZero", "zero"),
    ("prevBarrel", "barrel"),
    ("prevPowder", "powder"),
    ("prevLoad", "load"),
    ("prevCOL", "col"),
    ("prevRings", "rings"),
    ("prevG1", "g1"),
    ("prevHeaderNotes", "header-notes"),
    ("prevShooter", "shooter-name"),
    ("prevTime", "time"),
    ("prevElev", "elevation"),
    ("prevHold", "hold-data"),
    ("prevFinal", "final-dope"),
    ("prevWeather", "weather"),
    ("prevRifleNotes", "rifle-notes"),
];

const PREVIEW_DISTANCES: [u32; 5] = [100, 200, 300, 400, 500];

pub(crate) fn wire(ctx: &Rc<AppContext>) {
    if let Some(open_btn) = dom::element("openLibraryBtn") {
        let ctx = ctx.clone();
        EventListener::new(&open_btn, "click", move |_| {
            open_library(&ctx);
        })
        .forget();
    }
    if let Some(close_btn) = dom::element("closeLibraryBtn") {
        EventListener::new(&close_btn, "click", move |_| {
            close_library();
        })
        .forget();
    }
    if let Some(save_btn) = dom::element("saveProfileBtnManual") {
        let ctx = ctx.clone();
        EventListener::new(&save_btn, "click", move |_| {
            save_current_card(&ctx);
        })
        .forget();
    }
}

pub(crate) fn open_library(ctx: &Rc<AppContext>) {
    set_hidden("libraryModal", false);
    refresh_list(ctx);
    reset_preview();
}

fn close_library() {
    set_hidden("libraryModal", true);
}

// Rebuilds the hidden profile select and the library list, reverse
// lexicographic.
pub(crate) fn refresh_list(ctx: &Rc<AppContext>) {
    let names = profile_store::profile_names();
    let book = profile_store::load_book();

    // Dropping the previous listeners detaches the stale list items.
    ctx.library_listeners.borrow_mut().clear();

    if let Some(select) = dom::element("profileSelect") {
        select.set_inner_html(r#"<option value="">Select a profile...</option>"#);
        if let Some(document) = dom::document() {
            for name in &names {
                if let Ok(option) = document.create_element("option") {
                    let _ = option.set_attribute("value", name);
                    option.set_text_content(Some(name.as_str()));
                    let _ = select.append_child(&option);
                }
            }
        }
    }

    if let Some(list) = dom::element("libraryList") {
        list.set_inner_html("");
        let Some(document) = dom::document() else {
            return;
        };
        for name in &names {
            let Ok(item) = document.create_element("div") else {
                continue;
            };
            item.set_class_name(
                "p-4 bg-gray-800/30 hover:bg-neon-green/10 rounded-lg border border-gray-800 hover:border-neon-green/40 cursor-pointer transition-all group",
            );
            let caliber = book
                .get(name)
                .map(|profile| profile.field("caliber").to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "No Caliber".to_string());
            let date = book
                .get(name)
                .map(|profile| profile.field("date").to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "--".to_string());
            item.set_inner_html(&format!(
                r#"<div class="flex items-center justify-between gap-3">
    <div class="min-w-0">
        <div class="font-bold text-sm text-gray-200 truncate pr-4 group-hover:text-white">{name}</div>
        <div class="text-[9px] text-gray-500 font-mono uppercase mt-1">{caliber} &bull; {date}</div>
    </div>
    <i data-lucide="chevron-right" class="w-4 h-4 text-gray-700 group-hover:text-neon-green"></i>
</div>"#
            ));
            let _ = list.append_child(&item);

            let ctx_for_click = ctx.clone();
            let name_for_click = name.clone();
            let listener = EventListener::new(&item, "click", move |_| {
                preview_profile(&ctx_for_click, &name_for_click);
            });
            ctx.library_listeners.borrow_mut().push(listener);
        }
    }

    // New list items carry icon placeholders.
    collab::refresh_icons();
}

fn reset_preview() {
    set_hidden("profilePreview", true);
    set_hidden("noSelection", false);
}

fn preview_profile(ctx: &Rc<AppContext>, name: &str) {
    let Some(profile) = profile_store::load_profile(name) else {
        return;
    };

    set_hidden("noSelection", true);
    set_hidden("profilePreview", false);
    dom::set_text("previewName", name);
    dom::set_text(
        "previewCaliber",
        &format!(
            "{} \u{2022} {}",
            or_dashes(profile.field("caliber"), "---"),
            or_dashes(profile.field("bullet"), "---")
        ),
    );
    dom::set_text("prevDate", or_dashes(profile.field("date"), "--"));

    if let Some(image) = dom::element("prevImage").and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        match profile.snapshot.as_deref() {
            Some(snapshot) => {
                image.set_src(snapshot);
                set_hidden("prevImage", false);
                set_hidden("noImageMsg", true);
            }
            None => {
                image.set_src("");
                set_hidden("prevImage", true);
                set_hidden("noImageMsg", false);
            }
        }
    }

    for (preview_id, field_id) in PREVIEW_FIELDS {
        dom::set_text(preview_id, or_dashes(profile.field(field_id), "--"));
    }

    if let (Some(table), Some(document)) = (dom::element("prevDistanceTable"), dom::document()) {
        table.set_inner_html("");
        for dist in PREVIEW_DISTANCES {
            let clicks = or_dashes(profile.field(&format!("clicks-{dist}")), "--").to_string();
            let udlr = or_dashes(profile.field(&format!("udlr-{dist}")), "--").to_string();
            if let Ok(cell) = document.create_element("div") {
                cell.set_class_name(
                    "p-2 bg-black/40 border border-gray-800 rounded flex flex-col items-center",
                );
                cell.set_inner_html(&format!(
                    r#"<span class="text-[8px] text-gray-500">{dist}Y</span><span class="text-xs text-blue-400 font-bold">{clicks}</span><span class="text-[8px] text-gray-600">{udlr}</span>"#
                ));
                let _ = table.append_child(&cell);
            }
        }
    }

    // Preview actions are rebound to the previewed record; replacing the
    // listener set drops the bindings of the previously previewed one.
    let mut listeners = Vec::new();

    if let Some(data_btn) = dom::element("viewDataBtn") {
        listeners.push(EventListener::new(&data_btn, "click", move |_| {
            set_hidden("dataPreview", false);
            set_hidden("snapshotPreview", true);
        }));
    }
    if let Some(image_btn) = dom::element("viewImageBtn") {
        listeners.push(EventListener::new(&image_btn, "click", move |_| {
            set_hidden("dataPreview", true);
            set_hidden("snapshotPreview", false);
        }));
    }
    // The visual snapshot is the default view.
    set_hidden("dataPreview", true);
    set_hidden("snapshotPreview", false);

    if let Some(load_btn) = dom::element("loadSelectedBtn") {
        let ctx_for_load = ctx.clone();
        let name_for_load = name.to_string();
        listeners.push(EventListener::new(&load_btn, "click", move |_| {
            if let Some(profile) = profile_store::load_profile(&name_for_load) {
                apply_profile(&ctx_for_load, &name_for_load, &profile);
                close_library();
            }
        }));
    }
    if let Some(delete_btn) = dom::element("deleteSelectedBtn") {
        let ctx_for_delete = ctx.clone();
        let name_for_delete = name.to_string();
        listeners.push(EventListener::new(&delete_btn, "click", move |_| {
            if !collab::confirm(&format!("Trash record \"{name_for_delete}\"?")) {
                return;
            }
            if let Err(err) = profile_store::delete_profile(&name_for_delete) {
                gloo::console::error!("profile delete failed", err.clone());
                collab::alert(&format!("Could not delete record: {err}"));
                return;
            }
            refresh_list(&ctx_for_delete);
            reset_preview();
        }));
    }

    *ctx.preview_listeners.borrow_mut() = listeners;
}

// Writes a stored record back into the form: every registry field gets
// the captured value (or empty), announced through the dispatcher so the
// mirrors, compass, and auto-save slot all follow; both shot plots are
// restored losslessly.
pub(crate) fn apply_profile(ctx: &Rc<AppContext>, name: &str, profile: &Profile) {
    for field_id in &ctx.registry {
        let value = profile.field(field_id).to_string();
        if dom::set_field_value(field_id, &value) {
            ctx.dispatcher.publish(field_id);
        }
    }
    if let Some(hold) = ctx.hold.as_ref() {
        hold.restore(profile.hold_shots.clone());
    }
    if let Some(shot) = ctx.shot.as_ref() {
        shot.restore(profile.shot_shots.clone());
    }
    dom::set_field_value("profileSelect", name);
}

// Save flow: name prompt, rasterized snapshot, then an upsert under that
// name. Storage failures surface immediately; a failed save is a
// data-loss risk the user must know about.
fn save_current_card(ctx: &Rc<AppContext>) {
    if ctx.capture_pending.get() {
        return;
    }
    let Some(name) = collab::prompt("Enter profile name to save tactical record:") else {
        return;
    };

    let ctx_for_capture = ctx.clone();
    capture::capture_card(ctx, move |result| match result {
        Ok(snapshot) => {
            let profile = collect_profile(&ctx_for_capture, Some(snapshot));
            if let Err(err) = profile_store::save_profile(&name, profile) {
                gloo::console::error!("profile save failed", err.clone());
                collab::alert(&format!("Record save failed: {err}"));
                return;
            }
            open_library(&ctx_for_capture);
            preview_profile(&ctx_for_capture, &name);
        }
        Err(err) => {
            gloo::console::error!("profile capture failed", err);
            collab::alert("Record save failed. Please check log.");
        }
    });
}

fn collect_profile(ctx: &AppContext, snapshot: Option<String>) -> Profile {
    let mut profile = Profile {
        snapshot,
        ..Profile::default()
    };
    for field_id in &ctx.registry {
        if let Some(value) = dom::field_value(field_id) {
            profile.fields.insert(field_id.clone(), value);
        }
    }
    if let Some(hold) = ctx.hold.as_ref() {
        profile.hold_shots = hold.shot_points();
    }
    if let Some(shot) = ctx.shot.as_ref() {
        profile.shot_shots = shot.shot_points();
    }
    profile
}

fn or_dashes<'a>(value: &'a str, dashes: &'a str) -> &'a str {
    if value.is_empty() {
        dashes
    } else {
        value
    }
}

fn set_hidden(id: &str, hidden: bool) {
    if let Some(element) = dom::element(id) {
        let _ = element.class_list().toggle_with_force("hidden", hidden);
    }
}

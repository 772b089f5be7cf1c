// Mirror sync: every canonical input echoes verbatim into its optional
// display- and mobile-display- spans. No validation, no transform.

use rangecard_core::{display_id, mobile_display_id};

use crate::app_core::AppContext;
use crate::dispatcher::FieldFilter;
use crate::dom;

pub(crate) fn wire(ctx: &AppContext) {
    ctx.dispatcher.subscribe(
        FieldFilter::Fields(ctx.registry.clone()),
        |field_id| sync_field(field_id),
    );
    // Initial pass covers fields pre-filled by the markup or by defaults.
    for field_id in &ctx.registry {
        sync_field(field_id);
    }
}

// Missing canonical inputs or mirrors are skipped; the mirror DOM is
// plastic across layout breakpoints.
pub(crate) fn sync_field(field_id: &str) {
    let Some(value) = dom::field_value(field_id) else {
        return;
    };
    dom::set_text(&display_id(field_id), &value);
    dom::set_text(&mobile_display_id(field_id), &value);
}

// An empty date field defaults to today, announced so the mirrors and the
// auto-save slot pick it up.
pub(crate) fn default_date_today(ctx: &AppContext) {
    let Some(input) = dom::input("date") else {
        return;
    };
    if !input.value().is_empty() {
        return;
    }
    input.set_value(&today_iso());
    ctx.dispatcher.publish("date");
}

fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

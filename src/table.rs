// Generated distance-table rows: one per distance in both the desktop and
// mobile card bodies, holding the display spans for the generated field
// triple.

use rangecard_core::fields::{clicks_id, dist_id, udlr_id};
use rangecard_core::DISTANCES;
use web_sys::{Document, Element};

pub(crate) fn build_rows(document: &Document) {
    let desktop_body = document.get_element_by_id("distance-table-body");
    let mobile_body = document.get_element_by_id("mobile-distance-table-body");
    if desktop_body.is_none() && mobile_body.is_none() {
        return;
    }

    for dist in DISTANCES {
        if let Some(body) = desktop_body.as_ref() {
            if let Some(row) = build_row(document, *dist, false) {
                let _ = body.append_child(&row);
            }
        }
        if let Some(body) = mobile_body.as_ref() {
            if let Some(row) = build_row(document, *dist, true) {
                let _ = body.append_child(&row);
            }
        }
    }
}

fn build_row(document: &Document, dist: u32, mobile: bool) -> Option<Element> {
    let row = document.create_element("div").ok()?;
    let (row_class, pad, dist_class) = if mobile {
        (
            "grid grid-cols-4 border-b border-black flex items-center text-center border-l-0 border-r-0",
            " py-1",
            "text-[10px] font-bold",
        )
    } else {
        (
            "grid grid-cols-4 border-b border-black flex-1 items-center text-center",
            "",
            "text-sm font-bold",
        )
    };
    let prefix = if mobile { "mobile-display-" } else { "display-" };
    row.set_class_name(row_class);
    row.set_inner_html(&format!(
        r#"<div class="border-r border-black h-full{pad} flex items-center justify-center font-handwriting text-blue-800">
    <span id="{prefix}{clicks}"></span>
</div>
<div class="col-span-2 border-r border-black h-full{pad} flex items-center justify-center bg-gray-50/30">
    <span id="{prefix}{dist_span}" class="{dist_class}">{dist}</span>
</div>
<div class="h-full{pad} flex items-center justify-center font-handwriting text-blue-800">
    <span id="{prefix}{udlr}"></span>
</div>"#,
        clicks = clicks_id(dist),
        dist_span = dist_id(dist),
        udlr = udlr_id(dist),
    ));
    Some(row)
}

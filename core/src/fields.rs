// Every logical input id that takes part in mirror sync, profile
// save/load, and full-form clear.

// Inputs that exist in the static card markup.
pub const STATIC_FIELDS: &[&str] = &[
    "header-notes",
    "shooter-name",
    "date",
    "time",
    "caliber",
    "zero",
    "barrel",
    "bullet",
    "load",
    "powder",
    "primer",
    "col",
    "rings",
    "velocity",
    "g1",
    "weather",
    "targetSize",
    "groupSize",
    "elevation",
    "hold-data",
    "final-dope",
    "rifle-notes",
    "wind-notes",
    "scope-notes",
    "shooting-angle",
    "direction-notes",
    "lrf-notes",
    "compass-range",
    "shooting-angle-2",
    "compass-range-2",
    "shooting-angle-3",
    "compass-range-3",
];

pub const DISTANCES: &[u32] = &[100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

// Static fields first, then the generated (clicks, udlr, dist) triple per
// distance.
pub fn field_registry() -> Vec<String> {
    let mut ids: Vec<String> = STATIC_FIELDS.iter().map(|id| id.to_string()).collect();
    for dist in DISTANCES {
        ids.push(clicks_id(*dist));
        ids.push(udlr_id(*dist));
        ids.push(dist_id(*dist));
    }
    ids
}

pub fn clicks_id(dist: u32) -> String {
    format!("clicks-{dist}")
}

pub fn udlr_id(dist: u32) -> String {
    format!("udlr-{dist}")
}

pub fn dist_id(dist: u32) -> String {
    format!("dist-{dist}")
}

pub fn display_id(field: &str) -> String {
    format!("display-{field}")
}

pub fn mobile_display_id(field: &str) -> String {
    format!("mobile-display-{field}")
}

// Distance labels keep their value through a full-form clear.
pub fn is_distance_label(field: &str) -> bool {
    field.starts_with("dist-")
}

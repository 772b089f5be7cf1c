// Bearings are compass degrees, clockwise from north. The canvas y axis
// points down, so a bearing is rotated by -90 degrees before the trig
// projection and 0 degrees points straight up.

use crate::geometry::SurfaceSize;

// Gap between a vector endpoint and the surface edge, in pixels.
pub const EDGE_MARGIN: f64 = 10.0;

// Endpoints right of this fraction of the width get their label on the
// left so it is not clipped at the edge.
pub const LABEL_FLIP_RATIO: f64 = 0.7;

// Direct float parse first; otherwise the first run of digits found in
// the text. No numeric value means no vector for this target.
pub fn parse_bearing(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Some(value);
        }
        return None;
    }
    first_digit_run(trimmed).and_then(|run| run.parse::<f64>().ok())
}

fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

pub fn bearing_endpoint(bearing_deg: f64, size: SurfaceSize) -> (f64, f64) {
    let (center_x, center_y) = size.center();
    let radius = size.width.min(size.height) / 2.0 - EDGE_MARGIN;
    let rads = (bearing_deg - 90.0).to_radians();
    (
        center_x + radius * rads.cos(),
        center_y + radius * rads.sin(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    RightOfMarker,
    LeftOfMarker,
}

pub fn label_anchor(endpoint_x: f64, surface_width: f64) -> LabelAnchor {
    if endpoint_x > surface_width * LABEL_FLIP_RATIO {
        LabelAnchor::LeftOfMarker
    } else {
        LabelAnchor::RightOfMarker
    }
}

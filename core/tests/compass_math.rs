use rangecard_core::compass::EDGE_MARGIN;
use rangecard_core::{bearing_endpoint, label_anchor, parse_bearing, LabelAnchor, SurfaceSize};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.9} got {:.9} (delta {:.9})",
        expected,
        actual,
        delta
    );
}

#[test]
fn parses_plain_and_decimal_angles() {
    assert_eq!(parse_bearing("180"), Some(180.0));
    assert_eq!(parse_bearing("  42.5 "), Some(42.5));
    assert_eq!(parse_bearing("-15"), Some(-15.0));
}

#[test]
fn falls_back_to_first_digit_run() {
    assert_eq!(parse_bearing("bearing 270 true"), Some(270.0));
    assert_eq!(parse_bearing("N45E"), Some(45.0));
    assert_eq!(parse_bearing("az=090"), Some(90.0));
}

#[test]
fn unparsable_angles_yield_nothing() {
    assert_eq!(parse_bearing(""), None);
    assert_eq!(parse_bearing("   "), None);
    assert_eq!(parse_bearing("abc"), None);
    assert_eq!(parse_bearing("north by northwest"), None);
    assert_eq!(parse_bearing("NaN"), None);
    assert_eq!(parse_bearing("inf"), None);
}

#[test]
fn cardinal_bearings_point_where_a_compass_says() {
    let size = SurfaceSize::new(300.0, 300.0);
    let radius = 150.0 - EDGE_MARGIN;

    let (x, y) = bearing_endpoint(0.0, size);
    assert_close(x, 150.0);
    assert_close(y, 150.0 - radius); // up

    let (x, y) = bearing_endpoint(90.0, size);
    assert_close(x, 150.0 + radius); // right
    assert_close(y, 150.0);

    let (x, y) = bearing_endpoint(180.0, size);
    assert_close(x, 150.0);
    assert_close(y, 150.0 + radius); // down

    let (x, y) = bearing_endpoint(270.0, size);
    assert_close(x, 150.0 - radius); // left
    assert_close(y, 150.0);
}

#[test]
fn radius_follows_the_smaller_axis() {
    let size = SurfaceSize::new(300.0, 160.0);
    let (x, y) = bearing_endpoint(180.0, size);
    assert_close(x, 150.0);
    assert_close(y, 80.0 + (80.0 - EDGE_MARGIN));
}

#[test]
fn label_flips_left_past_seventy_percent() {
    assert_eq!(label_anchor(100.0, 300.0), LabelAnchor::RightOfMarker);
    assert_eq!(label_anchor(210.0, 300.0), LabelAnchor::RightOfMarker);
    assert_eq!(label_anchor(211.0, 300.0), LabelAnchor::LeftOfMarker);
    assert_eq!(label_anchor(290.0, 300.0), LabelAnchor::LeftOfMarker);
}

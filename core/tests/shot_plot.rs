use rangecard_core::{NormalizedPoint, ShotSet, SurfaceSize};

const DESKTOP: SurfaceSize = SurfaceSize {
    width: 400.0,
    height: 400.0,
};
const MOBILE: SurfaceSize = SurfaceSize {
    width: 260.0,
    height: 180.0,
};

#[test]
fn undo_leaves_earlier_points_in_order() {
    let mut shots = ShotSet::new();
    let taps = [
        (120.0, 80.0),
        (200.0, 200.0),
        (310.0, 40.0),
        (15.0, 395.0),
        (200.5, 119.5),
    ];
    for (x, y) in taps {
        let point = NormalizedPoint::from_pixels(x, y, DESKTOP).expect("surface is not degenerate");
        shots.plot(point);
    }
    assert_eq!(shots.len(), 5);

    shots.undo_last();
    shots.undo_last();
    assert_eq!(shots.len(), 3);

    for (index, (x, y)) in taps.iter().take(3).enumerate() {
        let (px, py) = shots.points()[index].to_pixels(DESKTOP);
        assert!((px - x).abs() < 1e-9);
        assert!((py - y).abs() < 1e-9);
    }
}

#[test]
fn undo_on_empty_set_is_a_no_op() {
    let mut shots = ShotSet::new();
    assert_eq!(shots.undo_last(), None);
    assert!(shots.is_empty());

    shots.plot(NormalizedPoint { nx: 0.5, ny: 0.5 });
    shots.clear();
    assert_eq!(shots.undo_last(), None);
}

#[test]
fn center_point_lands_on_the_center_of_any_surface() {
    let center = NormalizedPoint { nx: 0.5, ny: 0.5 };
    for size in [DESKTOP, MOBILE, SurfaceSize::new(1024.0, 131.0)] {
        let (px, py) = center.to_pixels(size);
        assert!((px - size.width / 2.0).abs() < 1e-9);
        assert!((py - size.height / 2.0).abs() < 1e-9);
    }
}

#[test]
fn pixel_round_trip_is_stable_across_surface_sizes() {
    let point =
        NormalizedPoint::from_pixels(123.0, 77.0, DESKTOP).expect("surface is not degenerate");

    // Same normalized point, projected onto a differently sized surface and
    // back, reproduces the original desktop pixel within rounding tolerance.
    let (mx, my) = point.to_pixels(MOBILE);
    let via_mobile =
        NormalizedPoint::from_pixels(mx, my, MOBILE).expect("surface is not degenerate");
    let (px, py) = via_mobile.to_pixels(DESKTOP);
    assert!((px - 123.0).abs() < 1e-9);
    assert!((py - 77.0).abs() < 1e-9);
}

#[test]
fn degenerate_surfaces_produce_no_point() {
    assert_eq!(
        NormalizedPoint::from_pixels(10.0, 10.0, SurfaceSize::new(0.0, 100.0)),
        None
    );
    assert_eq!(
        NormalizedPoint::from_pixels(10.0, 10.0, SurfaceSize::new(100.0, -5.0)),
        None
    );
}

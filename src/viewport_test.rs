#![allow(clippy::float_cmp)]

use super::*;

// --- identity ---

#[test]
fn identity_maps_one_to_one() {
    let vp = Viewport::identity(1000.0, 3000.0);
    assert_eq!(vp.client_to_canvas(Point::new(123.0, 456.0)), Point::new(123.0, 456.0));
    assert_eq!(vp.scale(), (1.0, 1.0));
}

// --- scaling ---

#[test]
fn scaled_down_canvas_maps_to_intrinsic_pixels() {
    // 1000×3000 canvas displayed at 250×750, offset on the page.
    let vp = Viewport {
        left: 40.0,
        top: 100.0,
        display_width: 250.0,
        display_height: 750.0,
        canvas_width: 1000.0,
        canvas_height: 3000.0,
    };
    assert_eq!(vp.scale(), (4.0, 4.0));
    assert_eq!(vp.client_to_canvas(Point::new(40.0, 100.0)), Point::new(0.0, 0.0));
    assert_eq!(vp.client_to_canvas(Point::new(165.0, 475.0)), Point::new(500.0, 1500.0));
}

#[test]
fn axes_scale_independently() {
    let vp = Viewport {
        left: 0.0,
        top: 0.0,
        display_width: 500.0,
        display_height: 1000.0,
        canvas_width: 1000.0,
        canvas_height: 3000.0,
    };
    assert_eq!(vp.client_to_canvas(Point::new(10.0, 10.0)), Point::new(20.0, 30.0));
}

#[test]
fn collapsed_element_maps_without_scaling() {
    let vp = Viewport {
        left: 5.0,
        top: 5.0,
        display_width: 0.0,
        display_height: 0.0,
        canvas_width: 1000.0,
        canvas_height: 3000.0,
    };
    assert_eq!(vp.scale(), (1.0, 1.0));
    assert_eq!(vp.client_to_canvas(Point::new(15.0, 25.0)), Point::new(10.0, 20.0));
}

#[test]
fn points_left_of_canvas_map_negative() {
    let vp = Viewport::identity(100.0, 100.0);
    let p = vp.client_to_canvas(Point::new(-5.0, 50.0));
    assert!(p.x < 0.0);
}

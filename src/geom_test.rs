#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use uuid::Uuid;

use super::*;
use crate::sticker::{ImageRef, Sticker};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn sticker_at(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Sticker {
    Sticker {
        id: Uuid::new_v4(),
        image: ImageRef::new("fish.png"),
        x,
        y,
        width: w,
        height: h,
        rotation,
        aspect: w / h,
    }
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_midpoint() {
    let m = Point::new(0.0, 10.0).midpoint(Point::new(20.0, -10.0));
    assert_eq!(m, Point::new(10.0, 0.0));
}

// =============================================================
// rotate_point
// =============================================================

#[test]
fn rotate_by_zero_is_identity() {
    let p = Point::new(12.5, -3.0);
    assert!(point_approx_eq(rotate_point(p, Point::new(4.0, 4.0), 0.0), p));
}

#[test]
fn rotate_quarter_turn_is_clockwise_on_screen() {
    // +x rotates toward +y (down the screen).
    let r = rotate_point(Point::new(1.0, 0.0), Point::new(0.0, 0.0), FRAC_PI_2);
    assert!(point_approx_eq(r, Point::new(0.0, 1.0)));
}

#[test]
fn rotate_about_arbitrary_center() {
    let r = rotate_point(Point::new(15.0, 10.0), Point::new(10.0, 10.0), PI);
    assert!(point_approx_eq(r, Point::new(5.0, 10.0)));
}

#[test]
fn rotate_center_is_fixed_point() {
    let c = Point::new(7.0, -2.0);
    assert!(point_approx_eq(rotate_point(c, c, 1.234), c));
}

#[test]
fn rotate_then_inverse_round_trips() {
    let center = Point::new(50.0, 25.0);
    let angles = [0.0, 0.1, FRAC_PI_2, 2.5, PI, -1.7, 7.0, -13.3];
    let points = [Point::new(0.0, 0.0), Point::new(100.0, 50.0), Point::new(-33.0, 812.5), Point::new(50.0, 25.0)];
    for angle in angles {
        for p in points {
            let back = rotate_point(rotate_point(p, center, angle), center, -angle);
            assert!(point_approx_eq(back, p), "angle {angle} point {p:?} came back as {back:?}");
        }
    }
}

// =============================================================
// point_in_rect / is_point_in_sticker
// =============================================================

#[test]
fn point_in_rect_edges_are_inclusive() {
    assert!(point_in_rect(Point::new(0.0, 0.0), 0.0, 0.0, 10.0, 5.0));
    assert!(point_in_rect(Point::new(10.0, 5.0), 0.0, 0.0, 10.0, 5.0));
    assert!(!point_in_rect(Point::new(10.1, 5.0), 0.0, 0.0, 10.0, 5.0));
    assert!(!point_in_rect(Point::new(5.0, -0.1), 0.0, 0.0, 10.0, 5.0));
}

#[test]
fn unrotated_sticker_matches_axis_aligned_test() {
    let s = sticker_at(20.0, 30.0, 100.0, 40.0, 0.0);
    for ix in -2..=14 {
        for iy in -2..=10 {
            let p = Point::new(f64::from(ix) * 10.0, f64::from(iy) * 10.0);
            assert_eq!(
                is_point_in_sticker(p, &s),
                point_in_rect(p, s.x, s.y, s.width, s.height),
                "mismatch at {p:?}"
            );
        }
    }
}

#[test]
fn rotated_sticker_uses_rotated_bounds() {
    // 100×20 box centered on (50, 10); a quarter turn stands it upright.
    let s = sticker_at(0.0, 0.0, 100.0, 20.0, FRAC_PI_2);
    assert!(is_point_in_sticker(Point::new(50.0, -30.0), &s));
    assert!(is_point_in_sticker(Point::new(55.0, 55.0), &s));
    assert!(!is_point_in_sticker(Point::new(90.0, 10.0), &s));
    assert!(!is_point_in_sticker(Point::new(5.0, 5.0), &s));
}

#[test]
fn full_turn_behaves_like_unrotated() {
    let plain = sticker_at(0.0, 0.0, 80.0, 30.0, 0.0);
    let turned = sticker_at(0.0, 0.0, 80.0, 30.0, 2.0 * PI);
    for p in [Point::new(1.0, 1.0), Point::new(79.0, 29.0), Point::new(81.0, 10.0), Point::new(40.0, 31.0)] {
        assert_eq!(is_point_in_sticker(p, &plain), is_point_in_sticker(p, &turned), "mismatch at {p:?}");
    }
}

#[test]
fn sticker_center_is_always_inside() {
    for rotation in [0.0, 0.4, 1.9, -3.0] {
        let s = sticker_at(10.0, 10.0, 60.0, 35.0, rotation);
        assert!(is_point_in_sticker(s.center(), &s));
    }
}

use std::f64::consts::FRAC_PI_2;

use super::*;

const RED: Rgba = Rgba::new(255, 0, 0, 255);
const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

#[test]
fn zero_sized_surface_is_an_error() {
    assert!(matches!(PixmapSurface::new(0, 10), Err(RenderError::Allocation { width: 0, height: 10 })));
    assert!(matches!(solid_image(5, 0, RED), Err(RenderError::Allocation { width: 5, height: 0 })));
}

#[test]
fn new_surface_is_transparent() {
    let surface = PixmapSurface::new(4, 4).unwrap();
    assert_eq!(surface.pixel(2, 2), Some(TRANSPARENT));
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let surface = PixmapSurface::new(4, 4).unwrap();
    assert_eq!(surface.pixel(4, 0), None);
    assert_eq!(surface.pixel(0, 4), None);
}

#[test]
fn pixel_past_row_end_does_not_wrap() {
    // Only the first column of the second row is painted; reading one past
    // the end of the first row must not land on it.
    let mut surface = PixmapSurface::new(4, 4).unwrap();
    let image = solid_image(1, 1, RED).unwrap();
    surface.draw_image(&image, 0.0, 1.0, 1.0, 1.0).unwrap();
    assert_eq!(surface.pixel(0, 1), Some(RED));
    assert_eq!(surface.pixel(4, 0), None);
    assert_eq!(surface.pixel(u32::MAX, 0), None);
}

#[test]
fn solid_image_has_uniform_color() {
    let image = solid_image(3, 2, RED).unwrap();
    assert_eq!((image.width(), image.height()), (3, 2));
    let p = image.pixel(2, 1).unwrap();
    assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (255, 0, 0, 255));
}

#[test]
fn draw_image_stretches_into_box() {
    let mut surface = PixmapSurface::new(40, 40).unwrap();
    let image = solid_image(4, 4, RED).unwrap();
    surface.draw_image(&image, 10.0, 10.0, 20.0, 20.0).unwrap();
    assert_eq!(surface.pixel(15, 15), Some(RED));
    assert_eq!(surface.pixel(29, 29), Some(RED));
    assert_eq!(surface.pixel(5, 5), Some(TRANSPARENT));
    assert_eq!(surface.pixel(31, 31), Some(TRANSPARENT));
}

#[test]
fn clear_erases_everything() {
    let mut surface = PixmapSurface::new(10, 10).unwrap();
    let image = solid_image(1, 1, RED).unwrap();
    surface.draw_image(&image, 0.0, 0.0, 10.0, 10.0).unwrap();
    surface.clear(10.0, 10.0).unwrap();
    assert_eq!(surface.pixel(5, 5), Some(TRANSPARENT));
}

#[test]
fn quarter_turn_stands_bar_upright() {
    let mut surface = PixmapSurface::new(40, 40).unwrap();
    let image = solid_image(4, 1, RED).unwrap();
    surface.draw_image_rotated(&image, Point::new(20.0, 20.0), FRAC_PI_2, 20.0, 4.0).unwrap();
    assert_eq!(surface.pixel(20, 12), Some(RED));
    assert_eq!(surface.pixel(20, 27), Some(RED));
    assert_eq!(surface.pixel(12, 20), Some(TRANSPARENT));
}

#[test]
fn circle_fills_around_center() {
    let mut surface = PixmapSurface::new(20, 20).unwrap();
    surface.fill_circle(Point::new(10.0, 10.0), 5.0, RED).unwrap();
    assert_eq!(surface.pixel(10, 10), Some(RED));
    assert_eq!(surface.pixel(1, 1), Some(TRANSPARENT));
}

#[test]
fn zero_radius_circle_draws_nothing() {
    let mut surface = PixmapSurface::new(20, 20).unwrap();
    surface.fill_circle(Point::new(10.0, 10.0), 0.0, RED).unwrap();
    assert_eq!(surface.pixel(10, 10), Some(TRANSPARENT));
}

#[test]
fn stroke_outlines_polygon_only() {
    let mut surface = PixmapSurface::new(20, 20).unwrap();
    let square = [Point::new(4.0, 4.0), Point::new(16.0, 4.0), Point::new(16.0, 16.0), Point::new(4.0, 16.0)];
    surface.stroke_polygon(&square, RED, 4.0).unwrap();
    assert_eq!(surface.pixel(4, 10), Some(RED));
    assert_eq!(surface.pixel(10, 10), Some(TRANSPARENT));
}

#[test]
fn empty_polygon_is_a_noop() {
    let mut surface = PixmapSurface::new(5, 5).unwrap();
    surface.stroke_polygon(&[], RED, 2.0).unwrap();
    assert_eq!(surface.pixel(2, 2), Some(TRANSPARENT));
}

#[test]
fn png_export_reloads() {
    let mut surface = PixmapSurface::new(8, 8).unwrap();
    surface.fill_circle(Point::new(4.0, 4.0), 3.0, RED).unwrap();
    let bytes = surface.encode_png().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = decode_png(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
    assert_eq!(decoded.pixel(4, 4), surface.pixmap().pixel(4, 4));
}

#[test]
fn garbage_is_not_a_png() {
    assert!(matches!(decode_png(b"definitely not a png"), Err(RenderError::Png(_))));
}

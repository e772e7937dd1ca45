// Host-side tests for the software surface and PNG export.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spray_core::*;

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).expect("valid png").to_rgba8()
}

#[test]
fn backing_store_scales_with_device_pixel_ratio() {
    let p = Pixmap::new(100.0, 50.0, 2.0);
    assert_eq!((p.width(), p.height()), (200, 100));
    assert_eq!(p.painted_pixels(), 0);

    let p = Pixmap::new(10.0, 10.0, f32::NAN);
    assert_eq!(p.device_pixel_ratio(), 1.0);
}

#[test]
fn disc_paints_its_center() {
    let mut p = Pixmap::new(20.0, 20.0, 1.0);
    p.draw_disc(10.0, 10.0, 3.0, Rgba::WHITE.with_alpha(0.5));
    let px = p.pixel(10, 10).unwrap();
    assert_eq!(&px[..3], &[255, 255, 255]);
    assert!((px[3] as i32 - 128).abs() <= 1);
    assert_eq!(p.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(p.pixel(20, 0), None);
}

#[test]
fn overlapping_paint_accumulates_alpha() {
    let mut p = Pixmap::new(8.0, 8.0, 1.0);
    p.draw_rect_1x1(4.0, 4.0, Rgba::WHITE.with_alpha(0.5));
    let once = p.pixel(4, 4).unwrap()[3];
    p.draw_rect_1x1(4.0, 4.0, Rgba::WHITE.with_alpha(0.5));
    let twice = p.pixel(4, 4).unwrap()[3];
    assert!(twice > once);
}

#[test]
fn rect_covers_one_logical_pixel() {
    let mut p = Pixmap::new(10.0, 10.0, 2.0);
    p.draw_rect_1x1(3.0, 3.0, Rgba::WHITE);
    assert_eq!(p.painted_pixels(), 4);
    assert_eq!(p.pixel(6, 6).unwrap()[3], 255);
    assert_eq!(p.pixel(7, 7).unwrap()[3], 255);
}

#[test]
fn line_paints_along_its_length() {
    let mut p = Pixmap::new(40.0, 40.0, 1.0);
    p.draw_line(20.0, 5.0, 20.0, 35.0, 2.0, Rgba::WHITE);
    for y in 6..35 {
        assert!(p.pixel(20, y).unwrap()[3] > 0, "gap at y={y}");
    }
    assert_eq!(p.pixel(5, 20).unwrap()[3], 0);
}

#[test]
fn off_surface_drawing_is_clipped() {
    let mut p = Pixmap::new(10.0, 10.0, 1.0);
    p.draw_disc(-50.0, -50.0, 5.0, Rgba::WHITE);
    p.draw_line(100.0, 100.0, 200.0, 200.0, 3.0, Rgba::WHITE);
    p.draw_rect_1x1(-1.0, 4.0, Rgba::WHITE);
    p.draw_disc(f32::NAN, 2.0, 1.0, Rgba::WHITE);
    assert_eq!(p.painted_pixels(), 0);
}

#[test]
fn clear_then_encode_is_blank() {
    let mut p = Pixmap::new(64.0, 48.0, 1.0);
    let mut session = SpraySession::new(StdRng::seed_from_u64(2));
    let mut host = ManualFrameHost::new();
    session.on_down(Vec2::new(32.0, 24.0), &mut host);
    for _ in 0..5 {
        session.step(&mut p, &CapId::Fat);
    }
    assert!(p.painted_pixels() > 0);

    session.clear(&mut p);
    let img = decode(&p.encode_png().unwrap());
    assert_eq!(img.dimensions(), (64, 48));
    assert!(img.pixels().all(|px| px[3] == 0));
}

#[test]
fn encoded_png_preserves_paint() {
    let mut p = Pixmap::new(16.0, 16.0, 1.0);
    p.draw_disc(8.0, 8.0, 4.0, Rgba::rgb(255, 0, 0));
    let img = decode(&p.encode_png().unwrap());
    assert_eq!(img.get_pixel(8, 8).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn resize_drops_content() {
    let mut p = Pixmap::new(16.0, 16.0, 1.0);
    p.draw_disc(8.0, 8.0, 4.0, Rgba::WHITE);
    p.resize(32.0, 8.0, 1.5);
    assert_eq!((p.width(), p.height()), (48, 12));
    assert_eq!(p.painted_pixels(), 0);
}

#[test]
fn empty_surface_refuses_to_encode() {
    let p = Pixmap::new(0.0, 0.0, 1.0);
    assert!(matches!(p.encode_png(), Err(SurfaceError::EmptySurface)));
}

#[test]
fn export_wraps_png_with_file_name() {
    let p = Pixmap::new(4.0, 4.0, 1.0);
    let out = export_png(&p, "2025-03-09T08:07:06.543Z").unwrap();
    assert_eq!(out.file_name, "graffiti-2025-03-09-08-07-06.png");
    assert_eq!(&out.png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn export_file_name_drops_fractional_seconds() {
    assert_eq!(
        export_file_name("2024-05-01T12:34:56.789Z"),
        "graffiti-2024-05-01-12-34-56.png"
    );
    assert_eq!(
        export_file_name("2024-05-01T12:34:56Z"),
        "graffiti-2024-05-01-12-34-56.png"
    );
}

use super::*;

use crate::mode::ScaleMode;

const OVER: DrawMode = DrawMode::new(BlendMode::SrcOver, ScaleMode::Nearest);

#[test]
fn new_sizes_buffer_by_format() {
    for format in PixelFormat::ALL {
        let pm = Pixmap::new(3, 5, format).unwrap();
        assert_eq!(pm.as_bytes().len(), 15 * format.bytes_per_pixel());
        assert_eq!(pm.stride(), 3 * format.bytes_per_pixel());
        assert_eq!(pm.pixel_count(), 15);
    }
}

#[test]
fn new_rejects_zero_dimensions() {
    let err = Pixmap::new(0, 4, PixelFormat::Rgba8888).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert!(Pixmap::new(4, 0, PixelFormat::Alpha).is_err());
}

#[test]
fn from_raw_checks_length() {
    assert!(Pixmap::from_raw(2, 2, PixelFormat::Rgb888, vec![0; 12]).is_ok());
    let err = Pixmap::from_raw(2, 2, PixelFormat::Rgb888, vec![0; 11]).unwrap_err();
    assert!(err.to_string().contains("expects 12 bytes, got 11"));
}

#[test]
fn set_then_get_round_trips_rgba() {
    let mut pm = Pixmap::new(4, 4, PixelFormat::Rgba8888).unwrap();
    let c = Rgba8::new(9, 8, 7, 6);
    pm.set_pixel(2, 3, c, DrawMode::default());
    assert_eq!(pm.get_pixel(2, 3), c);
    let off = (3 * 4 + 2) * 4;
    assert_eq!(&pm.as_bytes()[off..off + 4], &[9, 8, 7, 6]);
}

#[test]
fn get_pixel_out_of_bounds_is_transparent() {
    let mut pm = Pixmap::new(2, 2, PixelFormat::Rgb888).unwrap();
    pm.clear(Rgba8::WHITE);
    assert_eq!(pm.get_pixel(-1, 0), Rgba8::TRANSPARENT);
    assert_eq!(pm.get_pixel(0, 2), Rgba8::TRANSPARENT);
    assert_eq!(pm.get_pixel(1, 1), Rgba8::WHITE);
}

#[test]
fn set_pixel_out_of_bounds_leaves_buffer_unchanged() {
    let mut pm = Pixmap::new(3, 3, PixelFormat::Rgba4444).unwrap();
    pm.clear(Rgba8::new(0x10, 0x20, 0x30, 0x40));
    let before = pm.as_bytes().to_vec();
    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
        pm.set_pixel(x, y, Rgba8::WHITE, DrawMode::default());
        pm.set_pixel(x, y, Rgba8::WHITE, OVER);
    }
    assert_eq!(pm.as_bytes(), before.as_slice());
}

#[test]
fn set_pixel_blends_under_src_over() {
    let mut pm = Pixmap::new(1, 1, PixelFormat::Rgba8888).unwrap();
    pm.clear(Rgba8::new(0, 0, 0, 255));
    pm.set_pixel(0, 0, Rgba8::new(255, 255, 255, 0), OVER);
    assert_eq!(pm.get_pixel(0, 0), Rgba8::new(0, 0, 0, 255));

    pm.set_pixel(0, 0, Rgba8::new(255, 255, 255, 0), DrawMode::default());
    assert_eq!(pm.get_pixel(0, 0), Rgba8::new(255, 255, 255, 0));
}

#[test]
fn clear_fills_every_pixel_in_native_layout() {
    let mut pm = Pixmap::new(3, 2, PixelFormat::Rgb565).unwrap();
    pm.clear(Rgba8::opaque(255, 0, 0));
    for px in pm.as_bytes().chunks_exact(2) {
        assert_eq!(u16::from_le_bytes([px[0], px[1]]), 0xf800);
    }

    let mut pm = Pixmap::new(2, 2, PixelFormat::LuminanceAlpha).unwrap();
    pm.clear(Rgba8::new(255, 255, 255, 3));
    assert_eq!(pm.as_bytes(), &[255, 3, 255, 3, 255, 3, 255, 3]);
}

#[test]
fn clear_ignores_blend_state() {
    let mut pm = Pixmap::new(2, 1, PixelFormat::Rgba8888).unwrap();
    pm.clear(Rgba8::WHITE);
    pm.clear(Rgba8::TRANSPARENT);
    assert!(pm.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn into_raw_returns_buffer() {
    let mut pm = Pixmap::new(1, 2, PixelFormat::Alpha).unwrap();
    pm.as_bytes_mut()[1] = 42;
    assert_eq!(pm.bounds(), PixRect::new(0, 0, 1, 2));
    assert_eq!(pm.into_raw(), vec![0, 42]);
}

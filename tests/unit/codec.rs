use super::*;

use crate::foundation::core::Rgba8;

fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn rgba_png(w: u32, h: u32, data: Vec<u8>) -> Vec<u8> {
    png_bytes(DynamicImage::ImageRgba8(
        image::RgbaImage::from_raw(w, h, data).unwrap(),
    ))
}

#[test]
fn decode_rgba_png_keeps_native_layout() {
    let bytes = rgba_png(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 4]);
    let pm = decode(&bytes, None).unwrap();
    assert_eq!(pm.format(), PixelFormat::Rgba8888);
    assert_eq!((pm.width(), pm.height()), (2, 1));
    assert_eq!(pm.as_bytes(), &[100, 50, 200, 128, 1, 2, 3, 4]);
}

#[test]
fn decode_gray_png_lands_in_single_channel_format() {
    let gray = image::GrayImage::from_raw(2, 1, vec![10, 200]).unwrap();
    let pm = decode(&png_bytes(DynamicImage::ImageLuma8(gray)), None).unwrap();
    assert_eq!(pm.format(), PixelFormat::Alpha);
    assert_eq!(pm.as_bytes(), &[10, 200]);
    assert_eq!(pm.get_pixel(1, 0), Rgba8::new(255, 255, 255, 200));
}

#[test]
fn decode_honours_requested_format() {
    let bytes = rgba_png(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]);

    let rgb = decode(&bytes, Some(PixelFormat::Rgb888)).unwrap();
    assert_eq!(rgb.as_bytes(), &[255, 0, 0, 0, 0, 255]);

    let packed = decode(&bytes, Some(PixelFormat::Rgb565)).unwrap();
    assert_eq!(packed.format(), PixelFormat::Rgb565);
    assert_eq!(packed.as_bytes(), &[0x00, 0xf8, 0x1f, 0x00]);
}

#[test]
fn decode_rejects_garbage() {
    let err = decode(b"definitely not an image", None).unwrap_err();
    assert!(matches!(err, PixmapError::Other(_)));
    assert!(err.failure_reason().contains("decode image from memory"));
}

#[test]
fn packed_pixmaps_encode_widened() {
    let mut pm = Pixmap::new(2, 2, PixelFormat::Rgba4444).unwrap();
    pm.clear(Rgba8::new(0x11, 0x22, 0x33, 0xff));
    let bytes = encode(&pm, ImageFormat::Png).unwrap();

    let back = decode(&bytes, None).unwrap();
    assert_eq!(back.format(), PixelFormat::Rgba8888);
    assert_eq!(back.get_pixel(1, 1), Rgba8::new(0x11, 0x22, 0x33, 0xff));
}

#[test]
fn luminance_alpha_png_round_trips() {
    let pm = Pixmap::from_raw(2, 1, PixelFormat::LuminanceAlpha, vec![9, 80, 250, 3]).unwrap();
    let back = decode(&encode(&pm, ImageFormat::Png).unwrap(), None).unwrap();
    assert_eq!(back, pm);
}

#[test]
fn power_of_two_decode_grows_each_dimension() {
    let color = [37u8, 140, 251, 99];
    let bytes = rgba_png(3, 5, color.repeat(15));
    let pm = decode_power_of_two(&bytes, None).unwrap();
    assert_eq!((pm.width(), pm.height()), (4, 8));
    for px in pm.as_bytes().chunks_exact(4) {
        assert_eq!(px, &color);
    }

    let square = rgba_png(4, 2, color.repeat(8));
    let pm = decode_power_of_two(&square, None).unwrap();
    assert_eq!((pm.width(), pm.height()), (4, 2));
}

#[test]
fn save_then_load_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");

    let mut pm = Pixmap::new(3, 2, PixelFormat::Rgb888).unwrap();
    pm.clear(Rgba8::opaque(4, 5, 6));
    save(&pm, &path).unwrap();

    let back = load(&path, None).unwrap();
    assert_eq!(back, pm);

    let grown = load_power_of_two(&path, Some(PixelFormat::Rgba8888)).unwrap();
    assert_eq!((grown.width(), grown.height()), (4, 2));
    assert_eq!(grown.get_pixel(3, 1), Rgba8::opaque(4, 5, 6));
}

#[test]
fn save_and_load_report_path_errors() {
    let dir = tempfile::tempdir().unwrap();
    let pm = Pixmap::new(1, 1, PixelFormat::Alpha).unwrap();

    let err = save(&pm, dir.path().join("canvas.unknownext")).unwrap_err();
    assert!(err.failure_reason().contains("pick image format"));

    let err = load(dir.path().join("missing.png"), None).unwrap_err();
    assert!(err.failure_reason().contains("read image"));
}

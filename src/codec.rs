//! Image file decode/encode through the `image` crate.
//!
//! Decoding lands in one of the byte-per-channel formats directly. Packed 16-bit formats are
//! decoded to RGBA8888 first and converted through the blitter, so they pick up the same
//! truncation as any other write into a packed pixmap.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageBuffer, ImageFormat};

use crate::foundation::error::{PixmapError, PixmapResult};
use crate::mode::ScaleMode;
use crate::pixel::format::PixelFormat;
use crate::pixmap::Pixmap;

/// Decode an encoded image (PNG, JPEG, BMP, ...) held in memory.
///
/// With `requested == None` the format follows the image's channel count: one channel gives
/// [`PixelFormat::Alpha`], two give [`PixelFormat::LuminanceAlpha`], three give
/// [`PixelFormat::Rgb888`], anything else [`PixelFormat::Rgba8888`]. A requested
/// [`PixelFormat::Alpha`] holds the image's gray level, like any single-channel decode.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode(bytes: &[u8], requested: Option<PixelFormat>) -> PixmapResult<Pixmap> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    from_dynamic(img, requested)
}

/// Read and decode the image at `path`. See [`decode`].
pub fn load(path: impl AsRef<Path>, requested: Option<PixelFormat>) -> PixmapResult<Pixmap> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode(&bytes, requested)
}

/// Decode and grow each dimension to the next power of two with bilinear resampling.
pub fn decode_power_of_two(bytes: &[u8], requested: Option<PixelFormat>) -> PixmapResult<Pixmap> {
    grow_to_power_of_two(decode(bytes, requested)?)
}

/// Read, decode and grow to power-of-two dimensions. See [`decode_power_of_two`].
pub fn load_power_of_two(
    path: impl AsRef<Path>,
    requested: Option<PixelFormat>,
) -> PixmapResult<Pixmap> {
    grow_to_power_of_two(load(path, requested)?)
}

/// Encode `pixmap` as `format`.
///
/// RGB565 is widened to RGB888 and RGBA4444 to RGBA8888 first. Container formats that cannot
/// hold the pixmap's channels (JPEG with alpha, for example) fail with the encoder's error.
#[tracing::instrument(skip(pixmap), fields(w = pixmap.width(), h = pixmap.height()))]
pub fn encode(pixmap: &Pixmap, format: ImageFormat) -> PixmapResult<Vec<u8>> {
    let img = to_dynamic(pixmap)?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .with_context(|| format!("encode {format:?}"))?;
    Ok(buf)
}

/// Encode `pixmap` in the format implied by `path`'s extension and write it out.
pub fn save(pixmap: &Pixmap, path: impl AsRef<Path>) -> PixmapResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("pick image format for '{}'", path.display()))?;
    let bytes = encode(pixmap, format)?;
    std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

fn native_format(img: &DynamicImage) -> PixelFormat {
    match img.color().channel_count() {
        1 => PixelFormat::Alpha,
        2 => PixelFormat::LuminanceAlpha,
        3 => PixelFormat::Rgb888,
        _ => PixelFormat::Rgba8888,
    }
}

fn from_dynamic(img: DynamicImage, requested: Option<PixelFormat>) -> PixmapResult<Pixmap> {
    let (width, height) = (img.width(), img.height());
    let format = requested.unwrap_or_else(|| native_format(&img));
    tracing::debug!(width, height, %format, "decoded image");

    let data = match format {
        PixelFormat::Alpha => img.to_luma8().into_raw(),
        PixelFormat::LuminanceAlpha => img.to_luma_alpha8().into_raw(),
        PixelFormat::Rgb888 => img.to_rgb8().into_raw(),
        PixelFormat::Rgba8888 => img.to_rgba8().into_raw(),
        PixelFormat::Rgb565 | PixelFormat::Rgba4444 => {
            let rgba8 = img.to_rgba8().into_raw();
            let rgba = Pixmap::from_raw(width, height, PixelFormat::Rgba8888, rgba8)?;
            return rgba.to_format(format);
        }
    };
    Pixmap::from_raw(width, height, format, data)
}

fn to_dynamic(pixmap: &Pixmap) -> PixmapResult<DynamicImage> {
    let widened;
    let pixmap = match pixmap.format() {
        PixelFormat::Rgb565 => {
            widened = pixmap.to_format(PixelFormat::Rgb888)?;
            &widened
        }
        PixelFormat::Rgba4444 => {
            widened = pixmap.to_format(PixelFormat::Rgba8888)?;
            &widened
        }
        _ => pixmap,
    };

    let (w, h) = (pixmap.width(), pixmap.height());
    let data = pixmap.as_bytes().to_vec();
    let img = match pixmap.format() {
        PixelFormat::Alpha => ImageBuffer::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        PixelFormat::LuminanceAlpha => {
            ImageBuffer::from_raw(w, h, data).map(DynamicImage::ImageLumaA8)
        }
        PixelFormat::Rgb888 => ImageBuffer::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        _ => ImageBuffer::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
    };
    img.ok_or_else(|| {
        PixmapError::codec(format!(
            "{} pixmap {w}x{h} does not fit an image buffer",
            pixmap.format()
        ))
    })
}

fn grow_to_power_of_two(pixmap: Pixmap) -> PixmapResult<Pixmap> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let grown = w.checked_next_power_of_two().zip(h.checked_next_power_of_two());
    let Some((pw, ph)) = grown else {
        return Err(PixmapError::validation(format!(
            "{w}x{h} has no power-of-two size in range"
        )));
    };
    if (pw, ph) == (w, h) {
        return Ok(pixmap);
    }
    tracing::debug!(w, h, pw, ph, "growing to power-of-two size");
    pixmap.rescale(pw, ph, ScaleMode::Bilinear)
}

#[cfg(test)]
#[path = "../tests/unit/codec.rs"]
mod tests;

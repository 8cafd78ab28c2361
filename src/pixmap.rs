use crate::foundation::core::{PixRect, Rgba8};
use crate::foundation::error::{PixmapError, PixmapResult};
use crate::mode::{BlendMode, DrawMode};
use crate::pixel::format::PixelFormat;

/// An owned image buffer tagged with its pixel format.
///
/// The buffer is row-major and tightly packed: `data.len() == width * height * bpp` holds for the
/// whole lifetime of the value. Width, height and format never change; producing a different
/// size or format always yields a new `Pixmap`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocate a zero-filled pixmap.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> PixmapResult<Self> {
        let len = expected_len(width, height, format)?;
        Ok(Self {
            width,
            height,
            format,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing native buffer, e.g. the output of an image decoder.
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> PixmapResult<Self> {
        let len = expected_len(width, height, format)?;
        if data.len() != len {
            return Err(PixmapError::validation(format!(
                "{format} pixmap {width}x{height} expects {len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Native pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per pixel of [`Pixmap::format`].
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The whole pixmap as a rectangle at the origin.
    pub fn bounds(&self) -> PixRect {
        PixRect::from_size(self.width, self.height)
    }

    /// Native buffer, row-major and tightly packed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable native buffer. Its length cannot change.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up the pixmap, returning its native buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Release the pixmap and its buffer. Equivalent to dropping it.
    pub fn release(self) {
        tracing::trace!(
            width = self.width,
            height = self.height,
            format = %self.format,
            "release pixmap"
        );
    }

    /// Whether `(x, y)` addresses a pixel of this pixmap.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read a pixel in canonical form. Out-of-bounds reads return [`Rgba8::TRANSPARENT`].
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgba8 {
        if !self.in_bounds(x, y) {
            return Rgba8::TRANSPARENT;
        }
        self.read(x as usize, y as usize)
    }

    /// Write one pixel, compositing per `mode.blend`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8, mode: DrawMode) {
        if !self.in_bounds(x, y) {
            return;
        }
        self.write(x as usize, y as usize, color, mode.blend);
    }

    /// Overwrite every pixel with `color`, ignoring the blend mode.
    pub fn clear(&mut self, color: Rgba8) {
        let (px, bpp) = self.format.encode_array(color);
        for dst in self.data.chunks_exact_mut(bpp) {
            dst.copy_from_slice(&px[..bpp]);
        }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * self.bytes_per_pixel()
    }

    /// Decode the pixel at an in-bounds position.
    pub(crate) fn read(&self, x: usize, y: usize) -> Rgba8 {
        let off = self.offset(x, y);
        self.format.decode(&self.data[off..off + self.bytes_per_pixel()])
    }

    /// Composite `color` into the pixel at an in-bounds position.
    pub(crate) fn write(&mut self, x: usize, y: usize, color: Rgba8, blend: BlendMode) {
        let format = self.format;
        let off = self.offset(x, y);
        let px = &mut self.data[off..off + format.bytes_per_pixel()];
        let color = if blend.reads_destination() {
            blend.apply(color, format.decode(px))
        } else {
            color
        };
        format.encode(color, px);
    }
}

fn expected_len(width: u32, height: u32, format: PixelFormat) -> PixmapResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixmapError::validation(format!(
            "pixmap dimensions must be positive, got {width}x{height}"
        )));
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(PixmapError::validation(
            "pixmap dimensions exceed the signed coordinate range",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(format.bytes_per_pixel()))
        .ok_or_else(|| PixmapError::validation("pixmap buffer size overflow"))
}

#[cfg(test)]
#[path = "../tests/unit/pixmap.rs"]
mod tests;

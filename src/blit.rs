//! Pixmap-to-pixmap copies with format conversion and scaling.

use crate::foundation::core::{PixRect, Rgba8};
use crate::foundation::error::PixmapResult;
use crate::mode::{BlendMode, DrawMode, ScaleMode};
use crate::pixel::format::PixelFormat;
use crate::pixmap::Pixmap;

/// Copy `src_rect` of `src` into `dst_rect` of `dst`.
///
/// Equal-sized rectangles are copied 1:1; otherwise the region is resampled with
/// `mode.scale`. Every written pixel is converted to `dst`'s format and composited per
/// `mode.blend`. Parts of either rectangle outside their pixmap are skipped.
pub fn draw_pixmap(
    src: &Pixmap,
    dst: &mut Pixmap,
    src_rect: PixRect,
    dst_rect: PixRect,
    mode: DrawMode,
) {
    if src_rect.same_size(dst_rect) {
        blit_same_size(src, dst, src_rect, dst_rect, mode.blend);
        return;
    }
    if dst_rect.width <= 0 || dst_rect.height <= 0 {
        tracing::debug!(?dst_rect, "ignoring scaled blit into an empty destination");
        return;
    }
    tracing::trace!(?src_rect, ?dst_rect, scale = ?mode.scale, "scaled blit");
    match mode.scale {
        ScaleMode::Nearest => blit_nearest(src, dst, src_rect, dst_rect, mode.blend),
        ScaleMode::Bilinear => blit_bilinear(src, dst, src_rect, dst_rect, mode.blend),
    }
}

impl Pixmap {
    /// Draw `src_rect` of `src` into `dst_rect` of `self`. See [`draw_pixmap`].
    pub fn draw_pixmap(
        &mut self,
        src: &Pixmap,
        src_rect: PixRect,
        dst_rect: PixRect,
        mode: DrawMode,
    ) {
        draw_pixmap(src, self, src_rect, dst_rect, mode);
    }

    /// Copy into a new pixmap of `format`. The source is left untouched.
    pub fn to_format(&self, format: PixelFormat) -> PixmapResult<Pixmap> {
        let mut out = Pixmap::new(self.width(), self.height(), format)?;
        let dst_rect = out.bounds();
        draw_pixmap(self, &mut out, self.bounds(), dst_rect, DrawMode::default());
        Ok(out)
    }

    /// Resample into a new `width` x `height` pixmap of the same format, consuming `self`.
    #[tracing::instrument(skip(self), fields(from_w = self.width(), from_h = self.height()))]
    pub fn rescale(self, width: u32, height: u32, scale: ScaleMode) -> PixmapResult<Pixmap> {
        let mut out = Pixmap::new(width, height, self.format())?;
        let mode = DrawMode::new(BlendMode::None, scale);
        let dst_rect = out.bounds();
        draw_pixmap(&self, &mut out, self.bounds(), dst_rect, mode);
        Ok(out)
    }
}

/// Outcome of testing one coordinate pair against both pixmaps along an axis.
enum Axis {
    Skip,
    Stop,
    Visit(usize, usize),
}

/// Negative coordinates are skipped; the first coordinate past either far edge ends the scan.
fn axis(s: i64, d: i64, s_len: u32, d_len: u32) -> Axis {
    if s < 0 || d < 0 {
        return Axis::Skip;
    }
    if s >= i64::from(s_len) || d >= i64::from(d_len) {
        return Axis::Stop;
    }
    Axis::Visit(s as usize, d as usize)
}

fn blit_same_size(
    src: &Pixmap,
    dst: &mut Pixmap,
    src_rect: PixRect,
    dst_rect: PixRect,
    blend: BlendMode,
) {
    for row in 0..i64::from(src_rect.height.max(0)) {
        let sy = i64::from(src_rect.y) + row;
        let dy = i64::from(dst_rect.y) + row;
        let (sy, dy) = match axis(sy, dy, src.height(), dst.height()) {
            Axis::Skip => continue,
            Axis::Stop => break,
            Axis::Visit(sy, dy) => (sy, dy),
        };

        for col in 0..i64::from(src_rect.width.max(0)) {
            let sx = i64::from(src_rect.x) + col;
            let dx = i64::from(dst_rect.x) + col;
            match axis(sx, dx, src.width(), dst.width()) {
                Axis::Skip => continue,
                Axis::Stop => break,
                Axis::Visit(sx, dx) => dst.write(dx, dy, src.read(sx, sy), blend),
            }
        }
    }
}

/// 16.16 fixed-point step: `(src_len << 16) / dst_len + 1`.
fn fixed_ratio(src_len: i32, dst_len: i32) -> i64 {
    (i64::from(src_len) << 16) / i64::from(dst_len) + 1
}

fn blit_nearest(
    src: &Pixmap,
    dst: &mut Pixmap,
    src_rect: PixRect,
    dst_rect: PixRect,
    blend: BlendMode,
) {
    let x_ratio = fixed_ratio(src_rect.width, dst_rect.width);
    let y_ratio = fixed_ratio(src_rect.height, dst_rect.height);

    for i in 0..i64::from(dst_rect.height) {
        let sy = ((i * y_ratio) >> 16) + i64::from(src_rect.y);
        let dy = i + i64::from(dst_rect.y);
        let (sy, dy) = match axis(sy, dy, src.height(), dst.height()) {
            Axis::Skip => continue,
            Axis::Stop => break,
            Axis::Visit(sy, dy) => (sy, dy),
        };

        for j in 0..i64::from(dst_rect.width) {
            let sx = ((j * x_ratio) >> 16) + i64::from(src_rect.x);
            let dx = j + i64::from(dst_rect.x);
            match axis(sx, dx, src.width(), dst.width()) {
                Axis::Skip => continue,
                Axis::Stop => break,
                Axis::Visit(sx, dx) => dst.write(dx, dy, src.read(sx, sy), blend),
            }
        }
    }
}

fn blit_bilinear(
    src: &Pixmap,
    dst: &mut Pixmap,
    src_rect: PixRect,
    dst_rect: PixRect,
    blend: BlendMode,
) {
    let x_ratio = (src_rect.width as f32 - 1.0) / dst_rect.width as f32;
    let y_ratio = (src_rect.height as f32 - 1.0) / dst_rect.height as f32;

    for i in 0..dst_rect.height {
        let fy = y_ratio * i as f32 + src_rect.y as f32;
        let sy = (i as f32 * y_ratio) as i64 + i64::from(src_rect.y);
        let y_diff = fy - sy as f32;
        let dy = i64::from(i) + i64::from(dst_rect.y);
        let (sy, dy) = match axis(sy, dy, src.height(), dst.height()) {
            Axis::Skip => continue,
            Axis::Stop => break,
            Axis::Visit(sy, dy) => (sy, dy),
        };

        for j in 0..dst_rect.width {
            let fx = x_ratio * j as f32 + src_rect.x as f32;
            let sx = (j as f32 * x_ratio) as i64 + i64::from(src_rect.x);
            let x_diff = fx - sx as f32;
            let dx = i64::from(j) + i64::from(dst_rect.x);
            let (sx, dx) = match axis(sx, dx, src.width(), dst.width()) {
                Axis::Skip => continue,
                Axis::Stop => break,
                Axis::Visit(sx, dx) => (sx, dx),
            };

            let c1 = src.read(sx, sy);
            let has_right = sx + 1 < src.width() as usize;
            let has_below = sy + 1 < src.height() as usize;
            let c2 = if has_right { src.read(sx + 1, sy) } else { c1 };
            let c3 = if has_below { src.read(sx, sy + 1) } else { c1 };
            let c4 = if has_right && has_below {
                src.read(sx + 1, sy + 1)
            } else {
                c1
            };

            dst.write(dx, dy, bilerp([c1, c2, c3, c4], x_diff, y_diff), blend);
        }
    }
}

/// Weight the four samples `[top_left, top_right, bottom_left, bottom_right]` channel by
/// channel, truncating to 8 bits.
///
/// Written as nested lerps, which is the same weighting as
/// `(1-x)(1-y)·c1 + x(1-y)·c2 + (1-x)y·c3 + xy·c4` but exact for uniform samples.
fn bilerp(samples: [Rgba8; 4], x_diff: f32, y_diff: f32) -> Rgba8 {
    let [c1, c2, c3, c4] = samples.map(Rgba8::to_array);
    let mut out = [0u8; 4];
    for ch in 0..4 {
        let (a, b, c, d) = (
            f32::from(c1[ch]),
            f32::from(c2[ch]),
            f32::from(c3[ch]),
            f32::from(c4[ch]),
        );
        let top = a + (b - a) * x_diff;
        let bottom = c + (d - c) * x_diff;
        out[ch] = (top + (bottom - top) * y_diff) as u8;
    }
    Rgba8::from_array(out)
}

#[cfg(test)]
#[path = "../tests/unit/blit.rs"]
mod tests;

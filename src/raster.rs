//! Clipped drawing primitives.
//!
//! Every primitive silently skips pixels outside `[0, width) x [0, height)` and writes through
//! the same per-pixel path as [`Pixmap::set_pixel`], so blending follows the [`DrawMode`]
//! passed to the call.

use crate::foundation::core::{PixRect, Rgba8};
use crate::mode::{BlendMode, DrawMode};
use crate::pixmap::Pixmap;

impl Pixmap {
    /// Horizontal span from `x1` to `x2` inclusive on row `y`, endpoints in any order.
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgba8, mode: DrawMode) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        if x1 >= self.width() as i32 || x2 < 0 {
            return;
        }
        let start = x1.max(0) as usize;
        let end = x2.min(self.width() as i32 - 1) as usize;
        for x in start..=end {
            self.write(x, y as usize, color, mode.blend);
        }
    }

    /// Vertical span from `y1` to `y2` inclusive on column `x`, endpoints in any order.
    pub fn vline(&mut self, y1: i32, y2: i32, x: i32, color: Rgba8, mode: DrawMode) {
        if x < 0 || x >= self.width() as i32 {
            return;
        }
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        if y1 >= self.height() as i32 || y2 < 0 {
            return;
        }
        let start = y1.max(0) as usize;
        let end = y2.min(self.height() as i32 - 1) as usize;
        for y in start..=end {
            self.write(x as usize, y, color, mode.blend);
        }
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba8,
        mode: DrawMode,
    ) {
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (mut dx, mut dy) = (x1 - x, y1 - y);

        let step_x = if dx < 0 {
            dx = -dx;
            -1
        } else {
            1
        };
        let step_y = if dy < 0 {
            dy = -dy;
            -1
        } else {
            1
        };
        dx <<= 1;
        dy <<= 1;

        self.plot(x, y, color, mode.blend);
        if dx > dy {
            let mut fraction = dy - (dx >> 1);
            while x != x1 {
                if fraction >= 0 {
                    y += step_y;
                    fraction -= dx;
                }
                x += step_x;
                fraction += dy;
                self.plot(x, y, color, mode.blend);
            }
        } else {
            let mut fraction = dx - (dy >> 1);
            while y != y1 {
                if fraction >= 0 {
                    x += step_x;
                    fraction -= dy;
                }
                y += step_y;
                fraction += dx;
                self.plot(x, y, color, mode.blend);
            }
        }
    }

    /// One-pixel outline of `rect`. Empty rectangles draw nothing.
    pub fn draw_rect(&mut self, rect: PixRect, color: Rgba8, mode: DrawMode) {
        if rect.is_empty() {
            return;
        }
        let PixRect {
            x,
            y,
            width,
            height,
        } = rect;
        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);
        self.hline(x, right, y, color, mode);
        self.hline(x, right, bottom, color, mode);
        self.vline(y, bottom, x, color, mode);
        self.vline(y, bottom, right, color, mode);
    }

    /// Fill `rect`, one horizontal span per scan line.
    pub fn fill_rect(&mut self, rect: PixRect, color: Rgba8, mode: DrawMode) {
        if rect.is_empty() {
            return;
        }
        let (w, h) = (self.width() as i32, self.height() as i32);
        let x2 = rect.x.saturating_add(rect.width - 1);
        let y2 = rect.y.saturating_add(rect.height - 1);
        if rect.x >= w || rect.y >= h || x2 < 0 || y2 < 0 {
            return;
        }

        let x1 = rect.x.max(0);
        let x2 = x2.min(w - 1);
        for y in rect.y.max(0)..=y2.min(h - 1) {
            self.hline(x1, x2, y, color, mode);
        }
    }

    /// Midpoint circle outline centred on `(cx, cy)`. Negative radii draw nothing.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba8, mode: DrawMode) {
        if radius < 0 {
            return;
        }
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let mut px = 0i64;
        let mut py = i64::from(radius);
        let mut p = (5 - py * 4) / 4;

        self.circle_points(cx, cy, px, py, color, mode.blend);
        while px < py {
            px += 1;
            if p < 0 {
                p += 2 * px + 1;
            } else {
                py -= 1;
                p += 2 * (px - py) + 1;
            }
            self.circle_points(cx, cy, px, py, color, mode.blend);
        }
    }

    /// Filled disk centred on `(cx, cy)` built from horizontal spans. Negative radii draw
    /// nothing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba8, mode: DrawMode) {
        if radius < 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let mut f = 1 - r;
        let mut dd_f_x = 1;
        let mut dd_f_y = -2 * r;
        let mut px = 0;
        let mut py = r;

        self.span(cx, cx, cy + r, color, mode);
        self.span(cx, cx, cy - r, color, mode);
        self.span(cx - r, cx + r, cy, color, mode);

        while px < py {
            if f >= 0 {
                py -= 1;
                dd_f_y += 2;
                f += dd_f_y;
            }
            px += 1;
            dd_f_x += 2;
            f += dd_f_x;
            self.span(cx - px, cx + px, cy + py, color, mode);
            self.span(cx - px, cx + px, cy - py, color, mode);
            self.span(cx - py, cx + py, cy + px, color, mode);
            self.span(cx - py, cx + py, cy - px, color, mode);
        }
    }

    fn span(&mut self, x1: i64, x2: i64, y: i64, color: Rgba8, mode: DrawMode) {
        self.hline(clamp_i32(x1), clamp_i32(x2), clamp_i32(y), color, mode);
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba8, blend: BlendMode) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.write(x as usize, y as usize, color, blend);
    }

    /// Reflect one octant point into its symmetric positions, each plotted once.
    fn circle_points(
        &mut self,
        cx: i64,
        cy: i64,
        x: i64,
        y: i64,
        color: Rgba8,
        blend: BlendMode,
    ) {
        if x == 0 {
            if y == 0 {
                self.plot(cx, cy, color, blend);
                return;
            }
            self.plot(cx, cy + y, color, blend);
            self.plot(cx, cy - y, color, blend);
            self.plot(cx + y, cy, color, blend);
            self.plot(cx - y, cy, color, blend);
        } else if x == y {
            self.plot(cx + x, cy + y, color, blend);
            self.plot(cx - x, cy + y, color, blend);
            self.plot(cx + x, cy - y, color, blend);
            self.plot(cx - x, cy - y, color, blend);
        } else if x < y {
            self.plot(cx + x, cy + y, color, blend);
            self.plot(cx - x, cy + y, color, blend);
            self.plot(cx + x, cy - y, color, blend);
            self.plot(cx - x, cy - y, color, blend);
            self.plot(cx + y, cy + x, color, blend);
            self.plot(cx - y, cy + x, color, blend);
            self.plot(cx + y, cy - x, color, blend);
            self.plot(cx - y, cy - x, color, blend);
        }
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;

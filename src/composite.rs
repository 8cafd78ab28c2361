use crate::foundation::core::Rgba8;
use crate::mode::BlendMode;

/// Source-over compositing of straight-alpha colours.
///
/// Colour channels move from `dst` towards `src` by `src.a / 255` in integer arithmetic
/// (truncating toward zero). Alpha is `255 * (1 - (1 - sa) * (1 - da))`, evaluated in `f32` and
/// truncated.
pub fn over(src: Rgba8, dst: Rgba8) -> Rgba8 {
    if src.a == 0 {
        return dst;
    }

    let sa = i32::from(src.a);
    let mix = |s: u8, d: u8| -> u8 {
        let (s, d) = (i32::from(s), i32::from(d));
        (d + sa * (s - d) / 255) as u8
    };

    Rgba8 {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: over_alpha(src.a, dst.a),
    }
}

fn over_alpha(sa: u8, da: u8) -> u8 {
    let (sa, da) = (f32::from(sa), f32::from(da));
    // expanded so that sa == 0 and sa == 255 are exact
    (sa + da - sa * da / 255.0) as u8
}

impl BlendMode {
    /// Resolve the colour a write of `src` over existing `dst` produces under this mode.
    pub fn apply(self, src: Rgba8, dst: Rgba8) -> Rgba8 {
        match self {
            BlendMode::None => src,
            BlendMode::SrcOver => over(src, dst),
        }
    }

    /// Whether writes must read the destination pixel first.
    pub const fn reads_destination(self) -> bool {
        matches!(self, BlendMode::SrcOver)
    }
}

#[cfg(test)]
#[path = "../tests/unit/composite.rs"]
mod tests;

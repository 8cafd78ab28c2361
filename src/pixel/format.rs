use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixmapError, PixmapResult};
use crate::pixel::lut::{EXPAND4, EXPAND5, EXPAND6};

/// Native pixel layout of a [`crate::Pixmap`] buffer.
///
/// Components of the byte-oriented formats are stored in the order they appear in the name.
/// `Rgb565` and `Rgba4444` are 16-bit words stored little-endian, with red in the high bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 1 byte: alpha. Decodes as white with that alpha.
    Alpha,
    /// 2 bytes: luminance, alpha.
    LuminanceAlpha,
    /// 3 bytes: red, green, blue.
    Rgb888,
    /// 4 bytes: red, green, blue, alpha.
    Rgba8888,
    /// 16-bit 5/6/5 bit-field.
    Rgb565,
    /// 16-bit 4/4/4/4 bit-field.
    Rgba4444,
}

impl PixelFormat {
    /// Every format, in numeric code order.
    pub const ALL: [PixelFormat; 6] = [
        PixelFormat::Alpha,
        PixelFormat::LuminanceAlpha,
        PixelFormat::Rgb888,
        PixelFormat::Rgba8888,
        PixelFormat::Rgb565,
        PixelFormat::Rgba4444,
    ];

    /// Size of one native pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Alpha => 1,
            PixelFormat::LuminanceAlpha | PixelFormat::Rgb565 | PixelFormat::Rgba4444 => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
        }
    }

    /// Stable numeric code (1..=6) used by external callers and file headers.
    pub const fn code(self) -> u32 {
        match self {
            PixelFormat::Alpha => 1,
            PixelFormat::LuminanceAlpha => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb565 => 5,
            PixelFormat::Rgba4444 => 6,
        }
    }

    /// Whether the format stores an alpha channel.
    pub const fn has_alpha(self) -> bool {
        !matches!(self, PixelFormat::Rgb888 | PixelFormat::Rgb565)
    }

    /// Decode one native pixel.
    ///
    /// # Panics
    ///
    /// Panics if `px` is shorter than [`Self::bytes_per_pixel`].
    pub fn decode(self, px: &[u8]) -> Rgba8 {
        match self {
            PixelFormat::Alpha => Rgba8::new(255, 255, 255, px[0]),
            PixelFormat::LuminanceAlpha => Rgba8::new(px[0], px[0], px[0], px[1]),
            PixelFormat::Rgb888 => Rgba8::opaque(px[0], px[1], px[2]),
            PixelFormat::Rgba8888 => Rgba8::new(px[0], px[1], px[2], px[3]),
            PixelFormat::Rgb565 => {
                let v = u16::from_le_bytes([px[0], px[1]]);
                Rgba8::opaque(
                    EXPAND5[usize::from((v >> 11) & 0x1f)],
                    EXPAND6[usize::from((v >> 5) & 0x3f)],
                    EXPAND5[usize::from(v & 0x1f)],
                )
            }
            PixelFormat::Rgba4444 => {
                let v = u16::from_le_bytes([px[0], px[1]]);
                Rgba8::new(
                    EXPAND4[usize::from((v >> 12) & 0xf)],
                    EXPAND4[usize::from((v >> 8) & 0xf)],
                    EXPAND4[usize::from((v >> 4) & 0xf)],
                    EXPAND4[usize::from(v & 0xf)],
                )
            }
        }
    }

    /// Encode `c` into the first [`Self::bytes_per_pixel`] bytes of `out`.
    ///
    /// Narrow channels are truncated, never dithered. [`Self::encode_array`] needs no buffer.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`Self::bytes_per_pixel`].
    pub fn encode(self, c: Rgba8, out: &mut [u8]) {
        match self {
            PixelFormat::Alpha => out[0] = c.a,
            PixelFormat::LuminanceAlpha => {
                out[0] = luminance(c);
                out[1] = c.a;
            }
            PixelFormat::Rgb888 => out[..3].copy_from_slice(&[c.r, c.g, c.b]),
            PixelFormat::Rgba8888 => out[..4].copy_from_slice(&c.to_array()),
            PixelFormat::Rgb565 => {
                let v = (u16::from(c.r >> 3) << 11)
                    | (u16::from(c.g >> 2) << 5)
                    | u16::from(c.b >> 3);
                out[..2].copy_from_slice(&v.to_le_bytes());
            }
            PixelFormat::Rgba4444 => {
                let v = (u16::from(c.r >> 4) << 12)
                    | (u16::from(c.g >> 4) << 8)
                    | (u16::from(c.b >> 4) << 4)
                    | u16::from(c.a >> 4);
                out[..2].copy_from_slice(&v.to_le_bytes());
            }
        }
    }

    /// Encode into a fixed array, returning the array and the number of meaningful bytes.
    pub fn encode_array(self, c: Rgba8) -> ([u8; 4], usize) {
        let mut px = [0u8; 4];
        let bpp = self.bytes_per_pixel();
        self.encode(c, &mut px[..bpp]);
        (px, bpp)
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = PixmapError;

    fn try_from(code: u32) -> PixmapResult<Self> {
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| PixmapError::format(format!("unknown pixel format code {code}")))
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PixelFormat::Alpha => "alpha",
            PixelFormat::LuminanceAlpha => "luminance_alpha",
            PixelFormat::Rgb888 => "rgb888",
            PixelFormat::Rgba8888 => "rgba8888",
            PixelFormat::Rgb565 => "rgb565",
            PixelFormat::Rgba4444 => "rgba4444",
        };
        f.write_str(name)
    }
}

/// Rec. 709 luma with weights 0.2126 / 0.7152 / 0.0722, truncated.
pub fn luminance(c: Rgba8) -> u8 {
    let sum = 2126 * u32::from(c.r) + 7152 * u32::from(c.g) + 722 * u32::from(c.b);
    (sum / 10_000) as u8
}

/// Bytes per pixel of `format`.
pub const fn bytes_per_pixel(format: PixelFormat) -> usize {
    format.bytes_per_pixel()
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/format.rs"]
mod tests;

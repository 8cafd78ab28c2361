use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{PixmapError, PixmapResult};

/// How a write combines with the pixel already in the destination.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Overwrite the destination.
    #[default]
    None,
    /// Straight-alpha source-over, see [`crate::over`].
    SrcOver,
}

/// Resampling used by scaling blits.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// 16.16 fixed-point nearest neighbour.
    #[default]
    Nearest,
    /// Four-tap bilinear interpolation.
    Bilinear,
}

/// Blend and scale configuration handed to every drawing and blitting call.
///
/// The value is read once per call, so every pixel of one draw sees the same mode.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DrawMode {
    #[serde(default)]
    /// Compositing applied to every written pixel.
    pub blend: BlendMode,
    #[serde(default)]
    /// Sampling used when a blit changes size.
    pub scale: ScaleMode,
}

impl DrawMode {
    /// Mode from explicit blend and scale settings.
    pub const fn new(blend: BlendMode, scale: ScaleMode) -> Self {
        Self { blend, scale }
    }

    /// Replace the blend mode.
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Replace the scale mode.
    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.scale = scale;
    }

    /// Copy with a different blend mode.
    pub const fn with_blend(self, blend: BlendMode) -> Self {
        Self { blend, ..self }
    }

    /// Copy with a different scale mode.
    pub const fn with_scale(self, scale: ScaleMode) -> Self {
        Self { scale, ..self }
    }

    /// Parse a mode from JSON such as `{"blend": "src_over", "scale": "bilinear"}`.
    /// Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> PixmapResult<Self> {
        serde_json::from_str(s).map_err(|e| PixmapError::config(format!("parse draw mode: {e}")))
    }

    /// Parse a mode from a JSON reader. See [`DrawMode::from_json_str`].
    pub fn from_reader<R: std::io::Read>(r: R) -> PixmapResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PixmapError::config(format!("parse draw mode: {e}")))
    }

    /// Read and parse a JSON mode file.
    pub fn from_path(path: impl AsRef<Path>) -> PixmapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixmapError::config(format!("open draw mode '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/mode.rs"]
mod tests;

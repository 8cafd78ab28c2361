//! pixmap2d is a small software rasterizer over owned pixel buffers.
//!
//! A [`Pixmap`] is a width x height grid of pixels stored in one of six [`PixelFormat`]s. All
//! drawing goes through a canonical straight-alpha colour, [`Rgba8`], which is converted to and
//! from the buffer's native layout on every read and write.
//!
//! # Overview
//!
//! 1. **Allocate**: [`Pixmap::new`], [`Pixmap::from_raw`] or [`codec::decode`].
//! 2. **Draw**: pixels, spans, lines, rectangles and circles, all clipped to the pixmap.
//! 3. **Blit**: [`draw_pixmap`] copies a region between pixmaps, converting formats and scaling
//!    with nearest or bilinear sampling.
//! 4. **Encode** (optional): [`codec::encode`] / [`codec::save`] through the `image` crate.
//!
//! Every operation that writes takes a [`DrawMode`] by value; there is no shared mode state, so
//! distinct pixmaps can be drawn from different threads without coordination.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blit;
mod composite;
mod foundation;
mod mode;
mod pixel;
mod pixmap;
mod raster;

pub mod codec;

pub use blit::draw_pixmap;
pub use composite::over;
pub use foundation::core::{PixRect, Rgba8};
pub use foundation::error::{PixmapError, PixmapResult};
pub use mode::{BlendMode, DrawMode, ScaleMode};
pub use pixel::format::{PixelFormat, bytes_per_pixel, luminance};
pub use pixmap::Pixmap;

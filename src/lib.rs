// THEORY:
// This file is the main entry point for the `argb_raster` library crate. It exposes a
// fixed-layout 32-bit pixel buffer and the three pipelines that run over it:
//
// 1.  **Grayscale Reduction** (`core_modules::grayscale`): color to one luminance byte
//     per pixel, with a lookup-table fast path for large buffers.
// 2.  **Alpha Compositing** (`core_modules::composite`): clipped, binary-opacity copies
//     of a region of one image onto another.
// 3.  **Pixel Traversal** (`core_modules::cursor`): a restartable cursor handing out
//     each pixel by mutable reference.
//
// The pixel itself (`core_modules::pixel`) and the format converter
// (`core_modules::converter`) sit underneath all three. The most used types are
// re-exported here so callers rarely need to reach into `core_modules`.

pub mod core_modules;
pub mod error;

pub use crate::core_modules::composite::{CopyRect, Region};
pub use crate::core_modules::converter::{Argb32Converter, ColorConverter};
pub use crate::core_modules::cursor::PixelCursor;
pub use crate::core_modules::geometry::{Point, Size};
pub use crate::core_modules::grayscale::{GrayStrategy, GrayWeights, LUT_THRESHOLD};
pub use crate::core_modules::image::{Image, ImageArgb32, ImageU8};
pub use crate::core_modules::pixel::{Argb32, Rgb24};
pub use crate::core_modules::raster::Raster;
pub use crate::error::{RasterError, Result};

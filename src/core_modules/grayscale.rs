// THEORY:
// The grayscale reducer collapses every `Argb32` into one luminance byte using a
// weighted sum of its red, green and blue channels. It has two execution strategies
// and picks one from the buffer size alone:
//
// 1.  **Direct**: evaluate `R*rW + G*gW + B*bW` in floating point for every pixel and
//     truncate toward zero. No setup, so it wins on small buffers.
// 2.  **Lookup Table**: for buffers of `LUT_THRESHOLD` pixels and more, precompute one
//     256-entry integer table per channel in `2^10` fixed point. Each pixel then costs
//     three table reads, two adds and a shift. The blue share is the remainder of the
//     scale after red and green, so the three shares always add up to exactly `2^10`.
//
// Shares and table entries are `i64` and accumulate with saturating adds, so weights
// of any magnitude clamp into `0..=255` the same way the direct path does.
//
// Both strategies agree to within one gray level. The transparency-aware reduction
// always takes the direct path: the per-pixel alpha branch makes the tables pointless.

use crate::core_modules::image::{ImageArgb32, ImageU8};
use crate::core_modules::pixel::{Argb32, BLUE_WEIGHT, GREEN_WEIGHT, Luminance, RED_WEIGHT};
use crate::core_modules::raster::Raster;
use crate::error::{RasterError, Result};
use log::debug;

/// Pixel count from which the lookup-table strategy is used.
pub const LUT_THRESHOLD: usize = 1024;
/// Fractional bits of the lookup-table fixed-point representation.
pub const FIXED_POINT_BITS: u32 = 10;

const FIXED_POINT_SCALE: i64 = 1 << FIXED_POINT_BITS;
const TABLE_SIZE: usize = 256;

/// Channel weights for the grayscale reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayWeights {
    pub red: Luminance,
    pub green: Luminance,
    pub blue: Luminance,
}

impl GrayWeights {
    /// Rec. 601 luma weights.
    pub const REC601: Self = Self::new(RED_WEIGHT, GREEN_WEIGHT, BLUE_WEIGHT);

    pub const fn new(red: Luminance, green: Luminance, blue: Luminance) -> Self {
        GrayWeights { red, green, blue }
    }

    #[inline]
    fn apply(&self, pixel: Argb32) -> u8 {
        (pixel.red as Luminance * self.red
            + pixel.green as Luminance * self.green
            + pixel.blue as Luminance * self.blue) as u8
    }

    /// Fixed-point shares of red, green and blue. Blue takes the remainder.
    ///
    /// `as i64` saturates, so huge weights pin to `i64::MIN..=i64::MAX`.
    fn fixed_point_shares(&self) -> (i64, i64, i64) {
        let scale = FIXED_POINT_SCALE as Luminance;
        let red = (self.red * scale).round() as i64;
        let green = (self.green * scale).round() as i64;
        let blue = FIXED_POINT_SCALE.saturating_sub(red).saturating_sub(green);
        (red, green, blue)
    }
}

impl Default for GrayWeights {
    fn default() -> Self {
        Self::REC601
    }
}

/// How a buffer is reduced to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayStrategy {
    /// Floating-point weighted sum per pixel.
    Direct,
    /// Fixed-point per-channel lookup tables.
    LookupTable,
}

impl GrayStrategy {
    /// The strategy used for a buffer of `len` pixels.
    pub fn for_len(len: usize) -> Self {
        if len < LUT_THRESHOLD {
            GrayStrategy::Direct
        } else {
            GrayStrategy::LookupTable
        }
    }

    /// Reduce `src` into the front of `dst` and return the number of pixels written.
    ///
    /// Fails with [`RasterError::BufferTooSmall`] when `dst` is shorter than `src`.
    pub fn reduce(self, src: &[Argb32], dst: &mut [u8], weights: GrayWeights) -> Result<usize> {
        if dst.len() < src.len() {
            return Err(RasterError::BufferTooSmall {
                needed: src.len(),
                available: dst.len(),
            });
        }
        self.reduce_into(src, &mut dst[..src.len()], weights);
        Ok(src.len())
    }

    /// `src` and `dst` have the same length.
    fn reduce_into(self, src: &[Argb32], dst: &mut [u8], weights: GrayWeights) {
        match self {
            GrayStrategy::Direct => {
                for (to, from) in dst.iter_mut().zip(src) {
                    *to = weights.apply(*from);
                }
            }
            GrayStrategy::LookupTable => {
                let tables = LumaTables::new(weights);
                for (to, from) in dst.iter_mut().zip(src) {
                    *to = tables.luma(*from);
                }
            }
        }
    }
}

struct LumaTables {
    red: [i64; TABLE_SIZE],
    green: [i64; TABLE_SIZE],
    blue: [i64; TABLE_SIZE],
}

impl LumaTables {
    fn new(weights: GrayWeights) -> Self {
        let (red_share, green_share, blue_share) = weights.fixed_point_shares();
        let mut tables = LumaTables {
            red: [0; TABLE_SIZE],
            green: [0; TABLE_SIZE],
            blue: [0; TABLE_SIZE],
        };
        for i in 1..TABLE_SIZE {
            tables.red[i] = tables.red[i - 1].saturating_add(red_share);
            tables.green[i] = tables.green[i - 1].saturating_add(green_share);
            tables.blue[i] = tables.blue[i - 1].saturating_add(blue_share);
        }
        tables
    }

    #[inline]
    fn luma(&self, pixel: Argb32) -> u8 {
        // Each table is indexed by its own channel.
        let sum = self.blue[pixel.blue as usize]
            .saturating_add(self.green[pixel.green as usize])
            .saturating_add(self.red[pixel.red as usize]);
        (sum >> FIXED_POINT_BITS).clamp(0, 255) as u8
    }
}

impl ImageArgb32 {
    /// Reduce to gray with the Rec. 601 weights.
    pub fn to_grayscale_image(&self) -> ImageU8 {
        self.to_grayscale_image_weighted(GrayWeights::REC601)
    }

    /// Reduce to gray with the Rec. 601 weights, mapping fully transparent pixels to `transparent`.
    pub fn to_grayscale_image_with_transparent(&self, transparent: u8) -> ImageU8 {
        self.to_grayscale_image_weighted_transparent(GrayWeights::REC601, transparent)
    }

    /// Reduce to gray, mapping every pixel with `alpha == 0` to `transparent`.
    ///
    /// Always evaluated with the direct strategy regardless of size.
    pub fn to_grayscale_image_weighted_transparent(
        &self,
        weights: GrayWeights,
        transparent: u8,
    ) -> ImageU8 {
        let mut gray = ImageU8::new(self.width(), self.height());
        for (to, from) in gray.iter_mut().zip(self.iter()) {
            *to = if from.alpha == 0 {
                transparent
            } else {
                weights.apply(*from)
            };
        }
        gray
    }

    /// Reduce to gray with explicit weights. The strategy is chosen by [`GrayStrategy::for_len`].
    pub fn to_grayscale_image_weighted(&self, weights: GrayWeights) -> ImageU8 {
        let mut gray = ImageU8::new(self.width(), self.height());
        let strategy = GrayStrategy::for_len(self.len());
        debug!(
            "grayscale {}x{} ({} px) via {:?}",
            self.width(),
            self.height(),
            self.len(),
            strategy
        );
        strategy.reduce_into(self.as_slice(), gray.as_mut_slice(), weights);
        gray
    }
}

// THEORY:
// `Image` is the owner of a pixel buffer. It is intentionally thin: it allocates a
// `Vec` of exactly `width * height` pixels, keeps the dimensions next to it, and
// never resizes the buffer in place. A different size means a different image.
//
// The two concrete images the raster works with are `ImageArgb32` (color) and
// `ImageU8` (grayscale). The interesting operations on them live in their own
// modules (`grayscale`, `composite`, `cursor`); this module only knows how to hold
// and index the data.

use crate::core_modules::converter::{Argb32Converter, ColorConverter};
use crate::core_modules::pixel::{Argb32, Rgb24};
use crate::core_modules::raster::Raster;
use crate::error::{RasterError, Result};

/// Owned row-major pixel buffer (stride == width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

/// A 32-bit BGRA color image.
pub type ImageArgb32 = Image<Argb32>;
/// A single byte per pixel grayscale image.
pub type ImageU8 = Image<u8>;

impl<P: Copy + Default> Image<P> {
    /// Construct a zero-initialized image of size `width × height`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. See [`Image::try_new`].
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, P::default())
    }

    /// Like [`Image::new`], but reports overflowing dimensions as an error.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        Self::try_filled(width, height, P::default())
    }
}

impl<P: Copy> Image<P> {
    /// Construct an image with every pixel set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. See [`Image::try_filled`].
    pub fn filled(width: usize, height: usize, value: P) -> Self {
        match Self::try_filled(width, height, value) {
            Ok(image) => image,
            Err(_) => panic!("image dimensions {width}x{height} overflow the pixel count"),
        }
    }

    /// Like [`Image::filled`], but reports overflowing dimensions as an error.
    pub fn try_filled(width: usize, height: usize, value: P) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(RasterError::DimensionMismatch {
                width,
                height,
                len: 0,
            })?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; len],
        })
    }
}

impl<P> Image<P> {
    /// Wrap an existing buffer. Fails unless it holds exactly `width * height` pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<P>) -> Result<Self> {
        match width.checked_mul(height) {
            Some(expected) if expected == pixels.len() => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ => Err(RasterError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            }),
        }
    }

    pub fn as_slice(&self) -> &[P] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.index(x, y).map(|i| &self.pixels[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut P> {
        self.index(x, y).map(move |i| &mut self.pixels[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.pixels.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, P> {
        self.pixels.iter_mut()
    }
}

impl<P: Copy> Raster for Image<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn pixels(&self) -> &[P] {
        &self.pixels
    }
    #[inline]
    fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }
}

impl<'a, P> IntoIterator for &'a Image<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

impl<'a, P> IntoIterator for &'a mut Image<P> {
    type Item = &'a mut P;
    type IntoIter = std::slice::IterMut<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter_mut()
    }
}

impl ImageArgb32 {
    /// Build from raw bytes already in Blue, Green, Red, Alpha order.
    pub fn from_bgra_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let mut image = Self::try_new(width, height)?;
        let written = Argb32Converter.copy_from_bytes(bytes, image.as_mut_slice())?;
        image.ensure_filled(written)?;
        Ok(image)
    }

    /// Build by widening 24-bit samples to opaque 32-bit pixels.
    pub fn from_rgb24(width: usize, height: usize, samples: &[Rgb24]) -> Result<Self> {
        let mut image = Self::try_new(width, height)?;
        let written = Argb32Converter.copy_from_rgb24(samples, image.as_mut_slice())?;
        image.ensure_filled(written)?;
        Ok(image)
    }

    /// Build an opaque color image whose channels all repeat the gray value.
    pub fn from_gray(gray: &ImageU8) -> Self {
        let mut image = Self::new(gray.width(), gray.height());
        for (to, &value) in image.iter_mut().zip(gray.as_slice()) {
            *to = Argb32::rgb(value, value, value);
        }
        image
    }

    /// The buffer as raw Blue, Green, Red, Alpha bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    fn ensure_filled(&self, written: usize) -> Result<()> {
        if written == self.len() {
            Ok(())
        } else {
            Err(RasterError::DimensionMismatch {
                width: self.width,
                height: self.height,
                len: written,
            })
        }
    }
}

// THEORY:
// The converter is how a pixel buffer gets filled from data in some other pixel
// representation. A container hands it a source slice and its own destination slice;
// the converter writes one destination pixel per source unit and reports how many
// it wrote.
//
// Sources that are already laid out like the destination (`Argb32`, raw BGRA bytes)
// are plain memory copies. Everything else (`Rgb24`, gray bytes) is widened one
// unit at a time. Destination capacity is checked up front so a short buffer is a
// reported error instead of an out-of-bounds write.

use crate::core_modules::pixel::{Argb32, CHANNELS, Rgb24};
use crate::error::{RasterError, Result};
use log::debug;

/// Fills a destination buffer of `Self::Pixel` from foreign pixel representations.
pub trait ColorConverter {
    type Pixel;

    /// Widen 24-bit color samples.
    fn copy_from_rgb24(&self, from: &[Rgb24], to: &mut [Self::Pixel]) -> Result<usize>;

    /// Copy 32-bit pixels.
    fn copy_from_argb32(&self, from: &[Argb32], to: &mut [Self::Pixel]) -> Result<usize>;

    /// Widen single-byte gray samples.
    fn copy_from_gray(&self, from: &[u8], to: &mut [Self::Pixel]) -> Result<usize>;

    /// Reinterpret raw bytes already in the destination's channel order.
    fn copy_from_bytes(&self, from: &[u8], to: &mut [Self::Pixel]) -> Result<usize>;
}

/// Converter producing `Argb32` pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argb32Converter;

fn ensure_capacity(needed: usize, available: usize) -> Result<()> {
    if needed > available {
        return Err(RasterError::BufferTooSmall { needed, available });
    }
    Ok(())
}

impl ColorConverter for Argb32Converter {
    type Pixel = Argb32;

    fn copy_from_rgb24(&self, from: &[Rgb24], to: &mut [Argb32]) -> Result<usize> {
        ensure_capacity(from.len(), to.len())?;
        debug!("widening {} rgb24 samples to argb32", from.len());
        for (dst, src) in to.iter_mut().zip(from) {
            *dst = Argb32::from(*src);
        }
        Ok(from.len())
    }

    fn copy_from_argb32(&self, from: &[Argb32], to: &mut [Argb32]) -> Result<usize> {
        ensure_capacity(from.len(), to.len())?;
        to[..from.len()].copy_from_slice(from);
        Ok(from.len())
    }

    fn copy_from_gray(&self, from: &[u8], to: &mut [Argb32]) -> Result<usize> {
        ensure_capacity(from.len(), to.len())?;
        debug!("widening {} gray samples to argb32", from.len());
        for (dst, &v) in to.iter_mut().zip(from) {
            *dst = Argb32::rgb(v, v, v);
        }
        Ok(from.len())
    }

    fn copy_from_bytes(&self, from: &[u8], to: &mut [Argb32]) -> Result<usize> {
        if from.len() % CHANNELS != 0 {
            return Err(RasterError::RaggedBytes { len: from.len() });
        }
        let count = from.len() / CHANNELS;
        ensure_capacity(count, to.len())?;
        let dst: &mut [u8] = bytemuck::cast_slice_mut(&mut to[..count]);
        dst.copy_from_slice(from);
        Ok(count)
    }
}

//! Error types for argb_raster.
//!
//! The pixel pipelines themselves are total. Errors only come from the
//! boundary where buffers are built or filled from foreign data.

use thiserror::Error;

/// Errors raised when constructing or filling pixel buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// The supplied buffer does not hold exactly `width * height` pixels.
    #[error("buffer of {len} pixels does not match {width}x{height}")]
    DimensionMismatch {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Actual number of pixels supplied.
        len: usize,
    },

    /// A destination cannot hold the number of pixels being written.
    #[error("destination holds {available} pixels, {needed} required")]
    BufferTooSmall {
        /// Pixels the source would produce.
        needed: usize,
        /// Pixels the destination can hold.
        available: usize,
    },

    /// Raw BGRA bytes whose length is not a multiple of four.
    #[error("raw pixel data of {len} bytes is not a whole number of 4-byte pixels")]
    RaggedBytes {
        /// Byte length of the source.
        len: usize,
    },
}

/// Result type for argb_raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;

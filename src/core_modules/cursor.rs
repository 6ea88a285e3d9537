// THEORY:
// `PixelCursor` is a restartable, forward-only walk over an image's pixels that hands
// out each pixel by mutable reference. It is a position (an index) plus a borrow of
// the buffer, so it cannot outlive the image it walks.
//
// The contract is "current, then advance":
// - A new (or rewound) cursor sits on pixel 0.
// - `advance` answers whether the position it is *leaving* was inside the buffer,
//   then moves forward by one pixel no matter what.
// - `next_pixel` yields the pixel at the position it is leaving and advances, which
//   visits every pixel exactly once, in order.
//
// So a buffer of N pixels answers `true` to exactly N calls of `advance` before the
// first `false`, and `rewind` starts the same walk over again.

use crate::core_modules::image::ImageArgb32;
use crate::core_modules::pixel::Argb32;

/// Forward traversal over a pixel buffer with mutable access to each pixel.
#[derive(Debug)]
pub struct PixelCursor<'a> {
    pixels: &'a mut [Argb32],
    position: usize,
}

impl<'a> PixelCursor<'a> {
    pub fn new(pixels: &'a mut [Argb32]) -> Self {
        PixelCursor {
            pixels,
            position: 0,
        }
    }

    /// Reports whether the pre-advance position was in bounds, then steps forward.
    pub fn advance(&mut self) -> bool {
        let in_bounds = self.position < self.pixels.len();
        self.position = self.position.saturating_add(1);
        in_bounds
    }

    /// The pixel at the current position, `None` once past the end.
    pub fn current(&mut self) -> Option<&mut Argb32> {
        self.pixels.get_mut(self.position)
    }

    /// Yield the pixel at the current position and advance past it.
    pub fn next_pixel(&mut self) -> Option<&mut Argb32> {
        let index = self.position;
        if self.advance() {
            self.pixels.get_mut(index)
        } else {
            None
        }
    }

    /// Return to the first pixel.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl ImageArgb32 {
    /// A cursor positioned on the first pixel.
    pub fn cursor(&mut self) -> PixelCursor<'_> {
        PixelCursor::new(self.as_mut_slice())
    }
}

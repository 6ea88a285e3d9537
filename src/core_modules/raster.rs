// THEORY:
// `Raster` is the contract between the pixel pipelines and whatever owns the pixel
// memory. The pipelines need very little: the dimensions, and one contiguous,
// row-major slice of exactly `width * height` pixels. Anything that can hand that
// over can be converted, composited and traversed.

/// A contiguous, row-major pixel buffer with `len() == width() * height()`.
pub trait Raster {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn pixels(&self) -> &[Self::Pixel];
    fn pixels_mut(&mut self) -> &mut [Self::Pixel];

    fn len(&self) -> usize {
        self.pixels().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn row(&self, y: usize) -> &[Self::Pixel] {
        let start = y * self.width();
        &self.pixels()[start..start + self.width()]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let width = self.width();
        let start = y * width;
        &mut self.pixels_mut()[start..start + width]
    }
}

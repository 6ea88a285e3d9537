// Interop with the in-memory buffers of the `image` crate. `image` stores color as
// R, G, B(, A) while our pixels are laid out B, G, R, A, so every crossing swizzles.

use crate::core_modules::converter::{Argb32Converter, ColorConverter};
use crate::core_modules::image::{ImageArgb32, ImageU8};
use crate::core_modules::pixel::{Argb32, Rgb24};
use crate::core_modules::raster::Raster;
use crate::error::{RasterError, Result};
use image::{GrayImage, RgbImage, RgbaImage};

fn dimensions(width: u32, height: u32) -> (usize, usize) {
    (width as usize, height as usize)
}

fn image_dimensions(width: usize, height: usize, len: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RasterError::DimensionMismatch { width, height, len }),
    }
}

impl TryFrom<&RgbaImage> for ImageArgb32 {
    type Error = RasterError;

    fn try_from(source: &RgbaImage) -> Result<Self> {
        let (width, height) = dimensions(source.width(), source.height());
        let pixels = source
            .pixels()
            .map(|p| Argb32::new(p[0], p[1], p[2], p[3]))
            .collect();
        ImageArgb32::from_pixels(width, height, pixels)
    }
}

impl TryFrom<&RgbImage> for ImageArgb32 {
    type Error = RasterError;

    fn try_from(source: &RgbImage) -> Result<Self> {
        let (width, height) = dimensions(source.width(), source.height());
        let samples: Vec<Rgb24> = source
            .pixels()
            .map(|p| Rgb24::new(p[0], p[1], p[2]))
            .collect();
        ImageArgb32::from_rgb24(width, height, &samples)
    }
}

impl TryFrom<&GrayImage> for ImageArgb32 {
    type Error = RasterError;

    fn try_from(source: &GrayImage) -> Result<Self> {
        let (width, height) = dimensions(source.width(), source.height());
        let mut image = ImageArgb32::new(width, height);
        Argb32Converter.copy_from_gray(source.as_raw(), image.as_mut_slice())?;
        Ok(image)
    }
}

impl TryFrom<&GrayImage> for ImageU8 {
    type Error = RasterError;

    fn try_from(source: &GrayImage) -> Result<Self> {
        let (width, height) = dimensions(source.width(), source.height());
        ImageU8::from_pixels(width, height, source.as_raw().clone())
    }
}

impl ImageArgb32 {
    /// Copy into an `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let (w, h) = image_dimensions(self.width(), self.height(), self.len())?;
        let raw = self
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue, p.alpha])
            .collect();
        RgbaImage::from_raw(w, h, raw).ok_or(RasterError::DimensionMismatch {
            width: self.width(),
            height: self.height(),
            len: self.len(),
        })
    }
}

impl ImageU8 {
    /// Copy into an `image::GrayImage`.
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        let (w, h) = image_dimensions(self.width(), self.height(), self.len())?;
        GrayImage::from_raw(w, h, self.as_slice().to_vec()).ok_or(
            RasterError::DimensionMismatch {
                width: self.width(),
                height: self.height(),
                len: self.len(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn rgba_swizzles_to_bgra() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(1, 0, Rgba([10, 20, 30, 40]));
        let image = ImageArgb32::try_from(&source).unwrap();
        assert_eq!(image.as_slice()[1], Argb32::new(10, 20, 30, 40));
        assert_eq!(&image.as_bytes()[4..], &[30, 20, 10, 40]);

        let back = image.to_rgba_image().unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn rgb_becomes_opaque() {
        let mut source = RgbImage::new(1, 2);
        source.put_pixel(0, 1, Rgb([1, 2, 3]));
        let image = ImageArgb32::try_from(&source).unwrap();
        assert_eq!((image.width(), image.height()), (1, 2));
        assert_eq!(image.as_slice(), &[Argb32::BLACK, Argb32::rgb(1, 2, 3)]);
    }

    #[test]
    fn gray_images() {
        let source = GrayImage::from_pixel(3, 2, Luma([90]));
        let color = ImageArgb32::try_from(&source).unwrap();
        assert!(color.iter().all(|p| *p == Argb32::rgb(90, 90, 90)));

        let gray = ImageU8::try_from(&source).unwrap();
        assert_eq!(gray.len(), 6);
        assert_eq!(gray.to_gray_image().unwrap(), source);
    }

    #[test]
    fn grayscale_matches_export() {
        let mut source = RgbaImage::new(40, 40);
        for (x, y, p) in source.enumerate_pixels_mut() {
            *p = Rgba([(x * 6) as u8, (y * 6) as u8, 128, 255]);
        }
        let gray = ImageArgb32::try_from(&source)
            .unwrap()
            .to_grayscale_image()
            .to_gray_image()
            .unwrap();
        assert_eq!(gray.dimensions(), (40, 40));
    }
}

use argb_raster::{Argb32, ImageArgb32};

/// Deterministic opaque image whose pixels differ in every channel.
pub fn opaque_gradient(width: usize, height: usize) -> ImageArgb32 {
    let mut image = ImageArgb32::new(width, height);
    for (i, pixel) in image.iter_mut().enumerate() {
        *pixel = Argb32::rgb(
            (i * 37 % 256) as u8,
            (i * 101 % 256) as u8,
            (i * 13 % 256) as u8,
        );
    }
    image
}

/// Every combination of the channel values that sit on rounding boundaries.
pub fn boundary_pixels() -> Vec<Argb32> {
    const VALUES: [u8; 6] = [0, 1, 127, 128, 254, 255];
    let mut pixels = Vec::with_capacity(VALUES.len().pow(3));
    for &r in &VALUES {
        for &g in &VALUES {
            for &b in &VALUES {
                pixels.push(Argb32::rgb(r, g, b));
            }
        }
    }
    pixels
}

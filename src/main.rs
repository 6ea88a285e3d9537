// An example runner for the `argb_raster` library: composites a sprite onto a
// canvas, walks the result with a cursor and reduces it to gray.

use argb_raster::{Argb32, GrayStrategy, ImageArgb32, Point, Raster, Region, Size};

fn main() {
    println!("argb_raster - Example Runner");

    let mut canvas = ImageArgb32::filled(64, 48, Argb32::BLUE);
    let mut sprite = ImageArgb32::filled(16, 16, Argb32::RED);
    // Punch a transparent hole in the sprite; it must not reach the canvas.
    for y in 4..12 {
        for x in 4..12 {
            if let Some(pixel) = sprite.get_mut(x, y) {
                *pixel = Argb32::EMPTY;
            }
        }
    }

    canvas.combine_alpha(
        &sprite,
        Region::new(Point::ORIGIN, Size::new(16, 16), Point::new(56, -4)),
    );

    let mut cursor = canvas.cursor();
    let mut red = 0usize;
    while let Some(pixel) = cursor.next_pixel() {
        if *pixel == Argb32::RED {
            red += 1;
        }
    }
    println!("red pixels after compositing: {red}");

    let gray = canvas.to_grayscale_image();
    println!(
        "grayscale {}x{} via {:?}, first pixel = {}",
        gray.width(),
        gray.height(),
        GrayStrategy::for_len(canvas.len()),
        gray.as_slice().first().copied().unwrap_or_default()
    );
}

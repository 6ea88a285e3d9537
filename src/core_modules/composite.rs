// THEORY:
// The compositor overlays a rectangular region of one image onto another. The caller
// asks for a region of some size starting at `start` in the source, landing at
// `dest_anchor` in the destination. Either point may be negative or past an edge, and
// the two images may have any sizes, so most of the work is clipping:
//
// 1.  **Source Clipping**: the requested span is clamped to the source bounds. A
//     negative start skips the part that would read before index 0 and pushes the
//     destination anchor forward by the same amount so pixels stay aligned.
// 2.  **Destination Clipping**: the (shifted) anchor is clamped to the destination
//     bounds. If it was negative, the source start is pushed forward to match.
// 3.  **Intersection**: the copy size is the smaller of the two clipped spans. An empty
//     result is a silent no-op, never an error.
//
// The two axes are clipped independently. The per-pixel policy is binary: a source
// pixel with alpha 255 replaces the destination pixel, any other alpha leaves the
// destination untouched. There is no partial blending.

use crate::core_modules::geometry::{Point, Size};
use crate::core_modules::image::ImageArgb32;
use crate::core_modules::raster::Raster;
use log::{debug, trace};

/// A compositing request: copy `size` pixels from `start` in the source to `dest_anchor`
/// in the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub start: Point,
    pub size: Size,
    pub dest_anchor: Point,
}

/// The in-bounds rectangle actually copied by a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRect {
    pub src_x: usize,
    pub src_y: usize,
    pub dst_x: usize,
    pub dst_y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    src: usize,
    dst: usize,
    len: usize,
}

fn clip_axis(start: i64, extent: i64, anchor: i64, src_len: i64, dst_len: i64) -> Option<Span> {
    if start >= src_len {
        return None;
    }
    let src_end = (start + extent).min(src_len);
    let shifted_anchor = anchor + (-start).max(0);
    let dst_start = shifted_anchor.max(0);
    let src_start = start.max(0) + (-shifted_anchor).max(0);
    // The destination end is measured from the requested anchor, not the shifted one.
    let dst_end = (anchor + extent).min(dst_len);

    let len = (src_end - src_start).min(dst_end - dst_start);
    (len > 0).then(|| Span {
        src: src_start as usize,
        dst: dst_start as usize,
        len: len as usize,
    })
}

impl Region {
    pub const fn new(start: Point, size: Size, dest_anchor: Point) -> Self {
        Region {
            start,
            size,
            dest_anchor,
        }
    }

    /// Clip against a `src` and a `dst` of the given `(width, height)`.
    ///
    /// Returns `None` when nothing would be copied.
    pub fn clip(&self, src: (usize, usize), dst: (usize, usize)) -> Option<CopyRect> {
        let x = clip_axis(
            self.start.x as i64,
            self.size.width as i64,
            self.dest_anchor.x as i64,
            src.0 as i64,
            dst.0 as i64,
        );
        let y = clip_axis(
            self.start.y as i64,
            self.size.height as i64,
            self.dest_anchor.y as i64,
            src.1 as i64,
            dst.1 as i64,
        );
        let (x, y) = (x?, y?);
        Some(CopyRect {
            src_x: x.src,
            src_y: y.src,
            dst_x: x.dst,
            dst_y: y.dst,
            width: x.len,
            height: y.len,
        })
    }
}

impl ImageArgb32 {
    /// Set every pixel's alpha to `alpha`, leaving the color channels alone.
    pub fn set_alpha(&mut self, alpha: u8) {
        for pixel in self.iter_mut() {
            pixel.alpha = alpha;
        }
    }

    /// Copy the opaque pixels of `region` in `src` onto this image.
    ///
    /// Out-of-bounds and empty requests copy nothing.
    pub fn combine_alpha(&mut self, src: &ImageArgb32, region: Region) {
        let Some(rect) = region.clip(
            (src.width(), src.height()),
            (self.width(), self.height()),
        ) else {
            trace!("combine_alpha: {region:?} does not overlap, nothing to copy");
            return;
        };
        debug!("combine_alpha: {rect:?}");

        for row in 0..rect.height {
            let src_line = &src.row(rect.src_y + row)[rect.src_x..rect.src_x + rect.width];
            let dst_line =
                &mut self.row_mut(rect.dst_y + row)[rect.dst_x..rect.dst_x + rect.width];
            for (dst, pixel) in dst_line.iter_mut().zip(src_line) {
                if pixel.is_opaque() {
                    *dst = *pixel;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::Argb32;

    fn numbered(width: usize, height: usize) -> ImageArgb32 {
        let mut image = ImageArgb32::new(width, height);
        for (i, pixel) in image.iter_mut().enumerate() {
            *pixel = Argb32::rgb(i as u8, (i / 256) as u8, 7);
        }
        image
    }

    fn region(start: (i32, i32), size: (i32, i32), anchor: (i32, i32)) -> Region {
        Region::new(
            Point::new(start.0, start.1),
            Size::new(size.0, size.1),
            Point::new(anchor.0, anchor.1),
        )
    }

    #[test]
    fn clip_inside() {
        let rect = region((1, 2), (3, 4), (5, 6)).clip((10, 10), (10, 10));
        assert_eq!(
            rect,
            Some(CopyRect {
                src_x: 1,
                src_y: 2,
                dst_x: 5,
                dst_y: 6,
                width: 3,
                height: 4
            })
        );
    }

    #[test]
    fn clip_negative_anchor() {
        let rect = region((0, 0), (5, 5), (-2, -2)).clip((5, 5), (10, 10));
        assert_eq!(
            rect,
            Some(CopyRect {
                src_x: 2,
                src_y: 2,
                dst_x: 0,
                dst_y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn clip_negative_start_shifts_anchor() {
        let rect = region((-2, -1), (5, 5), (0, 0)).clip((5, 5), (10, 10));
        assert_eq!(
            rect,
            Some(CopyRect {
                src_x: 0,
                src_y: 0,
                dst_x: 2,
                dst_y: 1,
                width: 3,
                height: 4
            })
        );
    }

    #[test]
    fn clip_past_destination_edge() {
        let rect = region((0, 0), (5, 5), (8, 9)).clip((5, 5), (10, 10));
        assert_eq!(
            rect,
            Some(CopyRect {
                src_x: 0,
                src_y: 0,
                dst_x: 8,
                dst_y: 9,
                width: 2,
                height: 1
            })
        );
    }

    #[test]
    fn clip_degenerate() {
        // Start at or past the source edge on either axis.
        assert_eq!(region((5, 0), (5, 5), (0, 0)).clip((5, 5), (10, 10)), None);
        assert_eq!(region((0, 5), (5, 5), (0, 0)).clip((5, 5), (10, 10)), None);
        // Empty and negative sizes.
        assert_eq!(region((0, 0), (0, 5), (0, 0)).clip((5, 5), (10, 10)), None);
        assert_eq!(region((0, 0), (5, -3), (0, 0)).clip((5, 5), (10, 10)), None);
        // Anchors entirely outside the destination.
        assert_eq!(region((0, 0), (5, 5), (10, 0)).clip((5, 5), (10, 10)), None);
        assert_eq!(region((0, 0), (5, 5), (-5, 0)).clip((5, 5), (10, 10)), None);
        // Source start entirely before the source.
        assert_eq!(region((-5, 0), (5, 5), (0, 0)).clip((5, 5), (10, 10)), None);
        // Extreme coordinates do not overflow.
        assert_eq!(
            region((i32::MIN, 0), (i32::MAX, 1), (i32::MAX, 0)).clip((5, 5), (10, 10)),
            None
        );
        assert_eq!(region((0, 0), (5, 5), (0, 0)).clip((0, 0), (10, 10)), None);
    }

    #[test]
    fn combine_identity() {
        let src = numbered(6, 4);
        let mut dst = ImageArgb32::filled(6, 4, Argb32::BLUE);
        dst.combine_alpha(&src, region((0, 0), (6, 4), (0, 0)));
        assert_eq!(dst, src);
    }

    #[test]
    fn combine_partial_overlap() {
        let src = numbered(5, 5);
        let background = Argb32::rgb(1, 2, 3);
        let mut dst = ImageArgb32::filled(10, 10, background);
        dst.combine_alpha(&src, region((0, 0), (5, 5), (-2, -2)));
        for y in 0..10 {
            for x in 0..10 {
                let expected = if x < 3 && y < 3 {
                    *src.get(x + 2, y + 2).unwrap()
                } else {
                    background
                };
                assert_eq!(*dst.get(x, y).unwrap(), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn combine_binary_alpha() {
        let mut src = ImageArgb32::new(3, 1);
        src.as_mut_slice()[0] = Argb32::new(10, 10, 10, 255);
        src.as_mut_slice()[1] = Argb32::new(20, 20, 20, 128);
        src.as_mut_slice()[2] = Argb32::new(30, 30, 30, 0);
        let mut dst = ImageArgb32::filled(3, 1, Argb32::WHITE);
        dst.combine_alpha(&src, region((0, 0), (3, 1), (0, 0)));
        assert_eq!(
            dst.as_slice(),
            &[Argb32::new(10, 10, 10, 255), Argb32::WHITE, Argb32::WHITE]
        );
    }

    #[test]
    fn combine_noop_keeps_destination() {
        let src = numbered(4, 4);
        let original = ImageArgb32::filled(8, 8, Argb32::GREEN);
        let mut dst = original.clone();
        dst.combine_alpha(&src, region((4, 0), (4, 4), (0, 0)));
        dst.combine_alpha(&src, region((0, 4), (4, 4), (0, 0)));
        dst.combine_alpha(&src, region((0, 0), (4, 4), (100, -100)));
        assert_eq!(dst, original);
    }

    #[test]
    fn combine_into_larger_destination_uses_strides() {
        let src = numbered(3, 3);
        let mut dst = ImageArgb32::new(7, 5);
        dst.combine_alpha(&src, region((1, 1), (2, 2), (4, 2)));
        assert_eq!(dst.get(4, 2), src.get(1, 1));
        assert_eq!(dst.get(5, 2), src.get(2, 1));
        assert_eq!(dst.get(4, 3), src.get(1, 2));
        assert_eq!(dst.get(5, 3), src.get(2, 2));
        let touched = dst.iter().filter(|p| **p != Argb32::EMPTY).count();
        assert_eq!(touched, 4);
    }

    #[test]
    fn set_alpha_covers_every_pixel() {
        let mut image = numbered(9, 7);
        let before = image.clone();
        image.set_alpha(17);
        for (after, before) in image.iter().zip(before.iter()) {
            assert_eq!(after.alpha, 17);
            assert_eq!(
                (after.red, after.green, after.blue),
                (before.red, before.green, before.blue)
            );
        }
    }
}

// THEORY:
// The `Pixel` module is the most fundamental building block of the raster. `Argb32`
// is a "dumb" data container for one 32-bit color sample, and its single most
// important property is its memory layout.
//
// Key architectural principles:
// 1.  **Fixed Byte Order**: Channels live at byte offsets 0..3 in the order Blue,
//     Green, Red, Alpha. This is the order native 32bpp bitmaps use, so a buffer of
//     `Argb32` can be handed to (or filled from) such bitmaps byte for byte.
//     Reordering the fields is a breaking change to that contract.
// 2.  **Plain Old Data**: The struct is `#[repr(C)]` and `Pod`, so whole buffers can be
//     reinterpreted as bytes (and back) without copying or `unsafe`.
// 3.  **Intrinsic Knowledge**: A pixel knows how to reduce itself to a luminance byte,
//     nothing more. Operations that relate pixels to each other live in the image.

use bytemuck::{Pod, Zeroable};
use std::fmt;

pub type Channel = u8;
pub type Luminance = f64;

/// Number of bytes in one `Argb32`.
pub const CHANNELS: usize = 4;

/// Rec. 601 luma weights for red, green and blue.
pub const RED_WEIGHT: Luminance = 0.299;
pub const GREEN_WEIGHT: Luminance = 0.587;
pub const BLUE_WEIGHT: Luminance = 0.114;

/// A 32-bit color sample stored as Blue, Green, Red, Alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct Argb32 {
    /// The blue channel value (0-255), byte offset 0.
    pub blue: Channel,
    /// The green channel value (0-255), byte offset 1.
    pub green: Channel,
    /// The red channel value (0-255), byte offset 2.
    pub red: Channel,
    /// The alpha (opacity) channel value (0-255), byte offset 3.
    pub alpha: Channel,
}

impl Argb32 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Every channel zero, including alpha.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
        Argb32 {
            blue,
            green,
            red,
            alpha,
        }
    }

    /// A fully opaque pixel.
    pub const fn rgb(red: Channel, green: Channel, blue: Channel) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Luminance byte from the Rec. 601 weights, truncated toward zero.
    pub fn to_gray(&self) -> Channel {
        (RED_WEIGHT * self.red as Luminance
            + GREEN_WEIGHT * self.green as Luminance
            + BLUE_WEIGHT * self.blue as Luminance) as Channel
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }

    /// The pixel read as a little-endian `u32`, i.e. `0xAARRGGBB`.
    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes(bytemuck::cast(self))
    }

    pub fn from_u32(value: u32) -> Self {
        bytemuck::cast(value.to_le_bytes())
    }
}

impl fmt::Display for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Argb32 [A={}, R={}, G={}, B={}]",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

/// A 24-bit color sample stored as Blue, Green, Red, the native 24bpp bitmap order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct Rgb24 {
    pub blue: Channel,
    pub green: Channel,
    pub red: Channel,
}

impl Rgb24 {
    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Rgb24 { blue, green, red }
    }
}

impl From<Rgb24> for Argb32 {
    #[inline]
    fn from(Rgb24 { blue, green, red }: Rgb24) -> Self {
        Argb32 {
            blue,
            green,
            red,
            alpha: 255,
        }
    }
}

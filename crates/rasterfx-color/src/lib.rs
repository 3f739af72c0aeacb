//! # rasterfx-color
//!
//! Color space conversion math for the rasterfx pipeline.
//!
//! All conversions operate on bare `[f32; 3]` triples with every component
//! scaled to [0, 255], so converted pixels live in the same image buffer
//! as RGB ones and can be round-tripped through the rest of the filter
//! stack.
//!
//! # Supported Spaces
//!
//! | Space | Components | Backward direction |
//! |-------|------------|--------------------|
//! | [`hsv`] | hue, saturation, value | exact |
//! | [`ycbcr`] | luma, blue chroma, red chroma | exact |
//! | [`gray`] | luma broadcast to all channels | identity (lossy) |
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_color::{ColorSpace, Direction};
//!
//! let rgb = [255.0, 128.0, 0.0];
//! let hsv = ColorSpace::Hsv.convert(rgb, Direction::FromRgb);
//! let back = ColorSpace::Hsv.convert(hsv, Direction::ToRgb);
//! assert!((back[0] - rgb[0]).abs() < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gray;
pub mod hsv;
pub mod ycbcr;

pub use gray::{gray_to_rgb, rgb_to_gray};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use ycbcr::{rgb_to_ycbcr, ycbcr_to_rgb};

/// A color space with a conversion from and to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Hue / saturation / value.
    Hsv,
    /// BT.601 luma and chroma.
    YCbCr,
    /// BT.601 luma broadcast to all channels.
    Gray,
}

/// Which way a [`ColorSpace`] conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// RGB into the target space.
    FromRgb,
    /// Target space back into RGB.
    ToRgb,
}

impl ColorSpace {
    /// Converts a pixel triple in the given direction.
    #[inline]
    pub fn convert(&self, pixel: [f32; 3], direction: Direction) -> [f32; 3] {
        match (self, direction) {
            (ColorSpace::Hsv, Direction::FromRgb) => rgb_to_hsv(pixel),
            (ColorSpace::Hsv, Direction::ToRgb) => hsv_to_rgb(pixel),
            (ColorSpace::YCbCr, Direction::FromRgb) => rgb_to_ycbcr(pixel),
            (ColorSpace::YCbCr, Direction::ToRgb) => ycbcr_to_rgb(pixel),
            (ColorSpace::Gray, Direction::FromRgb) => rgb_to_gray(pixel),
            (ColorSpace::Gray, Direction::ToRgb) => gray_to_rgb(pixel),
        }
    }

    /// Returns the lowercase name of the space.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Hsv => "hsv",
            ColorSpace::YCbCr => "ycbcr",
            ColorSpace::Gray => "gray",
        }
    }
}

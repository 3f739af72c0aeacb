//! Conversion between the f32 working buffer and 8-bit codec planes.

use rasterfx_core::Image;

use crate::{IoError, IoResult};

/// Flattens an image into interleaved 8-bit RGB.
///
/// Each sample is clamped to `[0, 255]` and rounded to the nearest integer.
pub fn to_rgb8(image: &Image) -> Vec<u8> {
    image
        .data()
        .iter()
        .map(|&v| v.clamp(0.0, 255.0).round() as u8)
        .collect()
}

/// Widens interleaved 8-bit RGB into an f32 image.
pub fn from_rgb8(height: u32, width: u32, data: &[u8]) -> IoResult<Image> {
    let expected = height as usize * width as usize * Image::CHANNELS;
    if data.len() != expected {
        return Err(IoError::DimensionMismatch {
            expected: format!("{expected} bytes for {height}x{width}"),
            actual: format!("{} bytes", data.len()),
        });
    }
    let samples: Vec<f32> = data.iter().map(|&b| b as f32).collect();
    Image::from_vec(height, width, samples).map_err(|e| IoError::DecodeError(e.to_string()))
}

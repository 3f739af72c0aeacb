//! RGB <-> YCbCr conversion.
//!
//! BT.601 full-range luma/chroma split as used by JFIF: luma carries the
//! brightness, the two chroma components are centered on 128.
//!
//! # Range
//!
//! - Input/Output: [0, 255] per component
//!
//! # Reference
//!
//! ITU-R BT.601, JFIF 1.02

/// Converts an RGB triple to YCbCr.
///
/// # Formula
///
/// ```text
/// y  =         0.299    r + 0.587    g + 0.114    b
/// cb = 128   - 0.168736 r - 0.331264 g + 0.5      b
/// cr = 128   + 0.5      r - 0.418688 g - 0.081312 b
/// ```
#[inline]
pub fn rgb_to_ycbcr(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    [
        0.299 * r + 0.587 * g + 0.114 * b,
        128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
        128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
    ]
}

/// Converts a YCbCr triple back to RGB.
///
/// Exact inverse of [`rgb_to_ycbcr`]:
///
/// ```text
/// r = y + 1.402    (cr - 128)
/// g = y - 0.344136 (cb - 128) - 0.714136 (cr - 128)
/// b = y + 1.772    (cb - 128)
/// ```
#[inline]
pub fn ycbcr_to_rgb(ycbcr: [f32; 3]) -> [f32; 3] {
    let [y, cb, cr] = ycbcr;
    [
        y + 1.402 * (cr - 128.0),
        y - 0.344136 * (cb - 128.0) - 0.714136 * (cr - 128.0),
        y + 1.772 * (cb - 128.0),
    ]
}

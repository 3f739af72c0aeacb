//! Grayscale conversion.
//!
//! BT.601 luma broadcast across all three channels, so a gray image keeps
//! the same buffer shape as an RGB one. The conversion discards chroma;
//! the backward direction is the identity.

/// BT.601 luma weights for R, G, B.
pub const LUMA_R: f32 = 0.299;
/// Green luma weight.
pub const LUMA_G: f32 = 0.587;
/// Blue luma weight.
pub const LUMA_B: f32 = 0.114;

/// Converts an RGB triple to its luma, broadcast to all three channels.
///
/// ```rust
/// use rasterfx_color::gray::rgb_to_gray;
///
/// let gray = rgb_to_gray([255.0, 255.0, 255.0]);
/// assert!((gray[0] - 255.0).abs() < 1e-3);
/// assert_eq!(gray[0], gray[1]);
/// assert_eq!(gray[1], gray[2]);
/// ```
#[inline]
pub fn rgb_to_gray(rgb: [f32; 3]) -> [f32; 3] {
    let y = LUMA_R * rgb[0] + LUMA_G * rgb[1] + LUMA_B * rgb[2];
    [y, y, y]
}

/// The backward direction of the gray conversion.
///
/// Chroma is gone; the luma triple is already a valid RGB gray, so this
/// is the identity. It exists so both directions of every color space can
/// be driven through the same call sites.
#[inline]
pub fn gray_to_rgb(gray: [f32; 3]) -> [f32; 3] {
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_luma_weights_sum_to_one() {
        assert_relative_eq!(LUMA_R + LUMA_G + LUMA_B, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_green_dominates() {
        let g = rgb_to_gray([0.0, 255.0, 0.0]);
        let r = rgb_to_gray([255.0, 0.0, 0.0]);
        let b = rgb_to_gray([0.0, 0.0, 255.0]);
        assert!(g[0] > r[0]);
        assert!(r[0] > b[0]);
    }

    #[test]
    fn test_gray_input_unchanged() {
        let gray = rgb_to_gray([100.0, 100.0, 100.0]);
        assert_relative_eq!(gray[0], 100.0, epsilon = 1e-4);
        assert_eq!(gray_to_rgb(gray), gray);
    }
}

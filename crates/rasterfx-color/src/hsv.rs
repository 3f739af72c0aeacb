//! RGB <-> HSV conversion.
//!
//! Hue/saturation/value with the hexagonal (max/min) decomposition. All
//! three output components are rescaled to [0, 255] so HSV triples fit in
//! the same image buffer as RGB: hue maps [0, 360) degrees onto [0, 255),
//! saturation and value map [0, 1] onto [0, 255].
//!
//! # Range
//!
//! - Input/Output: [0, 255] per component
//!
//! # Edge cases
//!
//! - Achromatic pixels (`max == min`) take hue 0.
//! - Black pixels (`max == 0`) take saturation 0; the `min/max` ratio is
//!   undefined there.

/// Converts an RGB triple to HSV.
///
/// # Formula
///
/// With `r, g, b` scaled to [0, 1] and `max`/`min` their extrema:
///
/// ```text
/// h = 0                            if max == min
///     60 * (g - b) / (max - min)   if max == r   (wrapped into [0, 360))
///     60 * (b - r) / (max - min) + 120   if max == g
///     60 * (r - g) / (max - min) + 240   otherwise
/// s = 0 if max == 0 else 1 - min / max
/// v = max
/// ```
///
/// # Example
///
/// ```rust
/// use rasterfx_color::hsv::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv([255.0, 0.0, 0.0]);
/// assert_eq!(hsv[0], 0.0);   // red sits at hue 0
/// assert_eq!(hsv[1], 255.0); // fully saturated
/// assert_eq!(hsv[2], 255.0); // full value
/// ```
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        let h = 60.0 * (g - b) / delta;
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == g {
        60.0 * (b - r) / delta + 120.0
    } else {
        60.0 * (r - g) / delta + 240.0
    };
    let s = if max == 0.0 { 0.0 } else { 1.0 - min / max };
    let v = max;

    [h * 255.0 / 360.0, s * 255.0, v * 255.0]
}

/// Converts an HSV triple back to RGB.
///
/// Sector decomposition on the hue: with `h` scaled back to degrees and
/// `s`, `v` to [0, 100],
///
/// ```text
/// sector = floor(h / 60) mod 6
/// v_min  = (100 - s) * v / 100
/// a      = (v - v_min) * (h mod 60) / 60
/// ```
///
/// and each sector picks `(v, v_min + a, v_min)` rotated/reversed
/// accordingly.
///
/// # Example
///
/// ```rust
/// use rasterfx_color::hsv::{hsv_to_rgb, rgb_to_hsv};
///
/// let rgb = [255.0, 128.0, 0.0];
/// let back = hsv_to_rgb(rgb_to_hsv(rgb));
/// for ch in 0..3 {
///     assert!((back[ch] - rgb[ch]).abs() < 0.01);
/// }
/// ```
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let h = hsv[0] * 360.0 / 255.0;
    let s = hsv[1] * 100.0 / 255.0;
    let v = hsv[2] * 100.0 / 255.0;

    let sector = (h / 60.0).floor();
    let index = (sector as i32).rem_euclid(6);
    let frac = h / 60.0 - sector;

    let v_min = (100.0 - s) * v / 100.0;
    let a = (v - v_min) * frac;
    let v_inc = v_min + a;
    let v_dec = v - a;

    let (r, g, b) = match index {
        0 => (v, v_inc, v_min),
        1 => (v_dec, v, v_min),
        2 => (v_min, v, v_inc),
        3 => (v_min, v_dec, v),
        4 => (v_inc, v_min, v),
        _ => (v, v_min, v_dec),
    };

    [r * 255.0 / 100.0, g * 255.0 / 100.0, b * 255.0 / 100.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_triple_eq(a: [f32; 3], b: [f32; 3], eps: f32) {
        for ch in 0..3 {
            assert_relative_eq!(a[ch], b[ch], epsilon = eps);
        }
    }

    #[test]
    fn test_primary_colors() {
        // red: hue 0
        let red = rgb_to_hsv([255.0, 0.0, 0.0]);
        assert_triple_eq(red, [0.0, 255.0, 255.0], 1e-4);
        // green: hue 120 deg -> 85 on the byte scale
        let green = rgb_to_hsv([0.0, 255.0, 0.0]);
        assert_triple_eq(green, [85.0, 255.0, 255.0], 1e-3);
        // blue: hue 240 deg -> 170
        let blue = rgb_to_hsv([0.0, 0.0, 255.0]);
        assert_triple_eq(blue, [170.0, 255.0, 255.0], 1e-3);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let gray = rgb_to_hsv([120.0, 120.0, 120.0]);
        assert_eq!(gray[0], 0.0);
        assert_eq!(gray[1], 0.0);
        assert_relative_eq!(gray[2], 120.0, epsilon = 1e-4);
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let black = rgb_to_hsv([0.0, 0.0, 0.0]);
        assert_eq!(black, [0.0, 0.0, 0.0]);
        assert!(black.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_negative_hue_wraps() {
        // magenta-ish: max == r, g < b pushes the raw hue negative
        let hsv = rgb_to_hsv([255.0, 0.0, 128.0]);
        assert!(hsv[0] > 0.0);
        assert!(hsv[0] <= 255.0);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            [255.0, 0.0, 0.0],
            [0.0, 255.0, 0.0],
            [0.0, 0.0, 255.0],
            [255.0, 128.0, 0.0],
            [12.0, 200.0, 77.0],
            [200.0, 200.0, 200.0],
            [0.0, 0.0, 0.0],
            [255.0, 255.0, 255.0],
        ];
        for rgb in samples {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            assert_triple_eq(back, rgb, 0.05);
        }
    }

    #[test]
    fn test_hsv_to_rgb_sector_boundaries() {
        // hue exactly at 60 deg steps: sector transitions stay continuous
        for deg in [0.0f32, 60.0, 120.0, 180.0, 240.0, 300.0] {
            let h = deg * 255.0 / 360.0;
            let just_below = hsv_to_rgb([h - 1e-3, 255.0, 255.0]);
            let at = hsv_to_rgb([h, 255.0, 255.0]);
            for ch in 0..3 {
                assert!((just_below[ch] - at[ch]).abs() < 0.5);
            }
        }
    }
}

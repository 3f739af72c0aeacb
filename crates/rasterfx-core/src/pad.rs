//! Image padding.
//!
//! Every windowed filter reads a neighborhood around each pixel, so the
//! source image must first be extended past its borders. [`Image::padded`]
//! produces that extended copy; the border samples are synthesized
//! according to a [`PadMode`].
//!
//! Pad amounts are given per axis as `(before, after)` pairs: vertical
//! `(top, bottom)` and horizontal `(left, right)`. The original image ends
//! up at offset `(top, left)` inside the result.

use crate::{Error, Image, Result};

/// Border synthesis strategy for [`Image::padded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
    /// Border samples are zero in every channel.
    Zero,
    /// Border samples replicate the nearest edge pixel.
    Edge,
    /// Border samples mirror the image about its edge pixels, without
    /// repeating the edge itself: the pixel one step past the border is
    /// the pixel one step inside it. Pads wider than the image keep
    /// bouncing between the two edges.
    Reflect,
    /// Periodic tiling. Declared for completeness; requesting it fails
    /// with [`Error::UnsupportedPadMode`].
    Wrap,
}

impl PadMode {
    /// Returns the lowercase mode name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            PadMode::Zero => "zero",
            PadMode::Edge => "edge",
            PadMode::Reflect => "reflect",
            PadMode::Wrap => "wrap",
        }
    }
}

/// Clamps a possibly-negative position to `[0, len)`.
#[inline]
fn clamp_index(pos: i64, len: u32) -> u32 {
    pos.clamp(0, len as i64 - 1) as u32
}

/// Mirrors a possibly-out-of-range position into `[0, len)`.
///
/// The mirror axis sits on the edge samples (indices 0 and `len - 1`), so
/// the reflection has period `2 * (len - 1)` and the edge samples are not
/// duplicated. A one-sample axis maps everything to 0.
#[inline]
fn reflect_index(pos: i64, len: u32) -> u32 {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as i64 - 1);
    let mut m = pos.rem_euclid(period);
    if m >= len as i64 {
        m = period - m;
    }
    m as u32
}

impl Image {
    /// Returns a copy of this image extended by the given pad amounts.
    ///
    /// The result is `(height + top + bottom) x (width + left + right)`
    /// with the original image at offset `(top, left)` and the border
    /// synthesized per `mode`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPadMode`] for [`PadMode::Wrap`].
    /// - [`Error::InvalidDimensions`] when padding an empty image.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rasterfx_core::{Image, PadMode};
    ///
    /// let img = Image::filled(4, 4, [10.0, 20.0, 30.0]);
    /// let padded = img.padded((1, 1), (1, 1), PadMode::Zero).unwrap();
    /// assert_eq!(padded.dimensions(), (6, 6));
    /// assert_eq!(padded.pixel(0, 0), [0.0, 0.0, 0.0]);
    /// assert_eq!(padded.pixel(1, 1), [10.0, 20.0, 30.0]);
    /// ```
    pub fn padded(&self, v_pad: (u32, u32), h_pad: (u32, u32), mode: PadMode) -> Result<Image> {
        if matches!(mode, PadMode::Wrap) {
            return Err(Error::unsupported_pad_mode(mode.name()));
        }
        if self.is_empty() {
            return Err(Error::invalid_dimensions(
                self.height(),
                self.width(),
                "cannot pad an empty image",
            ));
        }

        let (top, bottom) = v_pad;
        let (left, right) = h_pad;
        let out_h = self.height() + top + bottom;
        let out_w = self.width() + left + right;
        let mut out = Image::new(out_h, out_w);

        for row in 0..out_h {
            for col in 0..out_w {
                let src_row = row as i64 - top as i64;
                let src_col = col as i64 - left as i64;
                let inside = src_row >= 0
                    && src_row < self.height() as i64
                    && src_col >= 0
                    && src_col < self.width() as i64;
                let (sr, sc) = if inside {
                    (src_row as u32, src_col as u32)
                } else {
                    match mode {
                        // output starts out zero-filled
                        PadMode::Zero => continue,
                        PadMode::Edge => (
                            clamp_index(src_row, self.height()),
                            clamp_index(src_col, self.width()),
                        ),
                        PadMode::Reflect => (
                            reflect_index(src_row, self.height()),
                            reflect_index(src_col, self.width()),
                        ),
                        PadMode::Wrap => unreachable!("rejected above"),
                    }
                };
                out.set_pixel(row, col, self.pixel(sr, sc));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills an image with per-sample values derived from the indices so
    /// every sample is distinct.
    fn indexed_image(height: u32, width: u32) -> Image {
        let mut img = Image::new(height, width);
        for row in 0..height {
            for col in 0..width {
                for ch in 0..3 {
                    img.set_sample(row, col, ch, (row * 100 + col * 10 + ch as u32) as f32);
                }
            }
        }
        img
    }

    /// Reference mirror: walk from index 0 toward `pos` one step at a
    /// time, reversing direction at the edges.
    fn bounce_index(pos: i64, len: u32) -> u32 {
        let last = len as i64 - 1;
        if last == 0 {
            return 0;
        }
        let mut i = 0i64;
        let mut step = 1i64;
        for _ in 0..pos.abs() {
            if i == last {
                step = -1;
            } else if i == 0 {
                step = 1;
            }
            i += step;
        }
        i as u32
    }

    #[test]
    fn test_zero_pad_4x4_to_6x6() {
        let img = Image::filled(4, 4, [5.0, 5.0, 5.0]);
        let padded = img.padded((1, 1), (1, 1), PadMode::Zero).unwrap();
        assert_eq!(padded.dimensions(), (6, 6));
        // border is zero
        for col in 0..6 {
            assert_eq!(padded.pixel(0, col), [0.0; 3]);
            assert_eq!(padded.pixel(5, col), [0.0; 3]);
        }
        for row in 0..6 {
            assert_eq!(padded.pixel(row, 0), [0.0; 3]);
            assert_eq!(padded.pixel(row, 5), [0.0; 3]);
        }
        // interior is the original
        for row in 1..5 {
            for col in 1..5 {
                assert_eq!(padded.pixel(row, col), [5.0; 3]);
            }
        }
    }

    #[test]
    fn test_pad_preserves_interior_offset() {
        let img = indexed_image(3, 4);
        let padded = img.padded((2, 0), (1, 3), PadMode::Zero).unwrap();
        assert_eq!(padded.dimensions(), (5, 8));
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(padded.pixel(row + 2, col + 1), img.pixel(row, col));
            }
        }
    }

    #[test]
    fn test_zero_amount_pad_is_identity() {
        let img = indexed_image(3, 3);
        let padded = img.padded((0, 0), (0, 0), PadMode::Reflect).unwrap();
        assert_eq!(padded, img);
    }

    #[test]
    fn test_edge_pad_replicates_borders() {
        let img = indexed_image(2, 2);
        let padded = img.padded((2, 2), (2, 2), PadMode::Edge).unwrap();
        // corners replicate the corner pixels
        assert_eq!(padded.pixel(0, 0), img.pixel(0, 0));
        assert_eq!(padded.pixel(0, 5), img.pixel(0, 1));
        assert_eq!(padded.pixel(5, 0), img.pixel(1, 0));
        assert_eq!(padded.pixel(5, 5), img.pixel(1, 1));
        // top border above column 1 replicates (0, 1)
        assert_eq!(padded.pixel(0, 3), img.pixel(0, 1));
        assert_eq!(padded.pixel(1, 3), img.pixel(0, 1));
    }

    #[test]
    fn test_reflect_pad_mirrors_without_repeating_edge() {
        let img = indexed_image(1, 4);
        let padded = img.padded((0, 0), (2, 2), PadMode::Reflect).unwrap();
        // left pad: [2, 1 | 0 1 2 3 | 2, 1]
        assert_eq!(padded.pixel(0, 0), img.pixel(0, 2));
        assert_eq!(padded.pixel(0, 1), img.pixel(0, 1));
        assert_eq!(padded.pixel(0, 6), img.pixel(0, 2));
        assert_eq!(padded.pixel(0, 7), img.pixel(0, 1));
    }

    #[test]
    fn test_reflect_single_row_image() {
        let img = indexed_image(1, 3);
        let padded = img.padded((2, 2), (0, 0), PadMode::Reflect).unwrap();
        for row in 0..5 {
            for col in 0..3 {
                assert_eq!(padded.pixel(row, col), img.pixel(0, col));
            }
        }
    }

    #[test]
    fn test_reflect_index_matches_bounce_reference() {
        for len in 1..=8u32 {
            for pos in -40i64..60 {
                assert_eq!(
                    reflect_index(pos, len),
                    bounce_index(pos, len),
                    "len {} pos {}",
                    len,
                    pos
                );
            }
        }
    }

    #[test]
    fn test_reflect_pad_wider_than_image_matches_reference() {
        let img = indexed_image(3, 4);
        for pad in [1u32, 3, 5, 9] {
            let padded = img.padded((pad, pad), (pad, pad), PadMode::Reflect).unwrap();
            for row in 0..padded.height() {
                for col in 0..padded.width() {
                    let sr = bounce_index(row as i64 - pad as i64, img.height());
                    let sc = bounce_index(col as i64 - pad as i64, img.width());
                    assert_eq!(padded.pixel(row, col), img.pixel(sr, sc));
                }
            }
        }
    }

    #[test]
    fn test_wrap_pad_unsupported() {
        let img = Image::new(2, 2);
        let err = img.padded((1, 1), (1, 1), PadMode::Wrap).unwrap_err();
        assert!(err.to_string().contains("wrap"));
    }

    #[test]
    fn test_pad_empty_image_fails() {
        let img = Image::new(0, 4);
        assert!(img.padded((1, 1), (1, 1), PadMode::Zero).is_err());
    }

    #[test]
    fn test_asymmetric_pad_amounts() {
        let img = indexed_image(2, 3);
        let padded = img.padded((1, 0), (0, 2), PadMode::Edge).unwrap();
        assert_eq!(padded.dimensions(), (3, 5));
        assert_eq!(padded.pixel(0, 0), img.pixel(0, 0));
        assert_eq!(padded.pixel(2, 4), img.pixel(1, 2));
    }
}

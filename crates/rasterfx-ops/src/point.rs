//! Point filters that touch one pixel at a time.
//!
//! All of these ride on [`for_each_pixel`]; the contrast stretch additionally
//! runs a whole-image pre-pass to find per-channel extremes before rescaling.

use rasterfx_color::{ColorSpace, Direction};
use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::filter::{Filter, for_each_pixel};
use crate::{OpsError, OpsResult};

/// Threshold binarization: a channel below `edge` becomes 0, the rest 255.
#[derive(Debug, Clone, Copy)]
pub struct Binarize {
    edge: f32,
}

impl Binarize {
    /// Binarize against `edge`.
    pub fn new(edge: f32) -> Self {
        Self { edge }
    }
}

impl Filter for Binarize {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(edge = self.edge, "applying binarization");
        let edge = self.edge;
        for_each_pixel(image, |pixel| {
            for v in pixel.iter_mut() {
                *v = if *v < edge { 0.0 } else { 255.0 };
            }
        });
        Ok(())
    }
}

/// Signed logarithmic compression of large channel values.
///
/// Values with magnitude above 1 become `sign(v) * ln(|v|)`, the rest pass
/// through unchanged. Tames unbounded gradient magnitudes before display.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContrast;

impl LogContrast {
    /// New log-contrast filter.
    pub fn new() -> Self {
        Self
    }
}

impl Filter for LogContrast {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!("applying log contrast");
        for_each_pixel(image, |pixel| {
            for v in pixel.iter_mut() {
                if v.abs() > 1.0 {
                    *v = v.signum() * v.abs().ln();
                }
            }
        });
        Ok(())
    }
}

/// Per-pixel color space conversion.
#[derive(Debug, Clone, Copy)]
pub struct ColorConvert {
    space: ColorSpace,
    direction: Direction,
}

impl ColorConvert {
    /// Convert every pixel through `space` in the given direction.
    pub fn new(space: ColorSpace, direction: Direction) -> Self {
        Self { space, direction }
    }
}

impl Filter for ColorConvert {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(
            space = self.space.name(),
            direction = ?self.direction,
            "applying color conversion"
        );
        let (space, direction) = (self.space, self.direction);
        for_each_pixel(image, |pixel| {
            let converted = space.convert([pixel[0], pixel[1], pixel[2]], direction);
            pixel.copy_from_slice(&converted);
        });
        Ok(())
    }
}

/// Linear contrast stretch into a target range.
///
/// Each channel's observed minimum and maximum are remapped onto
/// `[min, max]`. A flat channel has no spread to stretch; it collapses to the
/// single shifted constant `observed_max / (max - min) + min`.
#[derive(Debug, Clone, Copy)]
pub struct Contrast {
    max: f32,
    min: f32,
}

impl Contrast {
    /// Contrast stretch targeting the range `[min, max]`.
    pub fn new(max: f32, min: f32) -> OpsResult<Self> {
        if max <= min {
            return Err(OpsError::InvalidParameter(format!(
                "Contrast range is empty: max {max} <= min {min}"
            )));
        }
        Ok(Self { max, min })
    }
}

impl Filter for Contrast {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(max = self.max, min = self.min, "applying contrast stretch");
        if image.is_empty() {
            return Ok(());
        }

        let mut observed_min = [f32::MAX; Image::CHANNELS];
        let mut observed_max = [f32::MIN; Image::CHANNELS];
        for pixel in image.data().chunks_exact(Image::CHANNELS) {
            for (ch, &v) in pixel.iter().enumerate() {
                observed_min[ch] = observed_min[ch].min(v);
                observed_max[ch] = observed_max[ch].max(v);
            }
        }

        let (target_min, span) = (self.min, self.max - self.min);
        for_each_pixel(image, |pixel| {
            for (ch, v) in pixel.iter_mut().enumerate() {
                let (lo, hi) = (observed_min[ch], observed_max[ch]);
                *v = if hi == lo {
                    hi / span + target_min
                } else {
                    (*v - lo) / (hi - lo) * span + target_min
                };
            }
        });
        Ok(())
    }
}

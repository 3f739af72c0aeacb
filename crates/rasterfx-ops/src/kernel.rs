//! Convolution kernels.
//!
//! A [`Kernel`] is a small row-major weight grid with odd dimensions, so it
//! always has a well-defined center tap. Named constructors cover the kernels
//! the filter layer needs: Gaussian (isotropic or correlated bivariate),
//! uniform box, Laplacian, the Prewitt/Sobel/Scharr gradient pairs, and a
//! sharpening kernel.

use rasterfx_core::Image;

use crate::{OpsError, OpsResult};

/// Convolution kernel with odd dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights, row-major.
    pub data: Vec<f32>,
    /// Kernel height (odd).
    pub height: usize,
    /// Kernel width (odd).
    pub width: usize,
}

impl Kernel {
    /// Create a kernel from raw weights.
    pub fn new(data: Vec<f32>, height: usize, width: usize) -> OpsResult<Self> {
        if height == 0 || width == 0 || height % 2 == 0 || width % 2 == 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "Kernel dimensions must be odd and positive: {height}x{width}"
            )));
        }
        if data.len() != height * width {
            return Err(OpsError::InvalidDimensions(format!(
                "Kernel data length {} != {height}x{width}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Uniform box kernel where every weight is `1/(height*width)`.
    pub fn uniform(height: usize, width: usize) -> OpsResult<Self> {
        if height == 0 || width == 0 || height % 2 == 0 || width % 2 == 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "Kernel dimensions must be odd and positive: {height}x{width}"
            )));
        }
        let weight = 1.0 / (height * width) as f32;
        Ok(Self {
            data: vec![weight; height * width],
            height,
            width,
        })
    }

    /// Square isotropic Gaussian kernel.
    pub fn gaussian(size: usize, sigma: f32) -> OpsResult<Self> {
        Self::gaussian_aniso(size, size, sigma, sigma, 0.0)
    }

    /// Bivariate Gaussian kernel with per-axis sigmas and a correlation term.
    ///
    /// Weights follow the bivariate normal density (constant factor dropped)
    /// and are normalized so the kernel sums to 1. A zero sigma on one axis
    /// collapses the profile to a 1D Gaussian along the other axis, broadcast
    /// across the flat one; both sigmas zero yields the identity (delta)
    /// kernel. `corr` must lie in `[0, 1)`.
    pub fn gaussian_aniso(
        height: usize,
        width: usize,
        sigma_v: f32,
        sigma_h: f32,
        corr: f32,
    ) -> OpsResult<Self> {
        if height == 0 || width == 0 || height % 2 == 0 || width % 2 == 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "Gaussian kernel dimensions must be odd and positive: {height}x{width}"
            )));
        }
        if sigma_v < 0.0 || sigma_h < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "Gaussian sigma must be non-negative: {sigma_v}, {sigma_h}"
            )));
        }
        if !(0.0..1.0).contains(&corr) {
            return Err(OpsError::InvalidParameter(format!(
                "Gaussian correlation must be in [0, 1): {corr}"
            )));
        }

        let mut data = vec![0.0f32; height * width];
        if sigma_v == 0.0 && sigma_h == 0.0 {
            // Degenerate on both axes: identity kernel.
            data[(height / 2) * width + width / 2] = 1.0;
            return Ok(Self {
                data,
                height,
                width,
            });
        }

        let center_r = height as f32 / 2.0 - 0.5;
        let center_c = width as f32 / 2.0 - 0.5;
        let denom = 1.0 - corr * corr;
        for row in 0..height {
            let dr = row as f32 - center_r;
            for col in 0..width {
                let dc = col as f32 - center_c;
                let q = if sigma_v == 0.0 {
                    dc * dc / (sigma_h * sigma_h)
                } else if sigma_h == 0.0 {
                    dr * dr / (sigma_v * sigma_v)
                } else {
                    (dr * dr / (sigma_v * sigma_v)
                        - 2.0 * corr * dr * dc / (sigma_v * sigma_h)
                        + dc * dc / (sigma_h * sigma_h))
                        / denom
                };
                data[row * width + col] = (-0.5 * q).exp();
            }
        }

        let sum: f32 = data.iter().sum();
        for weight in &mut data {
            *weight /= sum;
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// 3x3 Laplacian kernel.
    pub fn laplacian() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1.0, -1.0, -1.0,
            -1.0,  8.0, -1.0,
            -1.0, -1.0, -1.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Prewitt vertical-gradient kernel.
    pub fn prewitt_vertical() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1.0, -1.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  1.0,  1.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Prewitt horizontal-gradient kernel.
    pub fn prewitt_horizontal() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1.0, 0.0, 1.0,
            -1.0, 0.0, 1.0,
            -1.0, 0.0, 1.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Sobel vertical-gradient kernel.
    pub fn sobel_vertical() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1.0, -2.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  2.0,  1.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Sobel horizontal-gradient kernel.
    pub fn sobel_horizontal() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Scharr vertical-gradient kernel.
    pub fn scharr_vertical() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -3.0, -10.0, -3.0,
             0.0,   0.0,  0.0,
             3.0,  10.0,  3.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Scharr horizontal-gradient kernel.
    pub fn scharr_horizontal() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -3.0, 0.0,  3.0,
           -10.0, 0.0, 10.0,
            -3.0, 0.0,  3.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// 3x3 sharpening kernel.
    pub fn sharpen() -> Self {
        #[rustfmt::skip]
        let data = vec![
             0.0, -1.0,  0.0,
            -1.0,  5.0, -1.0,
             0.0, -1.0,  0.0,
        ];
        Self {
            data,
            height: 3,
            width: 3,
        }
    }

    /// Weight at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Kernel radius as `(vertical, horizontal)` half-extents.
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }
}

/// Convolve one channel at a single window position.
///
/// The window's top-left corner sits at `(row, col)` in `image` coordinates
/// and spans the kernel's full extent; the caller guarantees it fits. Kernel
/// indices are reversed, so this is a true convolution, not a correlation.
pub fn convolve_at(image: &Image, row: u32, col: u32, channel: usize, kernel: &Kernel) -> f32 {
    let mut sum = 0.0;
    for kr in 0..kernel.height {
        for kc in 0..kernel.width {
            let weight = kernel.at(kernel.height - 1 - kr, kernel.width - 1 - kc);
            sum += image.sample(row + kr as u32, col + kc as u32, channel) * weight;
        }
    }
    sum
}

//! Filter trait, pipeline, and traversal frameworks.
//!
//! Every image transform implements [`Filter`] and mutates the buffer in
//! place. Two traversal helpers cover the common shapes: [`for_each_pixel`]
//! for point operations and [`for_each_window`] for neighborhood operations
//! over an edge-padded copy. Filters compose left to right in a [`Pipeline`].
//!
//! Parameter validation happens when a filter is constructed, never inside
//! `apply`, so a bad configuration is rejected before any image is touched.

use rasterfx_core::{Image, PadMode};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::kernel::{Kernel, convolve_at};
use crate::{OpsError, OpsResult};

/// A mutable image transform.
pub trait Filter {
    /// Apply the filter to `image` in place.
    fn apply(&mut self, image: &mut Image) -> OpsResult<()>;
}

/// Odd window dimensions for neighborhood filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowShape {
    height: u32,
    width: u32,
}

impl WindowShape {
    /// Create a window shape; both dimensions must be odd.
    pub fn new(height: u32, width: u32) -> OpsResult<Self> {
        if height == 0 || width == 0 || height % 2 == 0 || width % 2 == 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "Window dimensions must be odd and positive: {height}x{width}"
            )));
        }
        Ok(Self { height, width })
    }

    /// Square window of the given side.
    pub fn square(size: u32) -> OpsResult<Self> {
        Self::new(size, size)
    }

    fn of_kernel(kernel: &Kernel) -> Self {
        Self {
            height: kernel.height as u32,
            width: kernel.width as u32,
        }
    }

    /// Window height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Half-extents as `(vertical, horizontal)`.
    #[inline]
    pub fn radius(&self) -> (u32, u32) {
        (self.height / 2, self.width / 2)
    }
}

/// Run a pixelwise pass over the image.
///
/// Visits every pixel in raster order and hands the callback its channels as
/// one mutable slice. No neighbor access is possible.
pub fn for_each_pixel<F>(image: &mut Image, mut process: F)
where
    F: FnMut(&mut [f32]),
{
    for pixel in image.data_mut().chunks_exact_mut(Image::CHANNELS) {
        process(pixel);
    }
}

/// Run a windowed pass over the image.
///
/// Pads the image by the window half-extents with edge replication, then for
/// every pixel `(row, col)` of the original invokes
/// `process(&padded, &mut output, row, col)`. The window's top-left corner in
/// padded coordinates is also `(row, col)`, so the window spanning the shape's
/// full extent is always in bounds. The finished output replaces `image`.
pub fn for_each_window<F>(image: &mut Image, shape: WindowShape, mut process: F) -> OpsResult<()>
where
    F: FnMut(&Image, &mut Image, u32, u32),
{
    if image.is_empty() {
        return Ok(());
    }
    let (rv, rh) = shape.radius();
    let padded = image.padded((rv, rv), (rh, rh), PadMode::Edge)?;
    let mut output = Image::new(image.height(), image.width());
    for row in 0..image.height() {
        for col in 0..image.width() {
            process(&padded, &mut output, row, col);
        }
    }
    *image = output;
    Ok(())
}

/// An ordered sequence of filters applied left to right.
///
/// The first failing stage aborts the run; earlier stages have already
/// committed their full mutation.
#[derive(Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    /// Empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter stage.
    pub fn push<F: Filter + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append an already boxed filter stage.
    pub fn push_boxed(&mut self, filter: Box<dyn Filter>) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when no stages have been added.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every stage in order, stopping at the first failure.
    pub fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        for (stage, filter) in self.filters.iter_mut().enumerate() {
            trace!(stage, "running pipeline stage");
            filter.apply(image)?;
        }
        Ok(())
    }
}

/// Convolution against an arbitrary kernel.
#[derive(Debug, Clone)]
pub struct Convolution {
    kernel: Kernel,
    shape: WindowShape,
}

impl Convolution {
    /// Convolve with `kernel`.
    pub fn new(kernel: Kernel) -> Self {
        let shape = WindowShape::of_kernel(&kernel);
        Self { kernel, shape }
    }
}

impl Filter for Convolution {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(
            kernel_height = self.kernel.height,
            kernel_width = self.kernel.width,
            "applying convolution"
        );
        let kernel = &self.kernel;
        for_each_window(image, self.shape, |padded, output, row, col| {
            for ch in 0..Image::CHANNELS {
                output.set_sample(row, col, ch, convolve_at(padded, row, col, ch, kernel));
            }
        })
    }
}

/// Gradient operator for [`EdgeDetect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOperator {
    /// Prewitt gradient pair.
    Prewitt,
    /// Sobel gradient pair.
    Sobel,
    /// Scharr gradient pair.
    Scharr,
    /// Single-kernel Laplacian.
    Laplacian,
}

impl EdgeOperator {
    /// Operator name for logs and listings.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeOperator::Prewitt => "prewitt",
            EdgeOperator::Sobel => "sobel",
            EdgeOperator::Scharr => "scharr",
            EdgeOperator::Laplacian => "laplacian",
        }
    }
}

/// Gradient-magnitude edge detection.
///
/// Convolves the vertical and horizontal gradient kernels per channel and
/// writes `sqrt(gv^2 + gh^2)`. The Laplacian operator has no horizontal
/// counterpart; its missing term is zero, so the output is `|gv|`.
#[derive(Debug, Clone)]
pub struct EdgeDetect {
    operator: EdgeOperator,
    vertical: Kernel,
    horizontal: Option<Kernel>,
    shape: WindowShape,
}

impl EdgeDetect {
    /// Edge detection with the given operator.
    pub fn new(operator: EdgeOperator) -> Self {
        let (vertical, horizontal) = match operator {
            EdgeOperator::Prewitt => (
                Kernel::prewitt_vertical(),
                Some(Kernel::prewitt_horizontal()),
            ),
            EdgeOperator::Sobel => (Kernel::sobel_vertical(), Some(Kernel::sobel_horizontal())),
            EdgeOperator::Scharr => (Kernel::scharr_vertical(), Some(Kernel::scharr_horizontal())),
            EdgeOperator::Laplacian => (Kernel::laplacian(), None),
        };
        let shape = WindowShape::of_kernel(&vertical);
        Self {
            operator,
            vertical,
            horizontal,
            shape,
        }
    }
}

impl Filter for EdgeDetect {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(operator = self.operator.name(), "applying edge detection");
        let vertical = &self.vertical;
        match &self.horizontal {
            Some(horizontal) => for_each_window(image, self.shape, |padded, output, row, col| {
                for ch in 0..Image::CHANNELS {
                    let gv = convolve_at(padded, row, col, ch, vertical);
                    let gh = convolve_at(padded, row, col, ch, horizontal);
                    output.set_sample(row, col, ch, (gv * gv + gh * gh).sqrt());
                }
            }),
            None => for_each_window(image, self.shape, |padded, output, row, col| {
                for ch in 0..Image::CHANNELS {
                    let gv = convolve_at(padded, row, col, ch, vertical);
                    output.set_sample(row, col, ch, gv.abs());
                }
            }),
        }
    }
}

/// Median filter over a rectangular window.
#[derive(Debug, Clone, Copy)]
pub struct Median {
    shape: WindowShape,
}

impl Median {
    /// Median filter with the given window shape.
    pub fn new(shape: WindowShape) -> Self {
        Self { shape }
    }
}

impl Filter for Median {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(
            height = self.shape.height(),
            width = self.shape.width(),
            "applying median filter"
        );
        let (wh, ww) = (self.shape.height(), self.shape.width());
        let count = (wh * ww) as usize;
        for_each_window(image, self.shape, |padded, output, row, col| {
            for ch in 0..Image::CHANNELS {
                let mut values = Vec::with_capacity(count);
                for wr in 0..wh {
                    for wc in 0..ww {
                        values.push(padded.sample(row + wr, col + wc, ch));
                    }
                }
                values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                output.set_sample(row, col, ch, values[count / 2]);
            }
        })
    }
}

//! # rasterfx-ops
//!
//! Filters and frequency-domain processing for raster images.
//!
//! Every transform implements the [`filter::Filter`] trait and mutates the
//! image in place; filters chain left to right in a [`filter::Pipeline`].
//! Parameters are validated when a filter is constructed, so a bad
//! configuration fails before any pixels move.
//!
//! # Modules
//!
//! - [`kernel`] - Convolution kernels (Gaussian, box, gradient pairs)
//! - [`filter`] - Filter trait, pipeline, and traversal frameworks
//! - [`point`] - Per-pixel filters (binarize, contrast, color conversion)
//! - [`noise`] - Seeded noise injection
//! - [`fft`] - Radix-2 FFT over complex grids
//! - [`frequency`] - FFT band filters
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::Image;
//! use rasterfx_ops::{Binarize, Median, Pipeline, WindowShape};
//!
//! let mut image = Image::filled(16, 16, [128.0, 128.0, 128.0]);
//! let mut pipeline = Pipeline::new();
//! pipeline
//!     .push(Median::new(WindowShape::square(3)?))
//!     .push(Binarize::new(100.0));
//! pipeline.apply(&mut image)?;
//! # Ok::<(), rasterfx_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod fft;
pub mod filter;
pub mod frequency;
pub mod kernel;
pub mod noise;
pub mod point;

pub use error::{OpsError, OpsResult};
pub use fft::{SpectrumGrid, fft2d, ifft2d};
pub use filter::{Convolution, EdgeDetect, EdgeOperator, Filter, Median, Pipeline, WindowShape};
pub use frequency::{BandMode, FrequencyFilter};
pub use kernel::{Kernel, convolve_at};
pub use noise::{GaussianNoise, ImpulseNoise, UniformNoise};
pub use point::{Binarize, ColorConvert, Contrast, LogContrast};

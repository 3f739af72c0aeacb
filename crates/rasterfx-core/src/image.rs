//! Dense floating-point image buffer.
//!
//! This module provides [`Image`], the container every filter in the
//! pipeline operates on. It is deliberately concrete: three `f32` channels
//! per pixel, RGB order, nominal value range [0, 255]. Filters are free to
//! push samples outside that range; values are only clamped when the image
//! is quantized for encoding.
//!
//! # Memory Layout
//!
//! Samples are stored in **row-major** order with interleaved channels,
//! top row first:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Coordinates
//!
//! All coordinates in this crate are `(row, col)` with row 0 at the top.
//! Dimension pairs are `(height, width)` in the same order.
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_core::Image;
//!
//! let mut img = Image::new(1080, 1920);
//! img.set(100, 100, 0, 255.0).unwrap();
//! assert_eq!(img.get(100, 100, 0).unwrap(), 255.0);
//! ```

use crate::{Error, Result};

/// Owned image buffer: `height x width` pixels, three `f32` channels each.
///
/// Two accessor tiers are provided:
/// - [`get`](Self::get) / [`set`](Self::set) validate indices and return
///   [`Error::OutOfBounds`] on violation. Use these at API boundaries.
/// - [`sample`](Self::sample) / [`set_sample`](Self::set_sample) (and the
///   pixel-triple variants) only `debug_assert!` the indices. Use these in
///   inner loops that have already established their bounds.
///
/// # Example
///
/// ```rust
/// use rasterfx_core::Image;
///
/// let mut img = Image::filled(10, 10, [255.0, 128.0, 0.0]);
/// assert_eq!(img.pixel(0, 0), [255.0, 128.0, 0.0]);
/// img.set_pixel(5, 5, [0.0, 0.0, 0.0]);
/// assert_eq!(img.pixel(5, 5), [0.0, 0.0, 0.0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Image {
    /// Sample data, `height * width * 3` values
    data: Vec<f32>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl Image {
    /// Number of channels per pixel. Always 3 (RGB).
    pub const CHANNELS: usize = 3;

    /// Creates a new image filled with zeros.
    ///
    /// A zero dimension yields the empty image; there is no failing case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rasterfx_core::Image;
    ///
    /// let img = Image::new(1080, 1920);
    /// assert_eq!(img.height(), 1080);
    /// assert_eq!(img.width(), 1920);
    /// ```
    pub fn new(height: u32, width: u32) -> Self {
        let len = height as usize * width as usize * Self::CHANNELS;
        Self {
            data: vec![0.0; len],
            width,
            height,
        }
    }

    /// Creates an image from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not exactly
    /// `height * width * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rasterfx_core::Image;
    ///
    /// let samples = vec![0.0; 4 * 4 * 3];
    /// let img = Image::from_vec(4, 4, samples).unwrap();
    /// assert_eq!(img.dimensions(), (4, 4));
    /// ```
    pub fn from_vec(height: u32, width: u32, data: Vec<f32>) -> Result<Self> {
        let expected = height as usize * width as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                height,
                width,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a specific pixel value.
    pub fn filled(height: u32, width: u32, pixel: [f32; 3]) -> Self {
        let mut img = Self::new(height, width);
        img.fill(pixel);
        img
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image dimensions as (height, width).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        Self::CHANNELS
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw sample data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the buffer offset of pixel (row, col).
    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * Self::CHANNELS
    }

    #[inline]
    fn in_bounds(&self, row: u32, col: u32, channel: usize) -> bool {
        row < self.height && col < self.width && channel < Self::CHANNELS
    }

    /// Returns the sample at (row, col, channel), validating the indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any index exceeds its dimension.
    pub fn get(&self, row: u32, col: u32, channel: usize) -> Result<f32> {
        if !self.in_bounds(row, col, channel) {
            return Err(Error::out_of_bounds(
                row,
                col,
                channel,
                self.height,
                self.width,
            ));
        }
        Ok(self.data[self.offset(row, col) + channel])
    }

    /// Sets the sample at (row, col, channel), validating the indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any index exceeds its dimension.
    pub fn set(&mut self, row: u32, col: u32, channel: usize, value: f32) -> Result<()> {
        if !self.in_bounds(row, col, channel) {
            return Err(Error::out_of_bounds(
                row,
                col,
                channel,
                self.height,
                self.width,
            ));
        }
        let offset = self.offset(row, col) + channel;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the sample at (row, col, channel) without validation.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the indices are out of bounds.
    #[inline]
    pub fn sample(&self, row: u32, col: u32, channel: usize) -> f32 {
        debug_assert!(self.in_bounds(row, col, channel), "sample out of bounds");
        self.data[self.offset(row, col) + channel]
    }

    /// Sets the sample at (row, col, channel) without validation.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the indices are out of bounds.
    #[inline]
    pub fn set_sample(&mut self, row: u32, col: u32, channel: usize, value: f32) {
        debug_assert!(self.in_bounds(row, col, channel), "sample out of bounds");
        let offset = self.offset(row, col) + channel;
        self.data[offset] = value;
    }

    /// Returns the pixel triple at (row, col).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (row, col) is out of bounds.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> [f32; 3] {
        debug_assert!(self.in_bounds(row, col, 0), "pixel out of bounds");
        let offset = self.offset(row, col);
        let mut result = [0.0; 3];
        result.copy_from_slice(&self.data[offset..offset + Self::CHANNELS]);
        result
    }

    /// Sets the pixel triple at (row, col).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (row, col) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, pixel: [f32; 3]) {
        debug_assert!(self.in_bounds(row, col, 0), "pixel out of bounds");
        let offset = self.offset(row, col);
        self.data[offset..offset + Self::CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: [f32; 3]) {
        for chunk in self.data.chunks_exact_mut(Self::CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of samples as a slice.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[f32] {
        debug_assert!(row < self.height, "row out of bounds");
        let start = self.offset(row, 0);
        let end = start + self.width as usize * Self::CHANNELS;
        &self.data[start..end]
    }

    /// Returns a mutable row of samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [f32] {
        debug_assert!(row < self.height, "row out of bounds");
        let start = self.offset(row, 0);
        let end = start + self.width as usize * Self::CHANNELS;
        &mut self.data[start..end]
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("channels", &Self::CHANNELS)
            .finish()
    }
}

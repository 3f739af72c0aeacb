//! Frequency-domain band filters.
//!
//! A [`FrequencyFilter`] lifts each channel onto a power-of-two complex grid
//! (tiling the image periodically to fill it), runs the forward FFT, zeroes a
//! rectangular band of the spectrum, inverts, and writes the magnitude of the
//! top-left window back into the image.

use num_complex::Complex64;
use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::fft::{SpectrumGrid, fft2d, ifft2d};
use crate::filter::Filter;
use crate::{OpsError, OpsResult};

/// Which side of the band split survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandMode {
    /// Remove a centered rectangle holding `share` of the spectrum area.
    LowPass,
    /// Keep a centered rectangle holding `1 - share` of the spectrum area.
    HighPass,
}

impl BandMode {
    /// Mode name for logs and listings.
    pub fn name(&self) -> &'static str {
        match self {
            BandMode::LowPass => "low-pass",
            BandMode::HighPass => "high-pass",
        }
    }
}

/// FFT band filter removing a `share` of the spectrum.
///
/// At `share = 0` the image passes through unchanged (up to round trip
/// error); at `share = 1` everything is removed.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyFilter {
    mode: BandMode,
    share: f32,
}

impl FrequencyFilter {
    /// Band filter removing `share` in `[0, 1]` of the spectrum.
    pub fn new(mode: BandMode, share: f32) -> OpsResult<Self> {
        if !(0.0..=1.0).contains(&share) {
            return Err(OpsError::InvalidParameter(format!(
                "Frequency share must be in [0, 1]: {share}"
            )));
        }
        Ok(Self { mode, share })
    }

    /// Low-pass filter removing `share` of the spectrum.
    pub fn low_pass(share: f32) -> OpsResult<Self> {
        Self::new(BandMode::LowPass, share)
    }

    /// High-pass filter removing `share` of the spectrum.
    pub fn high_pass(share: f32) -> OpsResult<Self> {
        Self::new(BandMode::HighPass, share)
    }

    /// Zero the stop band in place.
    ///
    /// The spectrum is never shifted, so DC sits at the grid corners and the
    /// centered rectangle carved here covers the highest frequencies.
    fn carve(&self, grid: &mut SpectrumGrid) {
        let (grid_h, grid_w) = (grid.height(), grid.width());
        let side = match self.mode {
            BandMode::LowPass => (self.share as f64).sqrt(),
            BandMode::HighPass => (1.0 - self.share as f64).sqrt(),
        };
        let band_h = (grid_h as f64 * side).round() as usize;
        let band_w = (grid_w as f64 * side).round() as usize;
        let v_gap = (grid_h - band_h) / 2;
        let h_gap = (grid_w - band_w) / 2;

        match self.mode {
            BandMode::LowPass => {
                for row in v_gap..v_gap + band_h {
                    for col in h_gap..h_gap + band_w {
                        *grid.at_mut(row, col) = Complex64::new(0.0, 0.0);
                    }
                }
            }
            BandMode::HighPass => {
                for row in 0..grid_h {
                    for col in 0..grid_w {
                        let kept = row >= v_gap
                            && row < v_gap + band_h
                            && col >= h_gap
                            && col < h_gap + band_w;
                        if !kept {
                            *grid.at_mut(row, col) = Complex64::new(0.0, 0.0);
                        }
                    }
                }
            }
        }
    }
}

impl Filter for FrequencyFilter {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        if image.is_empty() {
            return Ok(());
        }
        debug!(
            mode = self.mode.name(),
            share = self.share,
            "applying frequency filter"
        );

        let height = image.height() as usize;
        let width = image.width() as usize;
        let grid_h = height.next_power_of_two();
        let grid_w = width.next_power_of_two();
        let mut grid = SpectrumGrid::new(grid_h, grid_w);

        for ch in 0..Image::CHANNELS {
            // Tile the channel periodically out to the power-of-two grid.
            for row in 0..grid_h {
                for col in 0..grid_w {
                    let v = image.sample((row % height) as u32, (col % width) as u32, ch);
                    *grid.at_mut(row, col) = Complex64::new(v as f64, 0.0);
                }
            }
            fft2d(&mut grid)?;
            self.carve(&mut grid);
            ifft2d(&mut grid)?;
            for row in 0..height {
                for col in 0..width {
                    image.set_sample(row as u32, col as u32, ch, grid.at(row, col).norm() as f32);
                }
            }
        }
        Ok(())
    }
}

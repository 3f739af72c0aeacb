//! In-place radix-2 FFT over a 2D complex grid.
//!
//! The grid is transformed one lane at a time: every row, then every column
//! for the forward direction, and the reverse order for the inverse. Each
//! lane is permuted into bit-reversed order and then combined recursively,
//! so the recursion depth is bounded by `log2` of the lane length. Both
//! dimensions must be powers of two.
//!
//! The forward transform is unscaled; the inverse divides by `height * width`
//! at the end, so a round trip reproduces the input.

use num_complex::Complex64;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Dense row-major grid of complex spectrum samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumGrid {
    data: Vec<Complex64>,
    height: usize,
    width: usize,
}

impl SpectrumGrid {
    /// Zero-filled grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); height * width],
            height,
            width,
        }
    }

    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            height,
            width,
        }
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.width + col]
    }

    /// Mutable sample at `(row, col)`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Complex64 {
        &mut self.data[row * self.width + col]
    }

    fn lane_len(&self, lane: Lane) -> usize {
        match lane {
            Lane::Row(_) => self.width,
            Lane::Col(_) => self.height,
        }
    }

    #[inline]
    fn lane_get(&self, lane: Lane, index: usize) -> Complex64 {
        match lane {
            Lane::Row(row) => self.at(row, index),
            Lane::Col(col) => self.at(index, col),
        }
    }

    #[inline]
    fn lane_set(&mut self, lane: Lane, index: usize, value: Complex64) {
        match lane {
            Lane::Row(row) => *self.at_mut(row, index) = value,
            Lane::Col(col) => *self.at_mut(index, col) = value,
        }
    }
}

/// One row or column of the grid.
#[derive(Debug, Clone, Copy)]
enum Lane {
    Row(usize),
    Col(usize),
}

/// Forward 2D FFT: transforms every row, then every column.
pub fn fft2d(grid: &mut SpectrumGrid) -> OpsResult<()> {
    check_dimensions(grid)?;
    trace!(height = grid.height, width = grid.width, "forward fft");
    for row in 0..grid.height {
        transform_lane(grid, Lane::Row(row), -1.0);
    }
    for col in 0..grid.width {
        transform_lane(grid, Lane::Col(col), -1.0);
    }
    Ok(())
}

/// Inverse 2D FFT: transforms every column, then every row, then divides by
/// the cell count.
pub fn ifft2d(grid: &mut SpectrumGrid) -> OpsResult<()> {
    check_dimensions(grid)?;
    trace!(height = grid.height, width = grid.width, "inverse fft");
    for col in 0..grid.width {
        transform_lane(grid, Lane::Col(col), 1.0);
    }
    for row in 0..grid.height {
        transform_lane(grid, Lane::Row(row), 1.0);
    }
    let scale = 1.0 / (grid.height * grid.width) as f64;
    for value in grid.data.iter_mut() {
        *value *= scale;
    }
    Ok(())
}

fn check_dimensions(grid: &SpectrumGrid) -> OpsResult<()> {
    if !grid.height.is_power_of_two() || !grid.width.is_power_of_two() {
        return Err(OpsError::InvalidDimensions(format!(
            "FFT grid dimensions must be powers of two: {}x{}",
            grid.height, grid.width
        )));
    }
    Ok(())
}

/// Transform one lane in place. `sign` is -1 for the forward direction and
/// +1 for the inverse.
fn transform_lane(grid: &mut SpectrumGrid, lane: Lane, sign: f64) {
    let len = grid.lane_len(lane);
    if len < 2 {
        return;
    }
    // Permute into bit-reversed order so the recursion merges contiguous
    // halves.
    let shift = usize::BITS - len.trailing_zeros();
    for i in 0..len {
        let j = i.reverse_bits() >> shift;
        if i < j {
            let a = grid.lane_get(lane, i);
            let b = grid.lane_get(lane, j);
            grid.lane_set(lane, i, b);
            grid.lane_set(lane, j, a);
        }
    }
    combine(grid, lane, 0, len, sign);
}

/// Recursively combine a bit-reversed segment into its spectrum.
fn combine(grid: &mut SpectrumGrid, lane: Lane, start: usize, len: usize, sign: f64) {
    if len == 2 {
        let a = grid.lane_get(lane, start);
        let b = grid.lane_get(lane, start + 1);
        grid.lane_set(lane, start, a + b);
        grid.lane_set(lane, start + 1, a - b);
        return;
    }
    let half = len / 2;
    combine(grid, lane, start, half, sign);
    combine(grid, lane, start + half, half, sign);

    let step = Complex64::from_polar(1.0, sign * std::f64::consts::TAU / len as f64);
    let mut twiddle = Complex64::new(1.0, 0.0);
    for k in 0..half {
        let even = grid.lane_get(lane, start + k);
        let odd = grid.lane_get(lane, start + half + k) * twiddle;
        grid.lane_set(lane, start + k, even + odd);
        grid.lane_set(lane, start + half + k, even - odd);
        twiddle *= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn assert_close(a: Complex64, b: Complex64) {
        assert!((a - b).norm() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(fft2d(&mut SpectrumGrid::new(3, 4)).is_err());
        assert!(fft2d(&mut SpectrumGrid::new(4, 6)).is_err());
        assert!(ifft2d(&mut SpectrumGrid::new(0, 4)).is_err());
        assert!(fft2d(&mut SpectrumGrid::new(4, 4)).is_ok());
    }

    #[test]
    fn test_single_cell_identity() {
        let mut grid = SpectrumGrid::new(1, 1);
        *grid.at_mut(0, 0) = Complex64::new(3.5, -1.0);
        fft2d(&mut grid).unwrap();
        assert_close(grid.at(0, 0), Complex64::new(3.5, -1.0));
        ifft2d(&mut grid).unwrap();
        assert_close(grid.at(0, 0), Complex64::new(3.5, -1.0));
    }

    #[test]
    fn test_two_point_lane() {
        let mut grid = SpectrumGrid::from_fn(1, 2, |_, col| {
            Complex64::new(if col == 0 { 1.0 } else { -1.0 }, 0.0)
        });
        fft2d(&mut grid).unwrap();
        assert_close(grid.at(0, 0), Complex64::new(0.0, 0.0));
        assert_close(grid.at(0, 1), Complex64::new(2.0, 0.0));

        let mut grid = SpectrumGrid::from_fn(2, 1, |row, _| {
            Complex64::new(if row == 0 { 3.0 } else { 1.0 }, 0.0)
        });
        fft2d(&mut grid).unwrap();
        assert_close(grid.at(0, 0), Complex64::new(4.0, 0.0));
        assert_close(grid.at(1, 0), Complex64::new(2.0, 0.0));
    }

    #[test]
    fn test_constant_concentrates_at_dc() {
        let mut grid = SpectrumGrid::from_fn(4, 4, |_, _| Complex64::new(1.0, 0.0));
        fft2d(&mut grid).unwrap();
        assert_close(grid.at(0, 0), Complex64::new(16.0, 0.0));
        for row in 0..4 {
            for col in 0..4 {
                if row != 0 || col != 0 {
                    assert_close(grid.at(row, col), Complex64::new(0.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn test_impulse_has_flat_spectrum() {
        let mut grid = SpectrumGrid::new(4, 8);
        *grid.at_mut(0, 0) = Complex64::new(1.0, 0.0);
        fft2d(&mut grid).unwrap();
        for row in 0..4 {
            for col in 0..8 {
                assert_close(grid.at(row, col), Complex64::new(1.0, 0.0));
            }
        }
    }

    #[test]
    fn test_round_trip_restores_input() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let original = SpectrumGrid::from_fn(8, 16, |_, _| {
            Complex64::new(rng.random::<f64>() * 255.0, 0.0)
        });
        let mut grid = original.clone();
        fft2d(&mut grid).unwrap();
        ifft2d(&mut grid).unwrap();
        for row in 0..8 {
            for col in 0..16 {
                assert_close(grid.at(row, col), original.at(row, col));
            }
        }
    }

    #[test]
    fn test_forward_matches_direct_dft() {
        // Cross-check the fast path against the textbook double sum.
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let original = SpectrumGrid::from_fn(4, 4, |_, _| {
            Complex64::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5)
        });
        let mut fast = original.clone();
        fft2d(&mut fast).unwrap();

        for u in 0..4 {
            for v in 0..4 {
                let mut sum = Complex64::new(0.0, 0.0);
                for row in 0..4 {
                    for col in 0..4 {
                        let angle = -std::f64::consts::TAU
                            * (u as f64 * row as f64 / 4.0 + v as f64 * col as f64 / 4.0);
                        sum += original.at(row, col) * Complex64::from_polar(1.0, angle);
                    }
                }
                assert!((fast.at(u, v) - sum).norm() < 1e-9);
            }
        }
    }
}

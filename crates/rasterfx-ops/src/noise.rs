//! Noise injection filters.
//!
//! Each filter owns the pseudo-random generator it draws from, handed in at
//! construction so a seeded run reproduces exactly. Additive variants draw a
//! fresh sample for every channel of every pixel; impulse noise decides once
//! per pixel and blows out all channels together.

use rand::Rng;
use rand::rngs::StdRng;
use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::filter::{Filter, for_each_pixel};
use crate::{OpsError, OpsResult};

/// Uniform additive noise with an integer amplitude.
///
/// Every channel receives an independent integer sample from
/// `[-amplitude/2, amplitude/2 + amplitude%2]`; results clamp to `[0, 255]`.
#[derive(Debug, Clone)]
pub struct UniformNoise {
    amplitude: u32,
    rng: StdRng,
}

impl UniformNoise {
    /// Uniform noise with `amplitude` in `(0, 255]`.
    pub fn new(amplitude: u32, rng: StdRng) -> OpsResult<Self> {
        if amplitude == 0 || amplitude > 255 {
            return Err(OpsError::InvalidParameter(format!(
                "Noise amplitude must be in (0, 255]: {amplitude}"
            )));
        }
        Ok(Self { amplitude, rng })
    }
}

impl Filter for UniformNoise {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(amplitude = self.amplitude, "applying uniform noise");
        let lo = -((self.amplitude / 2) as i32);
        let hi = (self.amplitude / 2 + self.amplitude % 2) as i32;
        let rng = &mut self.rng;
        for_each_pixel(image, |pixel| {
            for v in pixel.iter_mut() {
                let sample = rng.random_range(lo..=hi) as f32;
                *v = (*v + sample).clamp(0.0, 255.0);
            }
        });
        Ok(())
    }
}

/// Gaussian additive noise.
///
/// Samples come from a Box-Muller transform of two uniform draws, scaled by
/// `sigma` and shifted by `mean`; results clamp to `[0, 255]`.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    sigma: f32,
    mean: f32,
    rng: StdRng,
}

impl GaussianNoise {
    /// Gaussian noise with standard deviation `sigma` (> 0) around `mean`.
    pub fn new(sigma: f32, mean: f32, rng: StdRng) -> OpsResult<Self> {
        if sigma <= 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "Noise sigma must be positive: {sigma}"
            )));
        }
        Ok(Self { sigma, mean, rng })
    }
}

impl Filter for GaussianNoise {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(sigma = self.sigma, mean = self.mean, "applying gaussian noise");
        let (sigma, mean) = (self.sigma, self.mean);
        let rng = &mut self.rng;
        for_each_pixel(image, |pixel| {
            for v in pixel.iter_mut() {
                let sample = sigma * standard_normal(rng) + mean;
                *v = (*v + sample).clamp(0.0, 255.0);
            }
        });
        Ok(())
    }
}

/// One standard normal draw via the Box-Muller transform.
fn standard_normal(rng: &mut StdRng) -> f32 {
    // 1 - u keeps the logarithm argument away from zero.
    let u: f64 = 1.0 - rng.random::<f64>();
    let phi: f64 = rng.random();
    ((-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * phi).cos()) as f32
}

/// Impulse ("salt") noise that blows out whole pixels to white.
#[derive(Debug, Clone)]
pub struct ImpulseNoise {
    probability: f32,
    rng: StdRng,
}

impl ImpulseNoise {
    /// Impulse noise hitting each pixel with `probability` in `[0, 1]`.
    pub fn new(probability: f32, rng: StdRng) -> OpsResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(OpsError::InvalidParameter(format!(
                "Impulse probability must be in [0, 1]: {probability}"
            )));
        }
        Ok(Self { probability, rng })
    }
}

impl Filter for ImpulseNoise {
    fn apply(&mut self, image: &mut Image) -> OpsResult<()> {
        debug!(probability = self.probability, "applying impulse noise");
        let p = self.probability as f64;
        let rng = &mut self.rng;
        for_each_pixel(image, |pixel| {
            if rng.random::<f64>() < p {
                pixel.fill(255.0);
            }
        });
        Ok(())
    }
}

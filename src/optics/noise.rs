//! Synthetic measurement noise

use crate::io::error::{Result, invalid_parameter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Add seeded Gaussian noise to a pattern and clip the result to [0, 1]
///
/// The same `seed` always produces the same measurement, which keeps
/// comparisons against synthetic data reproducible.
///
/// # Errors
///
/// Returns `InvalidParameter` if `sigma` is negative or not finite
pub fn add_measurement_noise(pattern: &[f64], sigma: f64, seed: u64) -> Result<Vec<f64>> {
    let invalid = || invalid_parameter("sigma", &sigma, &"must be a finite non-negative number");
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(invalid());
    }
    let normal = Normal::new(0.0, sigma).map_err(|_bad_sigma| invalid())?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(pattern
        .iter()
        .map(|value| (value + normal.sample(&mut rng)).clamp(0.0, 1.0))
        .collect())
}

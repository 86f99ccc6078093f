//! Single-slit diffraction envelope with a divide-by-zero guard

use crate::io::configuration::BETA_EPSILON;

/// Replace a diffraction phase too close to zero by `+BETA_EPSILON`
///
/// The substitution always yields the positive floor, regardless of the sign
/// of the input, so that the centre of a pattern evaluates reproducibly.
pub const fn guard_beta(beta: f64) -> f64 {
    if beta.abs() < BETA_EPSILON {
        BETA_EPSILON
    } else {
        beta
    }
}

/// Evaluate `(sin β / β)²` after applying [`guard_beta`]
pub fn sinc_squared(beta: f64) -> f64 {
    let safe = guard_beta(beta);
    (safe.sin() / safe).powi(2)
}

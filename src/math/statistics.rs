//! Sample statistics for comparing intensity sequences

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of two index-aligned sequences
///
/// Extra samples in the longer slice are ignored. The result is clamped to
/// [-1, 1] to absorb rounding; it is `NaN` when either sequence has zero
/// variance or there are no samples.
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    let a = a.get(..n).unwrap_or_default();
    let b = b.get(..n).unwrap_or_default();
    let (Some(mean_a), Some(mean_b)) = (mean(a), mean(b)) else {
        return f64::NAN;
    };

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        variance_a += dx * dx;
        variance_b += dy * dy;
    }

    let scale = variance_a.sqrt() * variance_b.sqrt();
    if scale == 0.0 || !scale.is_finite() {
        return f64::NAN;
    }
    (covariance / scale).clamp(-1.0, 1.0)
}

/// Root-mean-square difference of two index-aligned sequences
///
/// Returns 0 when there are no samples to compare.
pub fn rms_error(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum_squares: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    (sum_squares / n as f64).sqrt()
}

//! Peak and minimum detection with height thresholds and gap suppression
//!
//! Both kinds of extrema go through the same routine, [`find_peaks`]; minima
//! are the peaks of the negated signal.

use crate::io::configuration::{
    DEFAULT_MIN_PEAK_GAP, DEFAULT_MIN_PEAK_HEIGHT, MINIMA_HEIGHT_THRESHOLD,
};
use serde::Serialize;

/// Indices of the local maxima and minima of an intensity sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtremaSet {
    /// Peak indices in ascending order
    pub peaks: Vec<usize>,
    /// Minimum indices in ascending order
    pub minima: Vec<usize>,
}

impl ExtremaSet {
    /// Detect extrema with the default height threshold and gap
    pub fn detect(intensity: &[f64]) -> Self {
        find_extrema(intensity, DEFAULT_MIN_PEAK_HEIGHT, DEFAULT_MIN_PEAK_GAP)
    }
}

// Plateaus are runs of exactly repeated samples
#[allow(clippy::float_cmp)]
fn local_maxima(signal: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    let last = signal.len().saturating_sub(1);
    let mut i = 1;

    while i < last {
        let (Some(&previous), Some(&current)) = (signal.get(i - 1), signal.get(i)) else {
            break;
        };
        if previous < current {
            let mut ahead = i + 1;
            while ahead < last && signal.get(ahead).is_some_and(|&v| v == current) {
                ahead += 1;
            }
            if signal.get(ahead).is_some_and(|&next| next < current) {
                // Flat tops report their midpoint, rounding left
                maxima.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }

    maxima
}

fn suppress_within_gap(signal: &[f64], candidates: &[usize], min_gap: usize) -> Vec<usize> {
    let value_at = |candidate: usize| {
        candidates
            .get(candidate)
            .and_then(|&index| signal.get(index))
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    };

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| value_at(a).total_cmp(&value_at(b)));

    let mut keep = vec![true; candidates.len()];
    for &current in order.iter().rev() {
        if !keep.get(current).copied().unwrap_or(false) {
            continue;
        }
        let Some(&position) = candidates.get(current) else {
            continue;
        };

        for (&neighbour, flag) in candidates.iter().zip(keep.iter_mut()).take(current).rev() {
            if position - neighbour >= min_gap {
                break;
            }
            *flag = false;
        }
        for (&neighbour, flag) in candidates.iter().zip(keep.iter_mut()).skip(current + 1) {
            if neighbour - position >= min_gap {
                break;
            }
            *flag = false;
        }
    }

    candidates
        .iter()
        .zip(keep)
        .filter_map(|(&index, kept)| kept.then_some(index))
        .collect()
}

/// Non-maximum suppression peak finder over a 1-D signal
///
/// A sample is a candidate when it rises above its left neighbour and the
/// next differing sample to its right is lower; flat tops report their
/// midpoint and the two end samples are never peaks. Candidates below
/// `min_height` are dropped. The remaining candidates are then visited from
/// highest to lowest (equal values: rightmost first), and each surviving
/// candidate removes every other candidate closer than `min_gap` samples.
///
/// Returned indices are in ascending order.
pub fn find_peaks(signal: &[f64], min_height: f64, min_gap: usize) -> Vec<usize> {
    let candidates: Vec<usize> = local_maxima(signal)
        .into_iter()
        .filter(|&index| signal.get(index).is_some_and(|&value| value >= min_height))
        .collect();

    if min_gap <= 1 || candidates.len() < 2 {
        return candidates;
    }
    suppress_within_gap(signal, &candidates, min_gap)
}

/// Find peaks above `min_peak_height` and minima below 0.9, each at least
/// `min_gap` samples apart from accepted extrema of the same kind
pub fn find_extrema(intensity: &[f64], min_peak_height: f64, min_gap: usize) -> ExtremaSet {
    let peaks = find_peaks(intensity, min_peak_height, min_gap);

    let inverted: Vec<f64> = intensity.iter().map(|value| -value).collect();
    let minima = find_peaks(&inverted, MINIMA_HEIGHT_THRESHOLD, min_gap);

    ExtremaSet { peaks, minima }
}

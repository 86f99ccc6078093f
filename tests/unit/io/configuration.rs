//! Tests for reference setup values and analysis thresholds

#[cfg(test)]
mod tests {
    use doubleslit::io::configuration::{
        BETA_EPSILON, DEFAULT_MIN_PEAK_GAP, DEFAULT_MIN_PEAK_HEIGHT, DEFAULT_RESOLUTION,
        DEFAULT_SCREEN_WIDTH, DEFAULT_SLIT_SEPARATION, DEFAULT_SLIT_WIDTH, DEFAULT_SWEEP_END,
        DEFAULT_SWEEP_START, EXCELLENT_AGREEMENT, FAIR_AGREEMENT, FRINGE_PEAK_HEIGHT,
        GOOD_AGREEMENT, MIN_RESOLUTION, MINIMA_HEIGHT_THRESHOLD, PATTERN_SUFFIX,
    };

    // Tests the divide-by-zero guard value
    // Verified by changing the epsilon
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_beta_epsilon_value() {
        assert_eq!(BETA_EPSILON, 1e-10);
    }

    // Tests extrema defaults
    // Verified by changing default thresholds
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_extrema_defaults() {
        assert_eq!(DEFAULT_MIN_PEAK_HEIGHT, 0.1);
        assert_eq!(DEFAULT_MIN_PEAK_GAP, 10);
        assert_eq!(MINIMA_HEIGHT_THRESHOLD, -0.9);
        assert!(FRINGE_PEAK_HEIGHT > DEFAULT_MIN_PEAK_HEIGHT);
    }

    // Tests the reference geometry describes separated slits on a small-angle screen
    // Verified by swapping slit width and separation
    #[test]
    fn test_reference_geometry() {
        assert!(DEFAULT_SLIT_SEPARATION > DEFAULT_SLIT_WIDTH);
        assert!(DEFAULT_SCREEN_WIDTH / 2.0 < 0.1);
        assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
        assert_eq!(MIN_RESOLUTION, 2);
    }

    // Tests agreement bounds are ordered
    // Verified by swapping good and fair bounds
    #[test]
    fn test_agreement_bounds_ordered() {
        assert!(EXCELLENT_AGREEMENT < GOOD_AGREEMENT);
        assert!(GOOD_AGREEMENT < FAIR_AGREEMENT);
    }

    // Tests the sweep range covers the visible band and the render suffix
    // Verified by reversing the sweep range
    #[test]
    fn test_sweep_range_and_suffix() {
        assert!(DEFAULT_SWEEP_START < DEFAULT_SWEEP_END);
        assert!(DEFAULT_SWEEP_START >= 380e-9);
        assert!(DEFAULT_SWEEP_END <= 750e-9);
        assert_eq!(PATTERN_SUFFIX, "_pattern");
    }
}

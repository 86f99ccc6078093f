//! Physical defaults and analysis tuning constants

// Red laser pointer through foil slits, screen one metre away
/// Default light wavelength in meters
pub const DEFAULT_WAVELENGTH: f64 = 650e-9;
/// Default width of each slit in meters
pub const DEFAULT_SLIT_WIDTH: f64 = 50e-6;
/// Default distance between slit centers in meters
pub const DEFAULT_SLIT_SEPARATION: f64 = 200e-6;
/// Default distance from the slits to the screen in meters
pub const DEFAULT_SCREEN_DISTANCE: f64 = 1.0;
/// Default observed screen width in meters
pub const DEFAULT_SCREEN_WIDTH: f64 = 0.01;
/// Default number of screen samples
pub const DEFAULT_RESOLUTION: usize = 1000;
/// Smallest grid that still spans the screen
pub const MIN_RESOLUTION: usize = 2;

// Substituted for |beta| below this value instead of taking the analytic limit
/// Diffraction phase floor used by the sinc-squared envelope
pub const BETA_EPSILON: f64 = 1e-10;

/// Largest half-angle in radians the model is designed to be used at
pub const DESIGNED_HALF_ANGLE: f64 = 0.1;

/// Speed of light used for wave frequency in meters per second
pub const SPEED_OF_LIGHT: f64 = 3e8;

// Extrema detection
/// Peaks must reach at least this normalized intensity
pub const DEFAULT_MIN_PEAK_HEIGHT: f64 = 0.1;
/// Accepted extrema of one kind are at least this many samples apart
pub const DEFAULT_MIN_PEAK_GAP: usize = 10;
// Fixed, not scaled by the signal's dynamic range
/// Height threshold applied to the negated signal when searching for minima
pub const MINIMA_HEIGHT_THRESHOLD: f64 = -0.9;
/// Peak height used when measuring bright fringe spacing
pub const FRINGE_PEAK_HEIGHT: f64 = 0.3;

// Relative spacing error bounds for each agreement grade
/// Upper bound for excellent agreement
pub const EXCELLENT_AGREEMENT: f64 = 0.05;
/// Upper bound for good agreement
pub const GOOD_AGREEMENT: f64 = 0.15;
/// Upper bound for fair agreement
pub const FAIR_AGREEMENT: f64 = 0.30;

// Synthetic measurements
/// Standard deviation of the additive measurement noise
pub const DEFAULT_NOISE_SIGMA: f64 = 0.05;
/// Fixed seed for reproducible synthetic measurements
pub const DEFAULT_SEED: u64 = 42;

// Image collaborators
/// Full scale of an 8-bit pixel
pub const PIXEL_FULL_SCALE: f64 = 255.0;
/// Rows used when rendering a 1-D pattern as an image
pub const PATTERN_IMAGE_ROWS: u32 = 50;
/// Suffix added to rendered pattern filenames
pub const PATTERN_SUFFIX: &str = "_pattern";

// Wavelength sweep
/// Shortest default sweep wavelength in meters
pub const DEFAULT_SWEEP_START: f64 = 450e-9;
/// Longest default sweep wavelength in meters
pub const DEFAULT_SWEEP_END: f64 = 700e-9;
/// Default number of sweep steps
pub const DEFAULT_SWEEP_STEPS: usize = 6;
/// Width of the sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

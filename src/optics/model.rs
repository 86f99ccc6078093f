//! Fraunhofer intensity of single and double slits
//!
//! For a screen position `y` at distance `D` the diffraction angle is
//! `θ = atan(y / D)`, and the two phase parameters are
//!
//! ```text
//! β = π a sin θ / λ      (slit width a)
//! δ = π d sin θ / λ      (slit separation d)
//! ```
//!
//! A single slit produces the sinc-squared envelope `(sin β / β)²`; two slits
//! modulate that envelope with the interference term `cos² δ`.

use crate::io::configuration::DESIGNED_HALF_ANGLE;
use crate::io::error::{Result, degenerate_input};
use crate::math::sinc::sinc_squared;
use crate::optics::grid::CoordinateGrid;
use crate::optics::setup::OpticalSetup;
use ndarray::Array1;
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Slit geometry to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlitMode {
    /// One slit, diffraction envelope only
    Single,
    /// Two slits, envelope modulated by interference fringes
    #[default]
    Double,
}

/// Intensity values normalized so the brightest sample is 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityPattern {
    values: Array1<f64>,
}

impl IntensityPattern {
    /// Normalized intensity values
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Values as a contiguous slice
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().unwrap_or_default()
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pattern holds no samples (never true once normalized)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the pattern, returning the values
    pub fn into_inner(self) -> Array1<f64> {
        self.values
    }
}

fn sin_theta(y: f64, screen_distance: f64) -> f64 {
    (y / screen_distance).atan().sin()
}

// Operand order (π·a·sinθ)/λ is significant for bit-exact results
fn phase(aperture: f64, sin_theta: f64, wavelength: f64) -> f64 {
    (PI * aperture * sin_theta) / wavelength
}

/// Unnormalized single-slit intensity `(sin β / β)²` at every grid position
///
/// A phase with `|β| < 1e-10` is replaced by `1e-10`, so the exact centre
/// evaluates `sin(1e-10)/1e-10` instead of dividing by zero.
pub fn single_slit_intensity(grid: &CoordinateGrid, setup: &OpticalSetup) -> Array1<f64> {
    grid.positions().mapv(|y| {
        let s = sin_theta(y, setup.screen_distance());
        sinc_squared(phase(setup.slit_width(), s, setup.wavelength()))
    })
}

/// Unnormalized double-slit intensity `(sin β / β)² cos² δ` at every grid position
pub fn double_slit_intensity(grid: &CoordinateGrid, setup: &OpticalSetup) -> Array1<f64> {
    grid.positions().mapv(|y| {
        let s = sin_theta(y, setup.screen_distance());
        let envelope = sinc_squared(phase(setup.slit_width(), s, setup.wavelength()));
        let interference = phase(setup.slit_separation(), s, setup.wavelength())
            .cos()
            .powi(2);
        envelope * interference
    })
}

/// Scale a raw signal so its maximum becomes 1.0
///
/// # Errors
///
/// Returns `DegenerateInput` if the signal is empty or its maximum is not a
/// finite positive number
pub fn normalize(raw: Array1<f64>) -> Result<IntensityPattern> {
    if raw.is_empty() {
        return Err(degenerate_input(&"signal has no samples"));
    }
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max.is_finite() && max > 0.0) {
        return Err(degenerate_input(&format!(
            "maximum {max} is not a finite positive value"
        )));
    }
    Ok(IntensityPattern {
        values: raw.mapv_into(|v| v / max),
    })
}

/// Build the grid, evaluate the chosen geometry and normalize
///
/// # Errors
///
/// Returns `InvalidParameter` if `screen_width` is not positive or
/// `resolution` is below 2, and `DegenerateInput` if the raw signal cannot be
/// normalized
pub fn evaluate(
    setup: &OpticalSetup,
    screen_width: f64,
    resolution: usize,
    mode: SlitMode,
) -> Result<(CoordinateGrid, IntensityPattern)> {
    let grid = CoordinateGrid::symmetric(screen_width, resolution)?;

    let half_angle = grid.max_half_angle(setup.screen_distance());
    if half_angle > DESIGNED_HALF_ANGLE {
        debug!(
            half_angle,
            limit = DESIGNED_HALF_ANGLE,
            "screen extends beyond the designed small-angle regime"
        );
    }

    let pattern = PatternModel::new(*setup).pattern_on(&grid, mode)?;

    debug!(
        ?mode,
        resolution,
        screen_width,
        wavelength = setup.wavelength(),
        "evaluated slit pattern"
    );

    Ok((grid, pattern))
}

/// Evaluator bound to one optical setup
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PatternModel {
    setup: OpticalSetup,
}

impl PatternModel {
    /// Create a model for `setup`
    pub const fn new(setup: OpticalSetup) -> Self {
        Self { setup }
    }

    /// The setup this model evaluates
    pub const fn setup(&self) -> &OpticalSetup {
        &self.setup
    }

    /// Raw intensity of the chosen geometry on an existing grid
    pub fn raw_intensity(&self, grid: &CoordinateGrid, mode: SlitMode) -> Array1<f64> {
        match mode {
            SlitMode::Single => single_slit_intensity(grid, &self.setup),
            SlitMode::Double => double_slit_intensity(grid, &self.setup),
        }
    }

    /// Normalized intensity on an existing grid
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if the raw signal cannot be normalized
    pub fn pattern_on(&self, grid: &CoordinateGrid, mode: SlitMode) -> Result<IntensityPattern> {
        normalize(self.raw_intensity(grid, mode))
    }

    /// Run a complete simulation over a symmetric screen
    ///
    /// # Errors
    ///
    /// See [`evaluate`]
    pub fn evaluate(
        &self,
        screen_width: f64,
        resolution: usize,
        mode: SlitMode,
    ) -> Result<(CoordinateGrid, IntensityPattern)> {
        evaluate(&self.setup, screen_width, resolution, mode)
    }
}

//! Fringe spacing predictions and assessment of measured spacings
//!
//! Bright double-slit fringes sit a distance `Δy = λD/d` apart on the screen.
//! These helpers turn that law into predictions for a setup, grade a measured
//! spacing against it, and invert it to estimate the slit separation.

use crate::io::configuration::{EXCELLENT_AGREEMENT, FAIR_AGREEMENT, GOOD_AGREEMENT};
use crate::io::error::{Result, ensure_positive};
use crate::math::statistics::mean;
use crate::optics::grid::CoordinateGrid;
use crate::optics::setup::OpticalSetup;
use serde::Serialize;

/// What the far-field law predicts for a setup and observed screen width
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FringePrediction {
    /// Distance between adjacent bright fringes in meters
    pub spacing: f64,
    /// Angle between adjacent bright fringes in radians
    pub angular_spacing: f64,
    /// Angle between adjacent bright fringes in degrees
    pub angular_spacing_degrees: f64,
    /// Bright fringes expected on one side of the centre
    pub fringes_per_side: usize,
    /// Width of the central bright fringe in meters
    pub central_width: f64,
}

impl FringePrediction {
    /// Predict fringe geometry for `setup` over `observed_width` meters of screen
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `observed_width` is not a finite positive number
    pub fn for_setup(setup: &OpticalSetup, observed_width: f64) -> Result<Self> {
        let observed_width = ensure_positive("observed_width", observed_width)?;
        let spacing = fringe_spacing(setup);
        let angular_spacing = setup.wavelength() / setup.slit_separation();

        Ok(Self {
            spacing,
            angular_spacing,
            angular_spacing_degrees: angular_spacing.to_degrees(),
            fringes_per_side: (observed_width / (2.0 * spacing)).floor() as usize,
            central_width: 2.0 * spacing,
        })
    }
}

/// Bright fringe spacing `λD/d` in meters
pub fn fringe_spacing(setup: &OpticalSetup) -> f64 {
    setup.wavelength() * setup.screen_distance() / setup.slit_separation()
}

/// Qualitative grade of a measured spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Agreement {
    /// Relative error below 5%
    Excellent,
    /// Relative error below 15%
    Good,
    /// Relative error below 30%, systematic error likely
    Fair,
    /// Anything worse
    Poor,
}

impl Agreement {
    /// Grade a relative error
    pub fn from_relative_error(relative_error: f64) -> Self {
        if relative_error < EXCELLENT_AGREEMENT {
            Self::Excellent
        } else if relative_error < GOOD_AGREEMENT {
            Self::Good
        } else if relative_error < FAIR_AGREEMENT {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Measured spacing compared with the predicted one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingAssessment {
    /// Measured spacing in meters
    pub measured: f64,
    /// Predicted spacing in meters
    pub theoretical: f64,
    /// Absolute difference in meters
    pub absolute_error: f64,
    /// Absolute difference relative to the prediction
    pub relative_error: f64,
    /// Grade of the relative error
    pub agreement: Agreement,
}

/// Compare a measured spacing with the predicted one
///
/// # Errors
///
/// Returns `InvalidParameter` if either spacing is not a finite positive number
pub fn assess_spacing(measured: f64, theoretical: f64) -> Result<SpacingAssessment> {
    let measured = ensure_positive("measured_spacing", measured)?;
    let theoretical = ensure_positive("theoretical_spacing", theoretical)?;
    let absolute_error = (measured - theoretical).abs();
    let relative_error = absolute_error / theoretical;

    Ok(SpacingAssessment {
        measured,
        theoretical,
        absolute_error,
        relative_error,
        agreement: Agreement::from_relative_error(relative_error),
    })
}

/// Slit separation implied by a measured spacing, `λD/Δy`
///
/// # Errors
///
/// Returns `InvalidParameter` if any argument is not a finite positive number
pub fn estimate_slit_separation(
    wavelength: f64,
    screen_distance: f64,
    measured_spacing: f64,
) -> Result<f64> {
    let wavelength = ensure_positive("wavelength", wavelength)?;
    let screen_distance = ensure_positive("screen_distance", screen_distance)?;
    let measured_spacing = ensure_positive("measured_spacing", measured_spacing)?;
    Ok(wavelength * screen_distance / measured_spacing)
}

/// Fringe spacing uncertainty propagated from the setup measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingUncertainty {
    /// Relative uncertainty of the screen distance
    pub relative_distance: f64,
    /// Relative uncertainty of the slit separation
    pub relative_separation: f64,
    /// Combined relative uncertainty of the spacing
    pub relative: f64,
    /// Combined absolute uncertainty of the spacing in meters
    pub absolute: f64,
}

/// Propagate distance and separation uncertainties into the fringe spacing
///
/// Wavelength uncertainty is treated as negligible, so
/// `δ(Δy)/Δy = sqrt((δD/D)² + (δd/d)²)`.
///
/// # Errors
///
/// Returns `InvalidParameter` if an uncertainty is negative or not finite
pub fn propagate_spacing_uncertainty(
    setup: &OpticalSetup,
    distance_uncertainty: f64,
    separation_uncertainty: f64,
) -> Result<SpacingUncertainty> {
    let distance_uncertainty = ensure_non_negative("distance_uncertainty", distance_uncertainty)?;
    let separation_uncertainty =
        ensure_non_negative("separation_uncertainty", separation_uncertainty)?;

    let relative_distance = distance_uncertainty / setup.screen_distance();
    let relative_separation = separation_uncertainty / setup.slit_separation();
    let relative = relative_distance.hypot(relative_separation);

    Ok(SpacingUncertainty {
        relative_distance,
        relative_separation,
        relative,
        absolute: relative * fringe_spacing(setup),
    })
}

fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        Ok(value)
    } else {
        ensure_positive(parameter, value)
    }
}

/// Mean distance between adjacent detected peaks, in meters
///
/// Returns `None` with fewer than two peaks or a peak index outside the grid.
pub fn measured_spacing(grid: &CoordinateGrid, peaks: &[usize]) -> Option<f64> {
    let positions: Vec<f64> = peaks
        .iter()
        .map(|&index| grid.get(index))
        .collect::<Option<_>>()?;
    let gaps: Vec<f64> = positions
        .iter()
        .zip(positions.iter().skip(1))
        .map(|(a, b)| b - a)
        .collect();
    mean(&gaps)
}

//! Fraunhofer single and double slit intensity model with tools for validating measured patterns
//!
//! The optical model evaluates the normalized far-field intensity of one or
//! two slits over a screen, and the analyzer scores a measured 1-D intensity
//! profile against it through correlation, RMS error and extrema positions.

#![forbid(unsafe_code)]

/// Extrema detection, similarity scoring and fringe spacing assessment
pub mod analysis;
/// Input/output collaborators, configuration and error handling
pub mod io;
/// Numerical helpers for the model and the analyzer
pub mod math;
/// Far-field optical model of slit diffraction
pub mod optics;

pub use analysis::comparison::{ComparisonResult, PatternAnalyzer, compare};
pub use analysis::extrema::{ExtremaSet, find_extrema};
pub use io::error::{Result, SimulationError};
pub use optics::{CoordinateGrid, IntensityPattern, OpticalSetup, PatternModel, SlitMode};

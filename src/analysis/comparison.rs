//! Similarity scoring between an experimental and a theoretical pattern

use crate::analysis::extrema::ExtremaSet;
use crate::io::configuration::MIN_RESOLUTION;
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::math::statistics::{pearson_correlation, rms_error};
use crate::optics::model::{IntensityPattern, PatternModel, SlitMode};
use serde::Serialize;
use tracing::debug;

/// Outcome of comparing two index-aligned intensity sequences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Pearson correlation coefficient in [-1, 1], `NaN` if either input is constant
    pub correlation: f64,
    /// Root-mean-square difference
    pub rms_error: f64,
    /// Peak indices of the experimental sequence
    pub experimental_peaks: Vec<usize>,
    /// Peak indices of the theoretical sequence
    pub theoretical_peaks: Vec<usize>,
    /// Minimum indices of the experimental sequence
    pub experimental_minima: Vec<usize>,
    /// Minimum indices of the theoretical sequence
    pub theoretical_minima: Vec<usize>,
}

/// Score `experimental` against `theoretical` and extract the extrema of both
///
/// # Errors
///
/// Returns `NoData` if `experimental` is empty and `LengthMismatch` if the
/// sequences differ in length
pub fn compare(experimental: &[f64], theoretical: &[f64]) -> Result<ComparisonResult> {
    if experimental.is_empty() {
        return Err(SimulationError::NoData);
    }
    if experimental.len() != theoretical.len() {
        return Err(SimulationError::LengthMismatch {
            experimental: experimental.len(),
            theoretical: theoretical.len(),
        });
    }

    let correlation = pearson_correlation(experimental, theoretical);
    let rms_error = rms_error(experimental, theoretical);
    let measured = ExtremaSet::detect(experimental);
    let predicted = ExtremaSet::detect(theoretical);

    debug!(
        samples = experimental.len(),
        correlation,
        rms_error,
        experimental_peaks = measured.peaks.len(),
        theoretical_peaks = predicted.peaks.len(),
        "compared patterns"
    );

    Ok(ComparisonResult {
        correlation,
        rms_error,
        experimental_peaks: measured.peaks,
        theoretical_peaks: predicted.peaks,
        experimental_minima: measured.minima,
        theoretical_minima: predicted.minima,
    })
}

/// Holds a loaded experimental sequence between loading and comparison
#[derive(Debug, Clone, Default)]
pub struct PatternAnalyzer {
    experimental: Option<Vec<f64>>,
    theoretical: Option<IntensityPattern>,
}

impl PatternAnalyzer {
    /// Analyzer with nothing loaded
    pub const fn new() -> Self {
        Self {
            experimental: None,
            theoretical: None,
        }
    }

    /// Replace the experimental sequence
    ///
    /// Values are expected to be normalized intensities; how they were
    /// produced is up to the caller.
    pub fn load_experimental(&mut self, values: Vec<f64>) {
        self.experimental = Some(values);
        self.theoretical = None;
    }

    /// Currently loaded experimental sequence
    pub fn experimental(&self) -> Option<&[f64]> {
        self.experimental.as_deref()
    }

    /// Theoretical pattern generated by the last [`Self::compare_with_theory`]
    pub const fn theoretical(&self) -> Option<&IntensityPattern> {
        self.theoretical.as_ref()
    }

    /// Compare the loaded sequence with a caller-supplied theoretical one
    ///
    /// # Errors
    ///
    /// Returns `NoData` if nothing is loaded and otherwise the errors of [`compare`]
    pub fn compare_with(&self, theoretical: &[f64]) -> Result<ComparisonResult> {
        let experimental = self.experimental().ok_or(SimulationError::NoData)?;
        compare(experimental, theoretical)
    }

    /// Regenerate the double-slit pattern at the loaded resolution and compare
    ///
    /// The theoretical pattern spans `screen_width` meters with one sample per
    /// experimental sample and is kept for later inspection.
    ///
    /// # Errors
    ///
    /// Returns `NoData` if nothing is loaded or the loaded sequence is empty,
    /// `InvalidParameter` naming `experimental` if the loaded sequence holds a
    /// single sample (a screen needs at least two), and `InvalidParameter` if
    /// `screen_width` is invalid
    pub fn compare_with_theory(
        &mut self,
        model: &PatternModel,
        screen_width: f64,
    ) -> Result<ComparisonResult> {
        let resolution = self
            .experimental()
            .map(<[f64]>::len)
            .filter(|&len| len > 0)
            .ok_or(SimulationError::NoData)?;
        if resolution < MIN_RESOLUTION {
            return Err(invalid_parameter(
                "experimental",
                &resolution,
                &format!("regenerating theory needs at least {MIN_RESOLUTION} loaded samples"),
            ));
        }

        let (_, theoretical) = model.evaluate(screen_width, resolution, SlitMode::Double)?;
        let result = self.compare_with(theoretical.as_slice())?;
        self.theoretical = Some(theoretical);
        Ok(result)
    }
}
